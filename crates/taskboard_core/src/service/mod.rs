//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and snapshot persistence into one facade.
//! - Keep UI callers decoupled from storage details.

pub mod board_service;
