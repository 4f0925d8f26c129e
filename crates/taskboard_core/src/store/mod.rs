//! In-memory board state.
//!
//! # Responsibility
//! - Own the project collection and the current-project pointer.
//! - Apply every board mutation under single-writer discipline.
//!
//! # Invariants
//! - The store is never empty after construction.
//! - A failed operation leaves the store unchanged.

pub mod board_store;
