//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical project/column/task records used by core logic.
//! - Keep the serialized shape byte-compatible with persisted board
//!   documents.
//!
//! # Invariants
//! - Every domain object is identified by an opaque string id.
//! - A task's `done` flag keeps its absent/false distinction across
//!   serialization round trips.

pub mod board;
pub mod image_ref;
