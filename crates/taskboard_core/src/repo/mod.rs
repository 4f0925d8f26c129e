//! Persistence layer abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the snapshot load/save contract used by the board service.
//! - Isolate slot storage and document repair details from the store.
//!
//! # Invariants
//! - The whole board persists as one JSON document under one slot key.
//! - Load-side repair never touches task data.

pub mod snapshot_repo;
