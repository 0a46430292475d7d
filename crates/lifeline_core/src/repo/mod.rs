//! Repository layer abstractions and filesystem persistence.
//!
//! # Responsibility
//! - Define use-case oriented storage contracts for journaled events.
//! - Isolate file layout and I/O details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Event::validate()` before persisting.
//! - Repository APIs return semantic errors (`NotFound`, `Decode`) in
//!   addition to I/O transport errors.

pub mod event_repo;
