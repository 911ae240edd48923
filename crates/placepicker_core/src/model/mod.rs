//! Domain model for the place catalog.
//!
//! # Responsibility
//! - Define the immutable `Place` record and the read-only `Catalog`.
//!
//! # Invariants
//! - Every place is identified by an id unique within its catalog.
//! - Places are never created or destroyed at runtime.

pub mod catalog;
pub mod place;
