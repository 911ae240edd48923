//! Persistence contracts over key-value storage.
//!
//! # Responsibility
//! - Keep storage encoding details out of the controller.

pub mod selection_store;
