//! FFI bridge crate for UI hosts.

pub mod api;
