//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, selection store and dialog into picker use-cases.
//! - Keep host layers (FFI, CLI) decoupled from storage details.

pub mod picker_service;
