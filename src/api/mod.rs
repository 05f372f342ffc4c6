//! Key finder WASM API
//!
//! This module provides the JavaScript-facing API for the widget.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `core`: The shared session and every exported function

pub mod helpers;
pub mod core;

// Re-export all public functions from modules to maintain the current public API
pub use self::core::*;
