//! Utility modules for the key finder widget
//!
//! This module contains utility functions and helpers shared by
//! the renderers.

pub mod escape;

// Re-export commonly used functions
pub use escape::*;
