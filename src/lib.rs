//! Key Finder WASM Module
//!
//! Picks a major key, spells its scale and lays out its key signature on a
//! treble staff. The theory core is pure; the session and renderers are
//! driven from JavaScript through the `api` module.

pub mod error;
pub mod config;
pub mod models;
pub mod theory;
pub mod session;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use error::{WidgetError, NoteParseError, BiasParseError};
pub use config::{WidgetConfig, StaffLayout, WidgetText};
pub use models::{Letter, AccidentalKind, Note};
pub use theory::{build_major_scale, build_key_signature, Scale, KeySignature};
pub use session::{Bias, Session, SessionView};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Key finder WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    // Err only when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
