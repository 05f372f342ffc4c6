//! WASM API over the shared widget session
//!
//! The session and configuration live in process-wide storage owned by WASM.
//! JavaScript only ever sees rendered strings and display lists.

use wasm_bindgen::prelude::*;
use std::sync::{Mutex, MutexGuard};
use lazy_static::lazy_static;

use super::helpers::{deserialize, serialize, widget_error};
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::models::Note;
use crate::renderers::{render_html, DisplayList, LayoutEngine, SVGRenderer};
use crate::session::{Bias, Session};
use crate::theory::{build_key_signature, build_major_scale};
use crate::{wasm_info, wasm_log};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<Session>> = Mutex::new(None);
    static ref CONFIG: Mutex<WidgetConfig> = Mutex::new(WidgetConfig::default());
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, WidgetError> {
    mutex
        .lock()
        .map_err(|e| WidgetError::SessionUnavailable(e.to_string()))
}

/// Run `f` against the shared session, creating it from entropy on first use
fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> Result<T, WidgetError> {
    let mut guard = lock(&*SESSION)?;
    let session = guard.get_or_insert_with(|| {
        wasm_log!("creating session from entropy");
        Session::from_entropy()
    });
    Ok(f(session))
}

// ============================================================================
// Session operations (plain Rust, used by the exports below)
// ============================================================================

/// Replace the shared session, seeded when `seed` is given
pub fn reset_session(seed: Option<u64>) -> Result<(), WidgetError> {
    let session = match seed {
        Some(seed) => Session::seeded(seed),
        None => Session::from_entropy(),
    };
    *lock(&*SESSION)? = Some(session);
    Ok(())
}

/// Replace the widget configuration
pub fn set_config(config: WidgetConfig) -> Result<(), WidgetError> {
    config.validate()?;
    *lock(&*CONFIG)? = config;
    Ok(())
}

/// Pick a random key for `bias` ("sharps" or "flats")
pub fn pick_key(bias: &str) -> Result<Note, WidgetError> {
    let bias: Bias = bias.parse()?;
    with_session(|session| session.pick_random_key(bias))
}

/// Make `root` the current key
pub fn choose_root(root: &str) -> Result<Note, WidgetError> {
    let root: Note = root.parse()?;
    with_session(|session| session.set_root(root))?;
    Ok(root)
}

/// Return to the prompt
pub fn clear_session_root() -> Result<(), WidgetError> {
    with_session(|session| session.clear())
}

pub fn session_root() -> Result<Option<Note>, WidgetError> {
    with_session(|session| session.current_root())
}

/// Display list for the current session under the current configuration
pub fn current_display_list() -> Result<DisplayList, WidgetError> {
    let view = with_session(|session| session.view())?;
    let config = lock(&*CONFIG)?.clone();
    Ok(LayoutEngine::new(config).compute_layout(&view))
}

/// Scale names for `root`, octave included
pub fn scale_names(root: &str) -> Result<Vec<String>, WidgetError> {
    let root: Note = root.parse()?;
    Ok(build_major_scale(root).display_names())
}

/// Key signature glyphs for `root`, in circle-of-fifths order
pub fn key_signature_glyphs(root: &str) -> Result<Vec<String>, WidgetError> {
    let root: Note = root.parse()?;
    let scale = build_major_scale(root);
    Ok(build_key_signature(&scale, root)
        .glyphs()
        .into_iter()
        .map(str::to_string)
        .collect())
}

// ============================================================================
// JavaScript exports
// ============================================================================

/// Reset the widget session
///
/// # Parameters
/// - `seed`: optional seed; the same seed gives the same sequence of keys
#[wasm_bindgen(js_name = initSession)]
pub fn init_session(seed: Option<u32>) -> Result<(), JsValue> {
    wasm_info!("initSession called: seed={:?}", seed);
    reset_session(seed.map(u64::from)).map_err(widget_error)
}

/// Replace the widget configuration with a (possibly partial) config object
#[wasm_bindgen(js_name = configure)]
pub fn configure(config_js: JsValue) -> Result<(), JsValue> {
    let config: WidgetConfig = deserialize(config_js, "Invalid widget configuration")?;
    wasm_log!("configure: clef={}, spacing={}", config.staff.clef_src, config.staff.accidental_spacing);
    set_config(config).map_err(widget_error)
}

/// Pick a random key biased toward sharps or flats
///
/// # Returns
/// The chosen root, e.g. `"G♯♯♯♯"`
#[wasm_bindgen(js_name = pickRandomKey)]
pub fn pick_random_key(bias: &str) -> Result<String, JsValue> {
    wasm_info!("pickRandomKey called: bias={}", bias);
    pick_key(bias).map(|root| root.to_string()).map_err(widget_error)
}

/// Set the current key directly, e.g. `"Eb"` or `"F♯♯"`
#[wasm_bindgen(js_name = setRoot)]
pub fn set_root(root: &str) -> Result<String, JsValue> {
    wasm_info!("setRoot called: root={}", root);
    choose_root(root).map(|root| root.to_string()).map_err(widget_error)
}

/// Clear the current key and return to the prompt
#[wasm_bindgen(js_name = clearRoot)]
pub fn clear_root() -> Result<(), JsValue> {
    clear_session_root().map_err(widget_error)
}

/// The current key, or `undefined` on the prompt screen
#[wasm_bindgen(js_name = currentRoot)]
pub fn current_root() -> Result<Option<String>, JsValue> {
    session_root()
        .map(|root| root.map(|r| r.to_string()))
        .map_err(widget_error)
}

/// Major scale of `root` as eight note names
#[wasm_bindgen(js_name = buildMajorScale)]
pub fn build_major_scale_js(root: &str) -> Result<JsValue, JsValue> {
    let names = scale_names(root).map_err(widget_error)?;
    serialize(&names, "Failed to serialize scale")
}

/// Key signature of `root` as seven glyph strings
#[wasm_bindgen(js_name = buildKeySignature)]
pub fn build_key_signature_js(root: &str) -> Result<JsValue, JsValue> {
    let glyphs = key_signature_glyphs(root).map_err(widget_error)?;
    serialize(&glyphs, "Failed to serialize key signature")
}

/// Display list for the current screen
#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    let display = current_display_list().map_err(widget_error)?;
    serialize(&display, "Failed to serialize display list")
}

/// HTML fragment for the current screen
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_js() -> Result<String, JsValue> {
    let display = current_display_list().map_err(widget_error)?;
    Ok(render_html(&display))
}

/// SVG of the key signature staff, or `undefined` on the prompt screen
#[wasm_bindgen(js_name = renderSvg)]
pub fn render_svg() -> Result<Option<String>, JsValue> {
    let display = current_display_list().map_err(widget_error)?;
    Ok(SVGRenderer::render_display_list(&display))
}
