//! WASM build test
//!
//! This module tests that the exported API works in a browser.

use keyfinder_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_session_starts_at_prompt() {
    init_session(Some(1)).unwrap();
    assert_eq!(current_root().unwrap(), None);
    assert!(render_svg().unwrap().is_none());
    assert!(render_html_js().unwrap().contains("I like sharps!"));
}

#[wasm_bindgen_test]
fn test_pick_random_key() {
    init_session(Some(7)).unwrap();
    let root = pick_random_key("sharps").unwrap();
    assert!(root.contains('♯') || root.contains('𝄪'));
    assert_eq!(current_root().unwrap(), Some(root.clone()));

    let html = render_html_js().unwrap();
    assert!(html.contains(&format!("You should use the key of {} major!", root)));
    assert!(render_svg().unwrap().is_some());
}

#[wasm_bindgen_test]
fn test_invalid_bias_is_an_error() {
    init_session(Some(3)).unwrap();
    assert!(pick_random_key("naturals").is_err());
}

#[wasm_bindgen_test]
fn test_stateless_builders() {
    let scale: Vec<String> =
        serde_wasm_bindgen::from_value(build_major_scale_js("G").unwrap()).unwrap();
    assert_eq!(scale, vec!["G", "A", "B", "C", "D", "E", "F♯", "G"]);

    let glyphs: Vec<String> =
        serde_wasm_bindgen::from_value(build_key_signature_js("F").unwrap()).unwrap();
    assert_eq!(glyphs, vec!["♭", "", "", "", "", "", ""]);
}

#[wasm_bindgen_test]
fn test_configure_with_partial_object() {
    let config = partial_config();
    configure(config).unwrap();
    set_root("A").unwrap();
    assert!(render_html_js().unwrap().contains("Pick one"));
}

fn partial_config() -> JsValue {
    #[derive(serde::Serialize)]
    struct Text {
        prompt: &'static str,
        #[serde(rename = "retryPrompt")]
        retry_prompt: &'static str,
    }
    #[derive(serde::Serialize)]
    struct Partial {
        text: Text,
    }
    serde_wasm_bindgen::to_value(&Partial {
        text: Text {
            prompt: "Pick one",
            retry_prompt: "Pick one",
        },
    })
    .unwrap()
}
