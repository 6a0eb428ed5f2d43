//! JS collaborators loaded from `<script>` tags
//!
//! Both imports use `catch`: if a script failed to load, the global is
//! undefined and the call returns `Err` instead of trapping.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ConfettiBurst;

#[wasm_bindgen]
extern "C" {
    /// canvas-confetti global
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;

    /// APlayer music widget
    pub type APlayer;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(options: &JsValue) -> Result<APlayer, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn play(this: &APlayer) -> Result<JsValue, JsValue>;
}

/// Serialize to a plain JS object
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Fire one confetti burst. Fire-and-forget.
pub fn fire_confetti(burst: &ConfettiBurst) {
    let result = to_js(burst).and_then(|options| confetti_js(&options));
    if let Err(e) = result {
        log::warn!("Confetti unavailable: {:?}", e);
    }
}
