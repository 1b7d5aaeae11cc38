//! # widget-wasm
//!
//! WebAssembly bindings for widget-core, so a front-end integrator can run
//! the same configuration and basket checks client-side before handing the
//! payload to the widget.
//!
//! The message callback stays a JavaScript value on the JS side of the
//! boundary; only the data-bearing configuration fields cross into WASM.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { validate_basket_json, validate_config_fields } from 'widget-wasm';
//!
//! await init();
//!
//! validate_config_fields({
//!   provider: 'II',
//!   address: 'merchant@shop.example',
//!   domain: 'https://foo.ic0.app',
//!   notify: { principalId: 'em77e-bvlzu-aq', methodName: 'on_payment' },
//! });
//!
//! const items = validate_basket_json([{ name: 'Widget', value: 10, token: 'TEST' }]);
//! ```
//!
//! Failed validation rejects with an array of `{path, kind, message}`
//! objects.
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use wasm_bindgen::prelude::*;
use widget_core::ValidationError;

fn violations_to_js(err: &ValidationError) -> JsValue {
    serde_wasm_bindgen::to_value(&err.violations)
        .unwrap_or_else(|_| JsValue::from_str(&err.to_string()))
}

/// Validate a basket payload; returns the normalized item list.
///
/// Rejects with the violation list if any item breaks a rule.
#[wasm_bindgen]
pub fn validate_basket_json(items: JsValue) -> Result<JsValue, JsValue> {
    let raw: serde_json::Value = serde_wasm_bindgen::from_value(items)
        .map_err(|e| JsValue::from_str(&format!("basket is not valid JSON data: {}", e)))?;

    match widget_core::validate_basket(&raw) {
        Ok(items) => serde_wasm_bindgen::to_value(&items)
            .map_err(|e| JsValue::from_str(&e.to_string())),
        Err(err) => Err(violations_to_js(&err)),
    }
}

/// Validate the data-bearing configuration fields.
///
/// The callback is not part of the payload here; keep it on the JS side and
/// pass it to the widget directly.
#[wasm_bindgen]
pub fn validate_config_fields(config: JsValue) -> Result<(), JsValue> {
    let raw: serde_json::Value = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("configuration is not valid JSON data: {}", e)))?;

    widget_core::validate_config_fields(&raw).map_err(|err| violations_to_js(&err))
}

/// True if `text` is a canonical principal text (decode/re-encode round
/// trip reproduces the input exactly).
#[wasm_bindgen]
pub fn is_valid_identity(text: &str) -> bool {
    widget_core::is_valid_identity(text)
}
