//! Binding to the chat client's embedded WebApp bridge (`window.Telegram.WebApp`).
//!
//! The bridge object is looked up at runtime so the app still renders in a
//! plain browser tab; every capability degrades to a no-op or `window.alert`.

mod user;

pub use user::{BridgeUser, UserInfo};

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    type WebApp;

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method, js_name = showPopup)]
    fn show_popup(this: &WebApp, params: &JsValue);

    #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
    fn init_data_unsafe(this: &WebApp) -> JsValue;
}

/// Parameters of the native popup
#[derive(Debug, Clone, Serialize)]
pub struct PopupParams {
    pub title: String,
    pub message: String,
    pub buttons: Vec<PopupButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopupButton {
    #[serde(rename = "type")]
    pub kind: String,
}

impl PopupButton {
    pub fn close() -> Self {
        Self {
            kind: "close".to_string(),
        }
    }
}

/// Handle to the host bridge
#[derive(Clone, Debug)]
pub struct HostBridge {
    web_app: WebApp,
}

impl HostBridge {
    /// Find `window.Telegram.WebApp`, `None` outside the host client
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if !web_app.is_object() {
            return None;
        }
        Some(Self {
            web_app: web_app.unchecked_into(),
        })
    }

    /// Ask the host to expand the mini app to full height
    pub fn expand(&self) {
        self.web_app.expand();
    }

    /// Current user as reported by the host (unsigned init data)
    pub fn user(&self) -> Option<BridgeUser> {
        let init_data = self.web_app.init_data_unsafe();
        if !init_data.is_object() {
            return None;
        }
        let user = js_sys::Reflect::get(&init_data, &JsValue::from_str("user")).ok()?;
        if user.is_undefined() || user.is_null() {
            return None;
        }
        match serde_wasm_bindgen::from_value::<BridgeUser>(user) {
            Ok(u) => Some(u),
            Err(e) => {
                log::warn!("Unexpected user payload from host bridge: {}", e);
                None
            }
        }
    }

    pub fn show_popup(&self, params: &PopupParams) -> Result<(), String> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = params
            .serialize(&serializer)
            .map_err(|e| format!("Failed to serialize popup: {}", e))?;
        self.web_app.show_popup(&value);
        Ok(())
    }
}

/// Show a popup through the bridge, or a browser alert outside the host
pub fn show_popup(bridge: Option<&HostBridge>, params: PopupParams) {
    if let Some(bridge) = bridge {
        match bridge.show_popup(&params) {
            Ok(()) => return,
            Err(e) => log::error!("{}", e),
        }
    }
    alert(&format!("{}\n\n{}", params.title, params.message));
}

/// Plain browser alert
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
