//! Shim over the embedding mini-app host SDK.
//! The SDK itself is opaque: when the page runs inside a host shell, the
//! shell injects a `miniAppSdk` global (`isInMiniApp()` and
//! `actions.ready()`, both Promise-returning). We only reach it through
//! `Reflect`, so a plain web page, where the global is absent, takes the
//! failure path and reports "not in host".

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const SDK_GLOBAL: &str = "miniAppSdk";

fn sdk_object() -> Option<JsValue> {
    let window = web_sys::window()?;
    let sdk = js_sys::Reflect::get(&window, &JsValue::from_str(SDK_GLOBAL)).ok()?;
    if sdk.is_undefined() || sdk.is_null() {
        None
    } else {
        Some(sdk)
    }
}

async fn call_sdk_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<js_sys::Function>()?;
    let result = method.call0(target)?;
    match result.dyn_into::<js_sys::Promise>() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(value) => Ok(value),
    }
}

/// Ask the host shell whether we run embedded. Any failure (no SDK global,
/// rejected promise, unexpected return shape) means "not in host".
pub async fn detect_host_environment() -> bool {
    let Some(sdk) = sdk_object() else {
        return false;
    };
    match call_sdk_method(&sdk, "isInMiniApp").await {
        Ok(value) => value.as_bool().unwrap_or(false),
        Err(_) => false,
    }
}

/// Tell the host the UI is mounted. Called exactly once per boot; the host
/// may legitimately be absent, so failures are ignored.
pub async fn signal_ready() {
    let Some(sdk) = sdk_object() else {
        return;
    };
    let Ok(actions) = js_sys::Reflect::get(&sdk, &JsValue::from_str("actions")) else {
        return;
    };
    let _ = call_sdk_method(&actions, "ready").await;
}
