use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::RequestCache;

/// Fetches the materials document, bypassing the HTTP cache.
/// Failures are logged and reported as `None`; the panel then renders its empty state.
pub async fn load_materials(url: String) -> Option<Value> {
    match fetch_json(&url).await {
        Ok(data) => Some(data),
        Err(err) => {
            web_sys::console::info_2(
                &JsValue::from_str("Materialdaten konnten nicht geladen werden."),
                &err,
            );
            None
        }
    }
}

async fn fetch_json(url: &str) -> Result<Value, JsValue> {
    let resp = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("Request failed with status {}", resp.status())));
    }
    resp.json().await.map_err(|e| JsValue::from_str(&e.to_string()))
}
