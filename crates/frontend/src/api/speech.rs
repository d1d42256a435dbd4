use crate::shared::api_utils::api_url;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

/// Synthesize `text` on the backend and return a playable object URL
///
/// `Ok(None)` means the backend has speech output switched off.
pub async fn speech_api(text: &str) -> Result<Option<String>, String> {
    let response = Request::post(&api_url("/speech"))
        .json(&serde_json::json!({ "text": text }))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 204 || response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Speech failed: {}", response.status()));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    if bytes.is_empty() {
        return Ok(None);
    }

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("audio/mp3");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e: JsValue| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
    Ok(Some(url))
}
