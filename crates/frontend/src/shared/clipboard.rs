//! Clipboard utilities for copying text to clipboard
//!
//! Wraps the Web Clipboard API so callers can react to success or failure.

/// Copy text to the system clipboard
///
/// Resolves once the browser has accepted the text. Errors (no window,
/// permission denied, insecure context) come back as a message instead of
/// being swallowed, so the caller decides what to show.
///
/// # Example
/// ```ignore
/// spawn_local(async move {
///     if let Err(e) = copy_to_clipboard("Hello, World!").await {
///         log::error!("Failed to copy text: {}", e);
///     }
/// });
/// ```
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
