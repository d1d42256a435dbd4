use crate::shared::api_utils::{api_url, with_auth};
use contracts::chat::{ChatAppRequest, ChatAppResponse, ChatAppResponseOrError};
use contracts::config::Config;
use gloo_net::http::Request;

/// Ask the backend for a complete (non-streamed) answer
pub async fn chat_api(
    request: &ChatAppRequest,
    token: Option<&str>,
) -> Result<ChatAppResponse, String> {
    let response = with_auth(Request::post(&api_url("/chat")), token)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    // Errors usually come back as {"error": "..."} with a 4xx/5xx status.
    let parsed = serde_json::from_str::<ChatAppResponseOrError>(&text);
    if !(200..300).contains(&status) {
        return Err(match parsed {
            Ok(ChatAppResponseOrError {
                error: Some(error), ..
            }) => error,
            _ => format!("Server error: {}", status),
        });
    }

    parsed
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}

/// Fetch the feature flags
pub async fn config_api() -> Result<Config, String> {
    let response = Request::get(&api_url("/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<Config>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
