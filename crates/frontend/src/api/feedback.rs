use crate::shared::api_utils::{api_url, with_auth};
use contracts::config::SimpleApiResponse;
use contracts::feedback::FeedbackRequest;
use gloo_net::http::Request;

/// Submit a thumbs up/down (or its removal) for one answer
///
/// The bearer token is attached only when present; without it the request
/// is sent anonymously.
pub async fn send_feedback_api(
    request: &FeedbackRequest,
    token: Option<&str>,
) -> Result<SimpleApiResponse, String> {
    log::debug!(
        "Sending feedback {} for session {} message {}",
        request.feedback_type.as_str(),
        request.session_id,
        request.message_index
    );

    let response = with_auth(Request::post(&api_url("/feedback")), token)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Feedback failed: {}", response.status()));
    }

    // The acknowledgement body is informational; an empty body is still success.
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    if text.trim().is_empty() {
        return Ok(SimpleApiResponse::default());
    }
    serde_json::from_str::<SimpleApiResponse>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
