use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single chat message as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    pub role: String,
}

impl ResponseMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: "user".to_string(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: "assistant".to_string(),
        }
    }
}

/// One step of the backend's retrieval/reasoning trace.
///
/// `description` can be any JSON the backend chose to emit (a string, a list of
/// messages, a search query object...), so it is kept as a raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub title: String,
    #[serde(default)]
    pub description: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseContext {
    #[serde(default)]
    pub data_points: Vec<String>,
    #[serde(default)]
    pub followup_questions: Option<Vec<String>>,
    #[serde(default)]
    pub thoughts: Vec<Thought>,
}

impl ResponseContext {
    pub fn has_thoughts(&self) -> bool {
        !self.thoughts.is_empty()
    }

    pub fn has_data_points(&self) -> bool {
        !self.data_points.is_empty()
    }

    /// Follow-up questions; absent and empty lists both yield an empty slice
    pub fn followups(&self) -> &[String] {
        self.followup_questions.as_deref().unwrap_or(&[])
    }
}

/// Answer for one exchange.
///
/// While streaming, `delta` holds the newest increment and `message` the
/// accumulated text; once the stream ends `message` is final.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatAppResponse {
    #[serde(default)]
    pub message: ResponseMessage,
    #[serde(default)]
    pub delta: ResponseMessage,
    #[serde(default)]
    pub context: ResponseContext,
    #[serde(default)]
    pub session_state: Option<Value>,
}

impl ChatAppResponse {
    /// Session identifier the answer belongs to.
    ///
    /// Strings are returned verbatim, other scalars are rendered as JSON text.
    /// `null`, a missing field and the empty string all mean "no session".
    pub fn session_id(&self) -> Option<String> {
        match self.session_state.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Appends a streamed increment to the accumulated message
    pub fn apply_delta(&mut self, delta: ResponseMessage) {
        self.message.content.push_str(&delta.content);
        if !delta.role.is_empty() {
            self.message.role = delta.role.clone();
        }
        self.delta = delta;
    }
}

/// Raw body of `/chat`: either a normal answer or an error reported in-band
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatAppResponseOrError {
    #[serde(flatten)]
    pub response: ChatAppResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatAppResponseOrError {
    pub fn into_result(self) -> Result<ChatAppResponse, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with_session(session_state: Value) -> ChatAppResponse {
        ChatAppResponse {
            session_state: Some(session_state),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_full_response() {
        let body = json!({
            "message": {"content": "Plans include [benefits.pdf#page=2].", "role": "assistant"},
            "delta": {"content": "", "role": "assistant"},
            "context": {
                "data_points": ["benefits.pdf#page=2: Dental is covered."],
                "followup_questions": ["Is vision covered?"],
                "thoughts": [
                    {"title": "Search query", "description": "dental plan", "props": {"top": 3}},
                    {"title": "Prompt", "description": [{"role": "system", "content": "..."}]}
                ]
            },
            "session_state": "abc-123"
        });

        let response: ChatAppResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message.role, "assistant");
        assert_eq!(response.context.data_points.len(), 1);
        assert_eq!(response.context.followups(), ["Is vision covered?".to_string()]);
        assert_eq!(response.context.thoughts[0].props.as_ref().unwrap()["top"], 3);
        assert!(response.context.thoughts[1].description.is_array());
        assert!(response.context.thoughts[1].props.is_none());
        assert_eq!(response.session_id().as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_context_collections_default_to_empty() {
        let response: ChatAppResponse =
            serde_json::from_value(json!({"message": {"content": "hi", "role": "assistant"}}))
                .unwrap();
        assert!(!response.context.has_thoughts());
        assert!(!response.context.has_data_points());
        assert!(response.context.followup_questions.is_none());
        assert!(response.context.followups().is_empty());
        assert!(response.session_id().is_none());
    }

    #[test]
    fn test_null_and_empty_followups_are_equivalent() {
        let null_ctx: ResponseContext =
            serde_json::from_value(json!({"data_points": [], "followup_questions": null, "thoughts": []}))
                .unwrap();
        let empty_ctx: ResponseContext =
            serde_json::from_value(json!({"data_points": [], "followup_questions": [], "thoughts": []}))
                .unwrap();
        assert!(null_ctx.followup_questions.is_none());
        assert_eq!(empty_ctx.followup_questions, Some(vec![]));
        assert_eq!(null_ctx.followups(), empty_ctx.followups());
    }

    #[test]
    fn test_session_id_variants() {
        assert_eq!(response_with_session(Value::Null).session_id(), None);
        assert_eq!(response_with_session(json!("")).session_id(), None);
        assert_eq!(response_with_session(json!("  ")).session_id(), None);
        assert_eq!(response_with_session(json!(42)).session_id().as_deref(), Some("42"));
        assert_eq!(ChatAppResponse::default().session_id(), None);
    }

    #[test]
    fn test_apply_delta_accumulates() {
        let mut response = ChatAppResponse::default();
        response.apply_delta(ResponseMessage::assistant("Hello"));
        response.apply_delta(ResponseMessage {
            content: ", world".to_string(),
            role: String::new(),
        });
        assert_eq!(response.message.content, "Hello, world");
        assert_eq!(response.message.role, "assistant");
        assert_eq!(response.delta.content, ", world");
    }

    #[test]
    fn test_error_body_becomes_err() {
        let body: ChatAppResponseOrError =
            serde_json::from_value(json!({"error": "The app encountered an error"})).unwrap();
        assert_eq!(body.into_result().unwrap_err(), "The app encountered an error");

        let ok: ChatAppResponseOrError = serde_json::from_value(
            json!({"message": {"content": "ok", "role": "assistant"}, "session_state": null}),
        )
        .unwrap();
        assert_eq!(ok.into_result().unwrap().message.content, "ok");
    }

    #[test]
    fn test_error_wrapper_carries_every_response_field() {
        let body = json!({
            "message": {"content": "Dental is covered [a.pdf].", "role": "assistant"},
            "delta": {"content": ".", "role": "assistant"},
            "context": {
                "data_points": ["a.pdf: dental"],
                "followup_questions": ["Is vision covered?"],
                "thoughts": [{"title": "Search query", "description": "dental"}]
            },
            "session_state": "abc-123"
        });
        let direct: ChatAppResponse = serde_json::from_value(body.clone()).unwrap();
        let wrapped: ChatAppResponseOrError = serde_json::from_value(body.clone()).unwrap();
        assert!(wrapped.error.is_none());
        assert_eq!(wrapped.response, direct);
        assert_eq!(serde_json::to_value(&wrapped).unwrap(), serde_json::to_value(&direct).unwrap());
        assert_eq!(wrapped.into_result().unwrap(), direct);
    }
}
