use serde::{Deserialize, Serialize};

/// Feedback action sent for one answer. `Remove` clears a previous vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Positive,
    Negative,
    Remove,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Positive => "positive",
            FeedbackType::Negative => "negative",
            FeedbackType::Remove => "remove",
        }
    }
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub session_id: String,
    pub message_index: usize,
    pub feedback_type: FeedbackType,
}

impl FeedbackRequest {
    pub fn new(session_id: impl Into<String>, message_index: usize, feedback_type: FeedbackType) -> Self {
        Self {
            session_id: session_id.into(),
            message_index,
            feedback_type,
        }
    }
}
