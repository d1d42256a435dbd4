use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySession {
    pub id: String,
    pub entra_oid: String,
    pub title: String,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

/// Page of stored conversations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryListApiResponse {
    #[serde(default)]
    pub sessions: Vec<HistorySession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

/// One stored conversation; `answers` is the backend's opaque transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryApiResponse {
    pub id: String,
    pub entra_oid: String,
    #[serde(default)]
    pub answers: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_list_continuation() {
        let page: HistoryListApiResponse = serde_json::from_value(json!({
            "sessions": [{"id": "s1", "entra_oid": "u1", "title": "Benefits", "timestamp": 1700000000000i64}],
            "continuation_token": "next"
        }))
        .unwrap();
        assert_eq!(page.sessions[0].title, "Benefits");
        assert_eq!(page.continuation_token.as_deref(), Some("next"));

        let last: HistoryListApiResponse = serde_json::from_value(json!({"sessions": []})).unwrap();
        assert!(last.continuation_token.is_none());
    }
}
