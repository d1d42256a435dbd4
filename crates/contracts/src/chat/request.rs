use super::response::ResponseMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMode {
    #[default]
    Hybrid,
    Vectors,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GPT4VInput {
    #[default]
    TextAndImages,
    Images,
    Texts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VectorFields {
    #[default]
    #[serde(rename = "textEmbeddingOnly")]
    Embedding,
    #[serde(rename = "imageEmbeddingOnly")]
    ImageEmbedding,
    #[serde(rename = "textAndImageEmbeddings")]
    TextAndImageEmbeddings,
}

/// Per-request tuning knobs forwarded to the retrieval pipeline.
///
/// Unset options are left out of the JSON so the backend applies its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatAppRequestOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_mode: Option<RetrievalMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_ranker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_captions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_rewriting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_subqueries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_merge_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_search_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_reranker_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_followup_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_oid_security_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_groups_security_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_gpt4v: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpt4v_input: Option<GPT4VInput>,
    pub vector_fields: VectorFields,
    pub language: String,
    pub use_agentic_retrieval: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatAppRequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ChatAppRequestOverrides>,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatAppRequest {
    pub messages: Vec<ResponseMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ChatAppRequestContext>,
    pub session_state: Option<Value>,
}

impl ChatAppRequest {
    pub fn new(messages: Vec<ResponseMessage>, session_state: Option<Value>) -> Self {
        Self {
            messages,
            context: None,
            session_state,
        }
    }

    pub fn with_overrides(mut self, overrides: ChatAppRequestOverrides) -> Self {
        self.context = Some(ChatAppRequestContext {
            overrides: Some(overrides),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(RetrievalMode::Vectors).unwrap(), json!("vectors"));
        assert_eq!(
            serde_json::to_value(GPT4VInput::TextAndImages).unwrap(),
            json!("textAndImages")
        );
        assert_eq!(
            serde_json::to_value(VectorFields::Embedding).unwrap(),
            json!("textEmbeddingOnly")
        );
        assert_eq!(
            serde_json::from_value::<VectorFields>(json!("textAndImageEmbeddings")).unwrap(),
            VectorFields::TextAndImageEmbeddings
        );
    }

    #[test]
    fn test_unset_overrides_are_omitted() {
        let overrides = ChatAppRequestOverrides {
            top: Some(3),
            language: "en".to_string(),
            ..Default::default()
        };
        let request = ChatAppRequest::new(
            vec![ResponseMessage::user("What is covered?")],
            Some(json!("session-1")),
        )
        .with_overrides(overrides);

        let value = serde_json::to_value(&request).unwrap();
        let sent = &value["context"]["overrides"];
        assert_eq!(sent["top"], 3);
        assert_eq!(sent["vector_fields"], "textEmbeddingOnly");
        assert!(sent.get("temperature").is_none());
        assert!(sent.get("retrieval_mode").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["session_state"], "session-1");
    }

    #[test]
    fn test_request_without_context_sends_null_session() {
        let value = serde_json::to_value(ChatAppRequest::new(vec![], None)).unwrap();
        assert!(value.get("context").is_none());
        assert!(value["session_state"].is_null());
    }
}
