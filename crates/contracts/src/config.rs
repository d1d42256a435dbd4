use serde::{Deserialize, Serialize};

/// Feature flags served by `GET /config`.
///
/// Missing flags are treated as disabled so an older backend never switches
/// on UI it cannot serve.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_reasoning_effort: String,
    #[serde(rename = "showGPT4VOptions")]
    pub show_gpt4v_options: bool,
    pub show_semantic_ranker_option: bool,
    pub show_query_rewriting_option: bool,
    pub show_reasoning_effort_option: bool,
    pub streaming_enabled: bool,
    pub show_vector_option: bool,
    pub show_user_upload: bool,
    pub show_language_picker: bool,
    pub show_speech_input: bool,
    pub show_speech_output_browser: bool,
    pub show_speech_output_azure: bool,
    pub show_chat_history_browser: bool,
    pub show_chat_history_cosmos: bool,
    pub show_agentic_retrieval_option: bool,
}

/// Generic acknowledgement body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleApiResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_camel_case() {
        let config: Config = serde_json::from_value(json!({
            "defaultReasoningEffort": "medium",
            "showGPT4VOptions": true,
            "showSpeechOutputBrowser": true,
            "showSpeechOutputAzure": false,
            "streamingEnabled": true
        }))
        .unwrap();
        assert_eq!(config.default_reasoning_effort, "medium");
        assert!(config.show_gpt4v_options);
        assert!(config.show_speech_output_browser);
        assert!(!config.show_speech_output_azure);
        assert!(config.streaming_enabled);
        assert!(!config.show_chat_history_cosmos);
    }

    #[test]
    fn test_empty_config_disables_everything() {
        let config: Config = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_simple_response_without_message() {
        let body: SimpleApiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.message.is_none());
    }
}
