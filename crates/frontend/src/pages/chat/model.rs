//! Chat Page - Model

use crate::components::analysis_panel::AnalysisPanelTab;
use contracts::chat::{ChatAppRequest, ChatAppRequestOverrides, ChatAppResponse, ResponseMessage};
use uuid::Uuid;

pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "What is included in my Northwind Health Plus plan that is not in standard?",
    "What happens in a performance review?",
    "What does a Product Manager do?",
];

/// One question and the answer it produced
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub id: Uuid,
    pub question: String,
    pub response: ChatAppResponse,
}

impl ChatTurn {
    pub fn new(question: String, response: ChatAppResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            response,
        }
    }
}

fn default_overrides() -> ChatAppRequestOverrides {
    ChatAppRequestOverrides {
        suggest_followup_questions: Some(true),
        language: "en".to_string(),
        ..Default::default()
    }
}

/// Request for `question` carrying the whole conversation so far.
///
/// The session state of the latest answer is echoed back so the backend can
/// attach the new exchange (and any feedback) to the same session.
pub fn build_request(turns: &[ChatTurn], question: &str) -> ChatAppRequest {
    let mut messages = Vec::with_capacity(turns.len() * 2 + 1);
    for turn in turns {
        messages.push(ResponseMessage::user(turn.question.clone()));
        messages.push(ResponseMessage::assistant(turn.response.message.content.clone()));
    }
    messages.push(ResponseMessage::user(question));

    let session_state = turns.last().and_then(|t| t.response.session_state.clone());
    ChatAppRequest::new(messages, session_state).with_overrides(default_overrides())
}

/// Clicking the tab that is already showing for the same answer closes the panel
pub fn toggle_panel(
    current: Option<(AnalysisPanelTab, usize)>,
    tab: AnalysisPanelTab,
    index: usize,
) -> Option<(AnalysisPanelTab, usize)> {
    if current == Some((tab, index)) {
        None
    } else {
        Some((tab, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn turn(question: &str, answer: &str, session: Option<&str>) -> ChatTurn {
        ChatTurn::new(
            question.to_string(),
            ChatAppResponse {
                message: ResponseMessage::assistant(answer),
                session_state: session.map(|s| json!(s)),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_first_request_has_no_session() {
        let request = build_request(&[], "Hi?");
        assert_eq!(request.messages, vec![ResponseMessage::user("Hi?")]);
        assert!(request.session_state.is_none());
        let overrides = request.context.unwrap().overrides.unwrap();
        assert_eq!(overrides.suggest_followup_questions, Some(true));
    }

    #[test]
    fn test_history_and_latest_session_are_sent() {
        let turns = vec![
            turn("Q1", "A1", Some("s-1")),
            turn("Q2", "A2", Some("s-2")),
        ];
        let request = build_request(&turns, "Q3");
        let contents: Vec<_> = request.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["Q1", "A1", "Q2", "A2", "Q3"]);
        assert_eq!(request.messages[1].role, "assistant");
        assert_eq!(request.session_state, Some(json!("s-2")));
    }

    #[test]
    fn test_toggle_panel() {
        let open = toggle_panel(None, AnalysisPanelTab::ThoughtProcess, 0);
        assert_eq!(open, Some((AnalysisPanelTab::ThoughtProcess, 0)));
        assert_eq!(toggle_panel(open, AnalysisPanelTab::ThoughtProcess, 0), None);
        assert_eq!(
            toggle_panel(open, AnalysisPanelTab::SupportingContent, 0),
            Some((AnalysisPanelTab::SupportingContent, 0))
        );
        assert_eq!(
            toggle_panel(open, AnalysisPanelTab::ThoughtProcess, 1),
            Some((AnalysisPanelTab::ThoughtProcess, 1))
        );
    }

    #[test]
    fn test_turn_ids_are_unique() {
        assert_ne!(turn("Q", "A", None).id, turn("Q", "A", None).id);
    }
}
