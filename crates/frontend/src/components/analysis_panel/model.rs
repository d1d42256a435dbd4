//! Analysis Panel - Model

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPanelTab {
    ThoughtProcess,
    SupportingContent,
    Citation,
}

impl AnalysisPanelTab {
    pub fn all() -> [AnalysisPanelTab; 3] {
        [
            AnalysisPanelTab::ThoughtProcess,
            AnalysisPanelTab::SupportingContent,
            AnalysisPanelTab::Citation,
        ]
    }

    pub fn value(&self) -> &'static str {
        match self {
            AnalysisPanelTab::ThoughtProcess => "thoughtProcess",
            AnalysisPanelTab::SupportingContent => "supportingContent",
            AnalysisPanelTab::Citation => "citation",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisPanelTab::ThoughtProcess => "Thought process",
            AnalysisPanelTab::SupportingContent => "Supporting content",
            AnalysisPanelTab::Citation => "Citation",
        }
    }
}

/// Text shown for a thought step: strings as-is, anything else as pretty JSON
pub fn thought_description(description: &Value) -> String {
    match description {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportingContentItem {
    pub title: String,
    pub content: String,
}

/// Split a data point of the form `source: text` into its parts
pub fn parse_supporting_content_item(item: &str) -> SupportingContentItem {
    match item.split_once(": ") {
        Some((title, content)) => SupportingContentItem {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        },
        None => SupportingContentItem {
            title: String::new(),
            content: item.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tab_values_roundtrip() {
        for tab in AnalysisPanelTab::all() {
            assert_eq!(AnalysisPanelTab::from_value(tab.value()), Some(tab));
        }
        assert_eq!(AnalysisPanelTab::from_value("unknown"), None);
    }

    #[test]
    fn test_thought_description() {
        assert_eq!(thought_description(&json!("dental plan")), "dental plan");
        assert_eq!(thought_description(&Value::Null), "");
        assert_eq!(thought_description(&json!({"a": 1})), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_supporting_content_split() {
        let item = parse_supporting_content_item("benefits.pdf#page=2: Dental: covered in full.");
        assert_eq!(item.title, "benefits.pdf#page=2");
        assert_eq!(item.content, "Dental: covered in full.");

        let item = parse_supporting_content_item("no title here");
        assert!(item.title.is_empty());
        assert_eq!(item.content, "no title here");
    }
}
