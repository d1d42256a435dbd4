//! Chat Page - View Model

use super::model::ChatTurn;
use crate::components::analysis_panel::AnalysisPanelTab;
use crate::components::speech::SpeechConfig;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub question: RwSignal<String>,
    pub last_question: RwSignal<String>,
    pub turns: RwSignal<Vec<ChatTurn>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Open analysis panel: tab and answer index
    pub panel: RwSignal<Option<(AnalysisPanelTab, usize)>>,
    pub active_tab: RwSignal<AnalysisPanelTab>,
    pub active_citation: RwSignal<Option<String>>,
    pub speech: SpeechConfig,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            question: RwSignal::new(String::new()),
            last_question: RwSignal::new(String::new()),
            turns: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            panel: RwSignal::new(None),
            active_tab: RwSignal::new(AnalysisPanelTab::ThoughtProcess),
            active_citation: RwSignal::new(None),
            speech: SpeechConfig::new(),
        }
    }

    pub fn clear(&self) {
        self.speech.clear();
        self.turns.set(Vec::new());
        self.error.set(None);
        self.panel.set(None);
        self.active_citation.set(None);
        self.last_question.set(String::new());
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}
