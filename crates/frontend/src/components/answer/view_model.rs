//! Answer - View Model

use super::state::{CopyIndicator, FeedbackState};
use leptos::prelude::*;

/// Local state of one rendered answer; never shared between answers
#[derive(Clone, Copy)]
pub struct AnswerVm {
    pub feedback: RwSignal<FeedbackState>,
    pub copy: RwSignal<CopyIndicator>,
}

impl AnswerVm {
    pub fn new() -> Self {
        Self {
            feedback: RwSignal::new(FeedbackState::Idle),
            copy: RwSignal::new(CopyIndicator::default()),
        }
    }
}

impl Default for AnswerVm {
    fn default() -> Self {
        Self::new()
    }
}
