//! Per-answer UI state: feedback vote lifecycle and the "copied" indicator.
//!
//! Both are plain values so they can live inside a signal and be driven from
//! event handlers; no browser APIs are touched here.

use contracts::chat::ResponseContext;
use contracts::feedback::FeedbackType;

/// How long the "copied" check mark stays visible
pub const COPIED_RESET_MS: u32 = 2000;

/// A user-visible vote (the wire type additionally has `remove`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackVote {
    Positive,
    Negative,
}

impl From<FeedbackVote> for FeedbackType {
    fn from(vote: FeedbackVote) -> Self {
        match vote {
            FeedbackVote::Positive => FeedbackType::Positive,
            FeedbackVote::Negative => FeedbackType::Negative,
        }
    }
}

/// Conditions under which a click is refused outright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackGuard {
    pub is_streaming: bool,
    pub has_session: bool,
}

/// Feedback selection for one answer.
///
/// `Submitting` remembers what was selected before the click so a failed
/// request can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    Submitting {
        pending: FeedbackType,
        previous: Option<FeedbackVote>,
    },
    Active(FeedbackVote),
}

impl FeedbackState {
    /// Vote to highlight; during a request the previous selection stays shown
    pub fn selected(&self) -> Option<FeedbackVote> {
        match *self {
            FeedbackState::Idle => None,
            FeedbackState::Submitting { previous, .. } => previous,
            FeedbackState::Active(vote) => Some(vote),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedbackState::Submitting { .. })
    }

    /// Handle a thumbs click.
    ///
    /// Returns the feedback type to send, or `None` when the click is dropped
    /// (request in flight, streaming, no session). Clicking the active vote
    /// again sends `remove`.
    pub fn begin(&mut self, vote: FeedbackVote, guard: FeedbackGuard) -> Option<FeedbackType> {
        if self.is_loading() || guard.is_streaming || !guard.has_session {
            return None;
        }
        let previous = self.selected();
        let pending = if previous == Some(vote) {
            FeedbackType::Remove
        } else {
            vote.into()
        };
        *self = FeedbackState::Submitting { pending, previous };
        Some(pending)
    }

    /// Apply the outcome of the request started by [`begin`](Self::begin)
    pub fn finish(&mut self, ok: bool) {
        let FeedbackState::Submitting { pending, previous } = *self else {
            return;
        };
        *self = if ok {
            match pending {
                FeedbackType::Positive => FeedbackState::Active(FeedbackVote::Positive),
                FeedbackType::Negative => FeedbackState::Active(FeedbackVote::Negative),
                FeedbackType::Remove => FeedbackState::Idle,
            }
        } else {
            previous.map_or(FeedbackState::Idle, FeedbackState::Active)
        };
    }
}

/// "Copied" flag with a generation counter.
///
/// Each successful copy hands out a ticket; only the newest ticket may clear
/// the flag, so a second copy inside the window extends it instead of being
/// cut short by the first timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyIndicator {
    copied: bool,
    generation: u64,
}

impl CopyIndicator {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Returns true when this ticket actually cleared the flag
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.copied && ticket == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

pub fn thought_process_disabled(context: &ResponseContext) -> bool {
    !context.has_thoughts()
}

pub fn supporting_content_disabled(context: &ResponseContext) -> bool {
    !context.has_data_points()
}

/// Follow-ups need questions, the feature flag and a click handler
pub fn show_followups(context: &ResponseContext, enabled: bool, has_handler: bool) -> bool {
    enabled && has_handler && !context.followups().is_empty()
}

pub fn citation_label(position: usize, citation: &str) -> String {
    format!("{}. {}", position + 1, citation)
}
