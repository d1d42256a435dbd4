//! Answer UI Module (MVVM Standard)
//!
//! Structure:
//! - parser.rs: answer text -> HTML with citation anchors
//! - sanitize.rs: sanitizer, markdown renderer, clipboard text
//! - state.rs: feedback and copy state machines
//! - view_model.rs: AnswerVm with RwSignals
//! - view.rs: Main component Answer

mod parser;
mod sanitize;
mod state;
mod view;
mod view_model;

pub use parser::{parse_answer_to_html, HtmlParsedAnswer};
pub use sanitize::{render_answer_body, render_markdown, sanitize_html, strip_for_copy};
pub use state::{CopyIndicator, FeedbackGuard, FeedbackState, FeedbackVote, COPIED_RESET_MS};
pub use view::Answer;
pub use view_model::AnswerVm;
