//! Side panel with the diagnostics of the selected answer
//!
//! Structure:
//! - model.rs: tab enum and text helpers
//! - view.rs: Main component AnalysisPanel

mod model;
mod view;

pub use model::{parse_supporting_content_item, thought_description, AnalysisPanelTab, SupportingContentItem};
pub use view::AnalysisPanel;
