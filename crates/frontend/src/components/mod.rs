pub mod analysis_panel;
pub mod answer;
pub mod speech;
