//! Chat Page Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: conversation turns and request building
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatPage

mod model;
mod view;
mod view_model;

pub use model::{build_request, toggle_panel, ChatTurn};
pub use view::ChatPage;
pub use view_model::ChatVm;
