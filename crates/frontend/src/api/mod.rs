//! Backend API client
//!
//! Every call returns `Result<_, String>`; a transport error, a non-2xx status
//! and an unreadable body all collapse into the same failure outcome.

mod chat;
mod content;
mod feedback;
mod speech;

pub use chat::{chat_api, config_api};
pub use content::get_citation_file_path;
pub use feedback::send_feedback_api;
pub use speech::speech_api;
