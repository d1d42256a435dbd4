//! Speech output for answers
//!
//! Two interchangeable renderers: the browser's Web Speech API and
//! backend-synthesized audio. The chat page decides which one to mount.

mod azure;
mod browser;
mod cache;
mod config;

pub use azure::SpeechOutputAzure;
pub use browser::SpeechOutputBrowser;
pub use cache::{release_playback, SpeechUrlCache};
pub use config::SpeechConfig;
