//! Wire contracts shared between the chat frontend and the backend API.
//!
//! Everything here is plain serde data: no browser or server dependencies,
//! so the types can be checked natively with `cargo test`.

pub mod chat;
pub mod config;
pub mod feedback;
pub mod history;
