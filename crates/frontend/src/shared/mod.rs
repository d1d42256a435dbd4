pub mod api_utils;
pub mod clipboard;
pub mod config;
pub mod icons;
pub mod storage;
