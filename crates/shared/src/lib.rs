pub mod config;
pub mod llm;
pub mod models;
pub mod prompt;
pub mod questions;
pub mod sessions;
pub mod summary;
