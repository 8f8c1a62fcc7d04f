//! AI features powered by the chat-completions gateway

pub mod client;
pub mod symptoms;

pub use client::CompletionClient;
