//! TextRelay LLM Integration
//!
//! OpenRouter-compatible chat-completion client and the sequential
//! per-segment batch driver.

mod batch;
mod client;
mod relay;
mod types;

pub use batch::relay_segments;
pub use client::OpenRouterClient;
pub use relay::CompletionRelay;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
