use async_trait::async_trait;
use textrelay_common::Result;

/// Common trait for chat-completion relays
///
/// One call forwards one segment with the user prompt to the completion
/// service and returns the response text. Implementors encapsulate
/// transport and wire-format details; the batch driver stays decoupled
/// from any particular provider.
#[async_trait]
pub trait CompletionRelay: Send + Sync {
    /// Relay one segment with the given prompt and return the response text
    async fn complete(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        segment: &str,
    ) -> Result<String>;
}
