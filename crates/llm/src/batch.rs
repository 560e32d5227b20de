use std::time::Duration;
use textrelay_common::Result;
use tracing::info;

use crate::relay::CompletionRelay;

/// Relay every segment through the completion service, strictly in order.
///
/// One call per segment, each awaited to completion before the next
/// begins, with a fixed delay between calls to respect upstream rate
/// limits. All-or-nothing: the first failure aborts the batch and is
/// returned as the single outcome; partial results are discarded.
pub async fn relay_segments<R: CompletionRelay + ?Sized>(
    relay: &R,
    api_key: &str,
    model: &str,
    prompt: &str,
    segments: &[String],
    delay: Duration,
) -> Result<Vec<String>> {
    let mut results = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        info!("Relaying segment {}/{}", i + 1, segments.len());
        let result = relay.complete(api_key, model, prompt, segment).await?;
        results.push(result);
    }

    Ok(results)
}
