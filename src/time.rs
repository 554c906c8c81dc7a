//! Timer-based delays.

use std::time::Duration;

/// Completes after at least `ms` milliseconds have elapsed.
///
/// Must be awaited within a Tokio runtime with the time driver enabled. There is no cancellation
/// beyond dropping the future, callers that need it can race the delay against their own signal,
/// e.g. with `tokio::select!`.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await
}
