//! Runtime helpers for async operations.
//!
//! The engine is runtime-agnostic; the only timing primitive it needs is a
//! delay for the mark-notify ceiling.

use std::time::Duration;

/// Async delay that works across runtimes.
pub async fn async_delay(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(feature = "tokio-runtime")]
    {
        tokio::time::sleep(duration).await;
    }

    #[cfg(not(feature = "tokio-runtime"))]
    {
        // Cooperative fallback when no timer runtime is available.
        let start = std::time::Instant::now();
        while start.elapsed() < duration {
            std::hint::spin_loop();
        }
    }
}
