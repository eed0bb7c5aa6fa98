use std::time::Duration;

/// Sleep for the given duration without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(target_family = "wasm"))]
    {
        tokio::time::sleep(duration).await;
    }
}
