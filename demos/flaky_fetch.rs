//! # Example: flaky_fetch
//!
//! Shows how an HTTP helper wraps a request with [`Retrier`] using the
//! `(body, status)` call shape, logging each retry through [`LogWriter`].
//!
//! The simulated endpoint answers 503 twice, then 200. A second call hits a
//! 401, which is marked unrecoverable and stops immediately.
//!
//! ## Flow
//! ```text
//! Retrier::run()
//!   ├─► get("/health") → 503 → on_retry(0) → sleep(200ms)
//!   ├─► get("/health") → 503 → on_retry(1) → sleep(400ms)
//!   └─► get("/health") → 200 → Ok((body, 200))
//!
//! Retrier::run()
//!   └─► get("/admin")  → 401 → unrecoverable → Err(All attempts fail: #1 ...)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example flaky_fetch --features logging
//! ```

use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::Duration,
};

use retrier::{
    unrecoverable, DelayStrategy, Failure, LogWriter, Retrier, RetryConfig, RetryOption,
};

static HITS: AtomicU32 = AtomicU32::new(0);

/// Simulated transport: `(body, status)` or an error message.
fn get(uri: &str) -> Result<(String, u16), Failure<String>> {
    let hit = HITS.fetch_add(1, Ordering::Relaxed) + 1;
    match uri {
        "/health" if hit <= 2 => Err(Failure::Transient(format!(
            "503 service unavailable (hit {hit})"
        ))),
        "/health" => Ok(("{\"status\":\"up\"}".to_string(), 200)),
        _ => Err(unrecoverable(format!("401 unauthorized for {uri}"))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(true).init();

    // 1. Defaults: built once at startup.
    let defaults = RetryConfig::new(3, Duration::from_millis(50), Duration::from_millis(200), false)
        .with_max_delay(Duration::from_secs(2));
    let retrier = Retrier::new(defaults);

    // 2. Per-call overrides: logger + linear delay like the HTTP helpers use.
    let (body, status) = retrier.run_with(
        [
            RetryOption::OnRetry(LogWriter::new("GET /health").on_retry()),
            RetryOption::DelayType(DelayStrategy::custom(|n, t| t.delay * (n + 1))),
        ],
        || get("/health"),
    )?;
    println!("[main] status={status} body={body}");

    // 3. Unrecoverable failure: one attempt, aggregated error.
    match retrier.run_with(
        [RetryOption::OnRetry(LogWriter::new("GET /admin").on_retry())],
        || get("/admin"),
    ) {
        Ok(_) => println!("[main] unexpected success"),
        Err(e) => println!("[main] {} ({})", e, e.as_label()),
    }

    Ok(())
}
