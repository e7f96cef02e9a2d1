//! These tests cover the public executor surface:
//! - the three call shapes: `(body, status)`, value, error-only
//! - attempt counting for failure, success-on-K and unrecoverable errors
//! - aggregated vs. last-error-only reporting
//! - async execution with delays measured on paused tokio time

use std::{
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use retrier::{
    retry_async, unrecoverable, DelayStrategy, Failure, Retrier, RetryConfig, RetryError,
    RetryOption,
};

fn no_wait(attempts: u32) -> Retrier<String> {
    Retrier::new(RetryConfig::new(attempts, Duration::ZERO, Duration::ZERO, false))
}

/// `(body, status)` shape, as used by HTTP helpers.
#[test]
fn status_shape_returns_payload_on_success() {
    let mut calls = 0;
    let res = no_wait(3).run(|| {
        calls += 1;
        if calls == 1 {
            Err(Failure::Transient("connection reset".to_string()))
        } else {
            Ok(("{\"ok\":true}".to_string(), 201u16))
        }
    });

    assert_eq!(res.unwrap(), ("{\"ok\":true}".to_string(), 201));
    assert_eq!(calls, 2);
}

/// Error-only shape.
#[test]
fn error_only_shape_succeeds_with_unit() {
    let mut calls = 0;
    let res = no_wait(3).run(|| {
        calls += 1;
        Ok::<(), Failure<String>>(())
    });

    assert!(res.is_ok());
    assert_eq!(calls, 1);
}

/// attempts=5, fails twice, then returns "ok".
#[test]
fn value_shape_fails_twice_then_ok() {
    let mut calls = 0;
    let res = no_wait(5).run(|| {
        calls += 1;
        if calls <= 2 {
            Err(Failure::Transient(format!("boom #{calls}")))
        } else {
            Ok("ok")
        }
    });

    assert_eq!(res.unwrap(), "ok");
    assert_eq!(calls, 3);
}

/// attempts=3, always failing: three invocations, two waits, three numbered lines.
#[test]
fn always_failing_renders_every_attempt() {
    let waits = Arc::new(AtomicU32::new(0));
    let counter = waits.clone();
    let strategy = DelayStrategy::custom(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Duration::ZERO
    });

    let mut calls = 0;
    let err = no_wait(3)
        .run_with([RetryOption::DelayType(strategy)], || -> Result<(), _> {
            calls += 1;
            Err(Failure::Transient(format!("attempt {calls} failed")))
        })
        .unwrap_err();

    assert_eq!(calls, 3);
    assert_eq!(waits.load(Ordering::SeqCst), 2);
    assert_eq!(
        err.to_string(),
        "All attempts fail:\n#1: attempt 1 failed\n#2: attempt 2 failed\n#3: attempt 3 failed"
    );
    assert_eq!(err.as_label(), "retry_all_failed");
}

/// An unrecoverable error omits lines for attempts never made.
#[test]
fn unrecoverable_omits_unreached_attempts() {
    let mut calls = 0;
    let err = no_wait(6)
        .run(|| -> Result<(), _> {
            calls += 1;
            if calls == 2 {
                Err(unrecoverable("404 not found".to_string()))
            } else {
                Err(Failure::Transient("502 bad gateway".to_string()))
            }
        })
        .unwrap_err();

    assert_eq!(calls, 2);
    assert_eq!(
        err.to_string(),
        "All attempts fail:\n#1: 502 bad gateway\n#2: 404 not found"
    );
    assert_eq!(err.len(), 2);
}

#[test]
fn last_error_only_from_defaults() {
    let retrier: Retrier<String> =
        Retrier::new(RetryConfig::new(4, Duration::ZERO, Duration::ZERO, true));
    let mut calls = 0;
    let err = retrier
        .run(|| -> Result<(), _> {
            calls += 1;
            Err(Failure::Transient(format!("e{calls}")))
        })
        .unwrap_err();

    assert_eq!(err.to_string(), "e4");
    assert_eq!(err.into_errors(), vec!["e4".to_string()]);
}

#[test]
fn zero_attempts_never_invokes() {
    let mut calls = 0;
    let err = no_wait(1)
        .run_with([RetryOption::Attempts(0)], || -> Result<(), _> {
            calls += 1;
            Err(Failure::Transient("unreachable".to_string()))
        })
        .unwrap_err();

    assert_eq!(calls, 0);
    assert!(matches!(err, RetryError::NoAttempts));
}

#[test]
fn later_options_override_earlier_ones() {
    let mut calls = 0;
    let _ = no_wait(1).run_with(
        [RetryOption::Attempts(2), RetryOption::Attempts(4)],
        || -> Result<(), _> {
            calls += 1;
            Err(Failure::Transient("x".to_string()))
        },
    );
    assert_eq!(calls, 4);
}

#[tokio::test(start_paused = true)]
async fn async_waits_follow_backoff() {
    let retrier: Retrier<String> = Retrier::new(
        RetryConfig::default()
            .with_attempts(4)
            .with_delay(Duration::from_secs(1))
            .with_max_jitter(Duration::ZERO),
    );
    let stamps = Arc::new(Mutex::new(Vec::new()));
    let start = tokio::time::Instant::now();

    let err = retrier
        .run_async(|| {
            let stamps = stamps.clone();
            async move {
                stamps.lock().unwrap().push(start.elapsed());
                Err::<(), _>(Failure::Transient("down".to_string()))
            }
        })
        .await
        .unwrap_err();

    assert_eq!(err.len(), 4);
    // 1s, 2s, 4s between attempts; no wait after the last one.
    assert_eq!(
        *stamps.lock().unwrap(),
        vec![
            Duration::ZERO,
            Duration::from_secs(1),
            Duration::from_secs(3),
            Duration::from_secs(7),
        ]
    );
    assert_eq!(start.elapsed(), Duration::from_secs(7));
}

/// base 10s, back-off 40s at n=2, max delay 15s ⇒ wait ≤ 15s.
#[tokio::test(start_paused = true)]
async fn async_max_delay_clamps_waits() {
    let retrier: Retrier<String> = Retrier::new(
        RetryConfig::default()
            .with_delay(Duration::from_secs(10))
            .with_max_jitter(Duration::ZERO)
            .with_max_delay(Duration::from_secs(15)),
    );
    let stamps = Arc::new(Mutex::new(Vec::new()));
    let start = tokio::time::Instant::now();

    let _ = retrier
        .run_async_with([RetryOption::Attempts(4)], || {
            let stamps = stamps.clone();
            async move {
                stamps.lock().unwrap().push(start.elapsed());
                Err::<(), _>(Failure::Transient("slow".to_string()))
            }
        })
        .await;

    let stamps = stamps.lock().unwrap().clone();
    let gaps: Vec<Duration> = stamps.windows(2).map(|w| w[1] - w[0]).collect();
    assert_eq!(
        gaps,
        vec![
            Duration::from_secs(10),
            Duration::from_secs(15),
            Duration::from_secs(15),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn async_unrecoverable_skips_sleep() {
    let start = tokio::time::Instant::now();
    let calls = AtomicU32::new(0);

    let err = retry_async(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err::<(), _>(unrecoverable("invalid payload")) }
    })
    .await
    .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(err.last(), Some(&"invalid payload"));
}

#[tokio::test(start_paused = true)]
async fn async_success_returns_value() {
    let calls = AtomicU32::new(0);
    let res = Retrier::<&str>::default()
        .run_async(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(Failure::Transient("not yet"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

    assert_eq!(res.unwrap(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn caller_layers_a_deadline() {
    let retrier: Retrier<&str> = Retrier::new(
        RetryConfig::default()
            .with_attempts(100)
            .with_delay(Duration::from_secs(1))
            .with_max_jitter(Duration::ZERO)
            .with_delay_strategy(DelayStrategy::Fixed),
    );

    let res = tokio::time::timeout(
        Duration::from_millis(2500),
        retrier.run_async(|| async { Err::<(), _>(Failure::Transient("busy")) }),
    )
    .await;

    assert!(res.is_err(), "deadline should fire before the budget is spent");
}
