#![cfg(feature = "async")]
//! Async result composition tests.
//!
//! Test coverage:
//! - from_future: panics become `Err(Rejected)` and never unwind into the caller
//! - all / any / sequence_object: concurrent start, input-order decisions
//! - with_timeout: elapsed vs operation error, detached late settlement
//! - lifted combinators: async_map, async_flat_map, chain, tap, recover

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use fallible::async_result::{
    AsyncResult, AsyncResultExt, TimeoutError, all, all2, all4, any, async_map, async_map_err,
    flatten_async_result, from_future, resolved, sequence_object, with_timeout,
};
use futures::FutureExt;
use rstest::rstest;
use tokio::time::Instant;

async fn after<T>(delay_ms: u64, result: T) -> T {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    result
}

// =============================================================================
// from_future
// =============================================================================

/// A completed future resolves to Ok with its output.
#[rstest]
#[tokio::test]
async fn test_from_future_completion() {
    assert_eq!(from_future(after(0, 7)).await, Ok(7));
}

/// A panicking future resolves to Err instead of unwinding.
#[rstest]
#[tokio::test]
async fn test_from_future_panic_becomes_err() {
    let fail = true;
    let result = from_future(async move {
        if fail {
            panic!("connection reset");
        }
        1
    })
    .await;

    assert_eq!(result.unwrap_err().message(), "connection reset");
}

// =============================================================================
// all / any
// =============================================================================

/// First error by index wins, not the first one to settle.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_all_picks_error_by_index() {
    let settled = all(vec![after(30, Ok(1)), after(20, Err("x")), after(10, Ok(2))]).await;
    assert_eq!(settled, Err("x"));
}

/// Output order follows input order even when completion order differs.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_all_preserves_input_order() {
    let settled = all(vec![after(30, Ok::<_, ()>("slow")), after(10, Ok("fast"))]).await;
    assert_eq!(settled, Ok(vec!["slow", "fast"]));
}

/// all waits for every entry even after an early error.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_all_waits_for_every_entry() {
    let finished = Arc::new(AtomicUsize::new(0));
    let entry = |delay_ms: u64, result: Result<i32, &'static str>| {
        let finished = Arc::clone(&finished);
        async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            finished.fetch_add(1, Ordering::SeqCst);
            result
        }
    };

    let start = Instant::now();
    let settled = all(vec![entry(5, Err("early")), entry(40, Ok(1)), entry(20, Ok(2))]).await;

    assert_eq!(settled, Err("early"));
    assert_eq!(finished.load(Ordering::SeqCst), 3);
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[rstest]
#[tokio::test]
async fn test_any_first_ok_by_index() {
    let settled = any(vec![resolved(Err("x")), resolved(Ok(1)), resolved(Err("y"))]).await;
    assert_eq!(settled, Ok(1));
}

#[rstest]
#[tokio::test]
async fn test_any_collects_every_error() {
    let settled = any(vec![resolved(Err::<i32, _>("x")), resolved(Err("y"))]).await;
    assert_eq!(settled, Err(vec!["x", "y"]));
}

/// The winner is the first Ok by position, not the first to settle.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_any_picks_ok_by_index() {
    let settled = any(vec![after(30, Ok::<_, ()>("slow")), after(5, Ok("fast"))]).await;
    assert_eq!(settled, Ok("slow"));
}

/// any waits for every entry even after an early success.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_any_waits_for_every_entry() {
    let finished = Arc::new(AtomicUsize::new(0));
    let entry = |delay_ms: u64, result: Result<i32, &'static str>| {
        let finished = Arc::clone(&finished);
        async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            finished.fetch_add(1, Ordering::SeqCst);
            result
        }
    };

    let start = Instant::now();
    let settled = any(vec![entry(5, Ok(1)), entry(40, Err("late")), entry(20, Ok(2))]).await;

    assert_eq!(settled, Ok(1));
    assert_eq!(finished.load(Ordering::SeqCst), 3);
    assert!(start.elapsed() >= Duration::from_millis(40));
}

/// Sync and async entries can be mixed once boxed.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_any_mixes_sync_and_async_entries() {
    let entries: Vec<AsyncResult<'static, u8, String>> = vec![
        resolved(Err("cache miss".to_string())).boxed(),
        after(10, Ok(200)).boxed(),
    ];
    assert_eq!(any(entries).await, Ok(200));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_all_tuple_forms() {
    let pair = all2(after(10, Ok::<_, String>(1_u8)), after(5, Ok("two"))).await;
    assert_eq!(pair, Ok((1, "two")));

    let quad = all4(
        after(1, Ok::<_, &str>(1)),
        after(2, Ok('b')),
        after(3, Err::<bool, _>("third")),
        after(4, Err::<u64, _>("fourth")),
    )
    .await;
    assert_eq!(quad, Err("third"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_sequence_object_keyed() {
    let profile: Result<BTreeMap<&str, String>, String> = sequence_object(vec![
        ("name", after(20, Ok("Ada".to_string()))),
        ("role", after(10, Ok("admin".to_string()))),
    ])
    .await;

    let profile = profile.unwrap();
    assert_eq!(profile["name"], "Ada");
    assert_eq!(profile["role"], "admin");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_sequence_object_first_error_by_key_order() {
    let profile: Result<Vec<(&str, u8)>, &str> = sequence_object(vec![
        ("a", after(30, Ok(1))),
        ("b", after(20, Err("b failed"))),
        ("c", after(10, Err("c failed"))),
    ])
    .await;
    assert_eq!(profile, Err("b failed"));
}

// =============================================================================
// with_timeout
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_with_timeout_elapsed() {
    let outcome = with_timeout(after(500, Ok::<_, String>(1)), Duration::from_millis(100)).await;
    assert_eq!(outcome, Err(TimeoutError::Elapsed(Duration::from_millis(100))));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_with_timeout_operation_error_is_distinct() {
    let outcome = with_timeout(after(10, Err::<i32, _>("refused")), Duration::from_millis(100)).await;
    assert_eq!(outcome, Err(TimeoutError::Failed("refused")));
}

/// The inner operation keeps running after the timeout and its result is dropped.
#[rstest]
#[tokio::test(start_paused = true)]
async fn test_with_timeout_detaches_late_operation() {
    let completed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&completed);

    let outcome = async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        flag.store(true, Ordering::SeqCst);
        Err::<(), _>("late failure")
    }
    .with_timeout(Duration::from_millis(50))
    .await;

    assert!(outcome.unwrap_err().is_elapsed());
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(completed.load(Ordering::SeqCst));
}

// =============================================================================
// Lifted Combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_map_and_map_err() {
    assert_eq!(async_map(resolved(Ok::<_, ()>(2)), |n| n + 1).await, Ok(3));
    assert_eq!(async_map_err(resolved(Err::<(), _>("e")), str::len).await, Err(1));
}

#[rstest]
#[tokio::test]
async fn test_extension_methods_chain() {
    let mut seen = None;
    let outcome = resolved(Ok::<_, String>("42"))
        .chain(|raw| raw.parse::<i32>().map_err(|e| e.to_string()))
        .async_flat_map(|n| async move { Ok(n * 2) })
        .tap(|n| seen = Some(*n))
        .await;

    assert_eq!(outcome, Ok(84));
    assert_eq!(seen, Some(84));
}

#[rstest]
#[tokio::test]
async fn test_extension_methods_short_circuit() {
    let called = AtomicBool::new(false);
    let outcome = resolved(Err::<i32, _>("down".to_string()))
        .async_map(|n| {
            called.store(true, Ordering::SeqCst);
            n
        })
        .async_flat_map(|n| {
            called.store(true, Ordering::SeqCst);
            async move { Ok(n) }
        })
        .await;

    assert_eq!(outcome, Err("down".to_string()));
    assert!(!called.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn test_recover_and_unwrap_or() {
    let recovered = resolved(Err::<String, _>(404)).recover(|code| format!("status {code}")).await;
    assert_eq!(recovered, Ok("status 404".to_string()));

    assert_eq!(resolved(Err::<i32, ()>(())).unwrap_or(-1).await, -1);
}

#[rstest]
#[tokio::test]
async fn test_flatten_async_result_inner_error() {
    let nested = resolved(Ok::<_, &str>(resolved(Err::<i32, _>("inner"))));
    assert_eq!(flatten_async_result(nested).await, Err("inner"));
}
