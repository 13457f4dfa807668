//! Tests that unselected callbacks never start and that pipelines short-circuit.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use outcome_rail::prelude_async::*;

#[derive(Clone, Default)]
struct Counter(Arc<AtomicU32>);

impl Counter {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn count(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}

async fn start(first: Outcome<&'static str, String>) -> Outcome<&'static str, String> {
    tokio::task::yield_now().await;
    first
}

async fn run_pipeline(first: Outcome<&'static str, String>, steps: &Counter, ok: &Counter, err: &Counter) -> String {
    let (bind_steps, map_steps) = (steps.clone(), steps.clone());
    let (ok, err) = (ok.clone(), err.clone());

    start(first)
        .bind_async(deferred(move |s: &'static str| async move {
            bind_steps.hit();
            tokio::task::yield_now().await;
            Outcome::<String, String>::success(format!("{}b", s))
        }))
        .map_async(deferred(move |s: String| async move {
            map_steps.hit();
            tokio::task::yield_now().await;
            s.to_uppercase()
        }))
        .fold_async(
            move |value: String| {
                ok.hit();
                format!("ok:{}", value)
            },
            move |error: String| {
                err.hit();
                format!("err:{}", error)
            },
        )
        .await
}

#[tokio::test]
async fn all_success_pipeline_threads_values() {
    let (steps, ok, err) = (Counter::default(), Counter::default(), Counter::default());

    let output = run_pipeline(Outcome::success("a"), &steps, &ok, &err).await;

    assert_eq!(output, "ok:AB");
    assert_eq!(steps.count(), 2);
    assert_eq!(ok.count(), 1);
    assert_eq!(err.count(), 0);
}

#[tokio::test]
async fn failing_first_step_short_circuits() {
    let (steps, ok, err) = (Counter::default(), Counter::default(), Counter::default());

    let output = run_pipeline(Outcome::failure("x".to_string()), &steps, &ok, &err).await;

    assert_eq!(output, "err:x");
    assert_eq!(steps.count(), 0);
    assert_eq!(ok.count(), 0);
    assert_eq!(err.count(), 1);
}

#[tokio::test]
async fn deferred_success_callback_never_starts_on_failure() {
    let started = Counter::default();
    let probe = started.clone();

    let result = Outcome::<i32, String>::failure("nope".to_string())
        .map_async(deferred(move |x: i32| {
            probe.hit();
            async move { x }
        }))
        .await;

    assert_eq!(result, Outcome::Failure("nope".to_string()));
    assert_eq!(started.count(), 0);
}

#[tokio::test]
async fn deferred_failure_callback_never_starts_on_success() {
    let started = Counter::default();
    let probe = started.clone();

    let result = Outcome::<i32, String>::success(1)
        .map_error_async(deferred(move |e: String| {
            probe.hit();
            async move { e.len() }
        }))
        .await;

    assert_eq!(result, Outcome::Success(1));
    assert_eq!(started.count(), 0);
}

#[tokio::test]
async fn fold_async_starts_exactly_one_branch() {
    for outcome in [Outcome::<i32, String>::success(1), Outcome::failure("e".to_string())] {
        let (ok, err) = (Counter::default(), Counter::default());
        let (ok_probe, err_probe) = (ok.clone(), err.clone());
        let expect_success = outcome.is_success();

        outcome
            .fold_async(
                deferred(move |_: i32| {
                    ok_probe.hit();
                    async {}
                }),
                deferred(move |_: String| {
                    err_probe.hit();
                    async {}
                }),
            )
            .await;

        assert_eq!(ok.count(), u32::from(expect_success));
        assert_eq!(err.count(), u32::from(!expect_success));
    }
}

#[tokio::test]
async fn nothing_runs_until_awaited() {
    let started = Counter::default();
    let probe = started.clone();

    let pending = Outcome::<i32, String>::success(1).map_async(deferred(move |x: i32| {
        probe.hit();
        async move { x }
    }));
    assert_eq!(started.count(), 0);

    assert_eq!(pending.await, Outcome::Success(1));
    assert_eq!(started.count(), 1);
}

#[tokio::test]
async fn steps_run_in_pipeline_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (first, second, third) = (log.clone(), log.clone(), log.clone());

    let result = async { Outcome::<i32, String>::success(1) }
        .bind_async(deferred(move |x: i32| async move {
            first.lock().unwrap().push("bind");
            Outcome::success(x + 1)
        }))
        .map_async(move |x: i32| {
            second.lock().unwrap().push("map");
            x * 10
        })
        .map_error_async(move |e: String| {
            third.lock().unwrap().push("map_error");
            e
        })
        .await;

    assert_eq!(result, Outcome::Success(20));
    assert_eq!(*log.lock().unwrap(), ["bind", "map"]);
}

#[tokio::test]
async fn pipeline_is_send_across_tasks() {
    let handle = tokio::spawn(async {
        Outcome::<u32, String>::success(2)
            .map_async(deferred(|x: u32| async move {
                tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                x * 21
            }))
            .fold_async(|x: u32| x, |_: String| 0)
            .await
    });

    assert_eq!(handle.await.unwrap(), 42);
}

#[tokio::test]
#[should_panic(expected = "callback failed")]
async fn callback_panics_propagate() {
    let _ = Outcome::<i32, String>::success(1)
        .map_async(|_: i32| -> i32 { panic!("callback failed") })
        .await;
}

#[tokio::test]
async fn dropping_pipeline_cancels_pending_step() {
    let finished = Counter::default();
    let probe = finished.clone();

    let pipeline = Outcome::<i32, String>::success(1).map_async(deferred(move |x: i32| async move {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        probe.hit();
        x
    }));

    let timed_out = tokio::time::timeout(std::time::Duration::from_millis(5), pipeline).await;

    assert!(timed_out.is_err());
    assert_eq!(finished.count(), 0);
}

#[tokio::test]
async fn async_closure_needs_deferred_to_run() {
    let ran = Counter::default();
    let (plain_probe, deferred_probe) = (ran.clone(), ran.clone());

    let held = Outcome::<i32, String>::success(1)
        .map_async(move |x: i32| async move {
            plain_probe.hit();
            x + 1
        })
        .await;
    assert!(held.is_success());
    assert_eq!(ran.count(), 0);

    let awaited = Outcome::<i32, String>::success(1)
        .map_async(deferred(move |x: i32| async move {
            deferred_probe.hit();
            x + 1
        }))
        .await;
    assert_eq!(awaited, Outcome::Success(2));
    assert_eq!(ran.count(), 1);

    assert_eq!(held.into_value().await, 2);
    assert_eq!(ran.count(), 2);
}
