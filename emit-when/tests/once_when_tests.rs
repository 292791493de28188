// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

use emit_when::{once_when, OnceWhenExt};
use emit_when_core::EventLike;
use emit_when_test_utils::reading::{reading_critical, reading_elevated, reading_nominal};
use emit_when_test_utils::{CallRecorder, Reading, TestEmitter};
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
use std::sync::Arc;

#[test]
fn fires_only_once_when_the_condition_is_satisfied() -> anyhow::Result<()> {
    // Arrange
    let emitter = TestEmitter::<bool>::new();
    let recorder = CallRecorder::new();
    once_when(&emitter, "test", |data: &bool| *data, recorder.listener());

    // Act
    emitter.emit("test", &false)?;
    emitter.emit("test", &true)?;
    emitter.emit("test", &true)?;
    emitter.remove_all_listeners(None);

    // Assert
    assert_eq!(recorder.count(), 1);
    Ok(())
}

#[test]
fn stays_registered_while_the_predicate_misses() -> anyhow::Result<()> {
    // Arrange - count how often the predicate is consulted
    let emitter = TestEmitter::<bool>::new();
    let recorder = CallRecorder::new();
    let checks = Arc::new(AtomicUsize::new(0));
    let predicate = {
        let checks = Arc::clone(&checks);
        move |data: &bool| {
            checks.fetch_add(1, SeqCst);
            *data
        }
    };
    once_when(&emitter, "test", predicate, recorder.listener());

    // Act - a run of misses keeps the single wrapper armed
    for _ in 0..4 {
        emitter.emit("test", &false)?;
    }

    // Assert - still one registration, no listener call, four predicate checks
    assert_eq!(emitter.listener_count("test"), 1);
    assert_eq!(recorder.count(), 0);
    assert_eq!(checks.load(SeqCst), 4);
    Ok(())
}

#[test]
fn fires_on_the_first_satisfying_emission_and_removes_itself() -> anyhow::Result<()> {
    let emitter = TestEmitter::<Reading>::new();
    let recorder = CallRecorder::new();
    once_when(
        &emitter,
        "pressure",
        |payload: &Reading| payload.value > 90,
        recorder.listener(),
    );

    emitter.emit("pressure", &reading_nominal())?;
    emitter.emit("pressure", &reading_elevated())?;
    emitter.emit("pressure", &reading_critical())?;

    assert_eq!(recorder.calls(), vec![reading_elevated()]);
    assert_eq!(emitter.listener_count("pressure"), 0);
    Ok(())
}

#[test]
fn neither_predicate_nor_listener_runs_after_firing() -> anyhow::Result<()> {
    // Arrange
    let emitter = TestEmitter::<bool>::new();
    let recorder = CallRecorder::new();
    let checks = Arc::new(AtomicUsize::new(0));
    let predicate = {
        let checks = Arc::clone(&checks);
        move |data: &bool| {
            checks.fetch_add(1, SeqCst);
            *data
        }
    };
    once_when(&emitter, "test", predicate, recorder.listener());

    // Act - miss, hit, then two more satisfying emissions
    emitter.emit("test", &false)?;
    emitter.emit("test", &true)?;
    emitter.emit("test", &true)?;
    emitter.emit("test", &true)?;

    // Assert - consulted for the miss and the hit, then never again
    assert_eq!(checks.load(SeqCst), 2);
    assert_eq!(recorder.count(), 1);
    Ok(())
}

#[test]
fn removing_the_fired_token_again_is_a_noop() -> anyhow::Result<()> {
    let emitter = TestEmitter::<bool>::new();
    let token = once_when(&emitter, "test", |data: &bool| *data, |_| Ok(()));

    emitter.emit("test", &true)?;

    assert!(!emitter.remove_listener("test", token));
    Ok(())
}

#[test]
fn explicit_removal_before_firing_cancels_the_subscription() -> anyhow::Result<()> {
    let emitter = TestEmitter::<bool>::new();
    let recorder = CallRecorder::new();
    let token = once_when(&emitter, "test", |data: &bool| *data, recorder.listener());

    assert!(emitter.remove_listener("test", token));
    emitter.emit("test", &true)?;

    assert_eq!(recorder.count(), 0);
    Ok(())
}

#[test]
fn independent_once_subscriptions_each_fire_once() -> anyhow::Result<()> {
    let emitter = TestEmitter::<Reading>::new();
    let first = CallRecorder::new();
    let second = CallRecorder::new();
    once_when(
        &emitter,
        "pressure",
        |payload: &Reading| payload.value > 90,
        first.listener(),
    );
    once_when(
        &emitter,
        "pressure",
        |payload: &Reading| payload.value > 90,
        second.listener(),
    );

    emitter.emit("pressure", &reading_elevated())?;
    emitter.emit("pressure", &reading_critical())?;

    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 1);
    assert_eq!(emitter.listener_count("pressure"), 0);
    Ok(())
}

#[test]
fn method_form_delegates_to_the_free_function() -> anyhow::Result<()> {
    let emitter = TestEmitter::<i32>::new();
    let recorder = CallRecorder::new();

    emitter.once_when("load", |value: &i32| *value > 10, recorder.listener());

    emitter.emit("load", &50)?;
    emitter.emit("load", &60)?;

    assert_eq!(recorder.calls(), vec![50]);
    Ok(())
}

#[test]
fn a_predicate_that_never_succeeds_leaves_the_subscription_alive() -> anyhow::Result<()> {
    let emitter = TestEmitter::<bool>::new();
    once_when(&emitter, "test", |_: &bool| false, |_| Ok(()));

    for _ in 0..10 {
        emitter.emit("test", &true)?;
    }

    assert_eq!(emitter.listener_count("test"), 1);
    Ok(())
}
