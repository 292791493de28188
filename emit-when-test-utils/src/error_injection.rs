// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for injecting listener failures.
//!
//! Error-path tests need a listener that fails on demand; the factory here
//! produces one, wrapping an [`InjectedFailure`] so the failure is
//! recognizable when it surfaces from `emit`.

use emit_when_core::{EmitWhenError, Result};

/// Error type carried by listeners built with [`failing_listener`].
#[derive(Debug, thiserror::Error)]
#[error("Injected listener failure: {0}")]
pub struct InjectedFailure(pub String);

/// Produces a listener that fails on every invocation.
///
/// # Examples
///
/// ```rust
/// use emit_when_core::EventLike;
/// use emit_when_test_utils::{failing_listener, TestEmitter};
///
/// let emitter = TestEmitter::<u32>::new();
/// emitter.on("test", Box::new(failing_listener("boom")));
///
/// let err = emitter.emit("test", &1).unwrap_err();
/// assert!(err.to_string().contains("boom"));
/// ```
pub fn failing_listener<T>(message: &str) -> impl FnMut(&T) -> Result<()> + Send + 'static {
    let message = message.to_owned();
    move |_payload| {
        Err(EmitWhenError::listener_error(InjectedFailure(
            message.clone(),
        )))
    }
}
