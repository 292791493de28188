// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

//! # emit-when
//!
//! Predicate-gated subscription combinators for emitter-like collaborators.
//!
//! ## Overview
//!
//! Two combinators layered on a publish/subscribe capability interface:
//!
//! - [`on_when()`]: invoke a listener on every emission whose payload
//!   satisfies a predicate; the subscription lives until the caller removes
//!   it.
//! - [`once_when()`]: stay armed across non-satisfying emissions, invoke
//!   the listener on the first satisfying one, then remove the
//!   subscription, for at most one invocation over the subscription's
//!   lifetime.
//!
//! Both are free functions over anything implementing
//! [`EventLike`](emit_when_core::EventLike), and both are also available as
//! methods through the [`OnWhenExt`] / [`OnceWhenExt`] extension traits.
//! The combinators add no delivery mechanism, no threads, and no ordering
//! of their own; dispatch semantics are inherited from the host emitter.
//!
//! ## Quick Start
//!
//! ```rust
//! use emit_when::prelude::*;
//! use emit_when_test_utils::{CallRecorder, TestEmitter};
//!
//! let emitter = TestEmitter::<i64>::new();
//! let spikes = CallRecorder::new();
//! let first_spike = CallRecorder::new();
//!
//! emitter.on_when("load", |value: &i64| *value > 100, spikes.listener());
//! emitter.once_when("load", |value: &i64| *value > 100, first_spike.listener());
//!
//! for value in [12, 250, 180] {
//!     emitter.emit("load", &value).unwrap();
//! }
//!
//! assert_eq!(spikes.calls(), vec![250, 180]);
//! assert_eq!(first_spike.calls(), vec![250]);
//! ```

#[macro_use]
mod logging;

pub mod on_when;
pub mod once_when;
pub mod prelude;

pub use on_when::{on_when, OnWhenExt};
pub use once_when::{once_when, OnceWhenExt};

// Re-export core types
pub use emit_when_core::{
    BoxListener, EmitWhenError, EventLike, ListenerToken, Result, TokenSource,
};
