// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

//! Test utilities and fixtures for the emit-when workspace.
//!
//! This crate provides the host-emitter side the combinators need in tests:
//! a synchronous in-memory emitter, payload fixtures, and listener
//! factories. It is designed for use in development and testing only, not
//! for production code.
//!
//! # Key Types
//!
//! ## `TestEmitter<T>`
//!
//! An in-memory emitter implementing the `EventLike<T>` capability
//! interface with synchronous, registration-order fan-out:
//!
//! ```rust
//! use emit_when_core::EventLike;
//! use emit_when_test_utils::TestEmitter;
//!
//! let emitter = TestEmitter::<i32>::new();
//! let token = emitter.on("tick", Box::new(|value| {
//!     assert_eq!(*value, 7);
//!     Ok(())
//! }));
//!
//! assert!(emitter.emit("tick", &7).unwrap());
//! assert!(emitter.remove_listener("tick", token));
//! ```
//!
//! ## `CallRecorder<T>`
//!
//! A clonable recorder whose `listener()` produces callbacks that count
//! and store every payload they are invoked with:
//!
//! ```rust
//! use emit_when_core::EventLike;
//! use emit_when_test_utils::{CallRecorder, TestEmitter};
//!
//! let emitter = TestEmitter::<bool>::new();
//! let recorder = CallRecorder::new();
//! emitter.on("test", Box::new(recorder.listener()));
//!
//! emitter.emit("test", &true).unwrap();
//! assert_eq!(recorder.count(), 1);
//! assert_eq!(recorder.calls(), vec![true]);
//! ```
//!
//! ## Fixtures
//!
//! `Reading` is a small structured payload with named factory helpers
//! (`reading_nominal`, `reading_critical`, ...) for tests that want
//! predicate-friendly data instead of bare booleans.
//!
//! # Module Organization
//!
//! - `test_emitter` - `TestEmitter<T>` and its registry
//! - `call_recorder` - `CallRecorder<T>` listener factory
//! - `error_injection` - always-failing listeners for error-path tests
//! - `reading` - payload fixtures

pub mod call_recorder;
pub mod error_injection;
pub mod reading;
pub mod test_emitter;

// Re-export commonly used test utilities
pub use call_recorder::CallRecorder;
pub use error_injection::{failing_listener, InjectedFailure};
pub use reading::Reading;
pub use test_emitter::TestEmitter;
