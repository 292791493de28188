// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

//! Core traits and types for the emit-when workspace.
//!
//! This crate defines the capability surface the combinators in `emit-when`
//! are written against:
//!
//! - [`EventLike`]: the minimal publish/subscribe interface an emitter-like
//!   collaborator must provide (register, remove by token, emit).
//! - [`ListenerToken`] / [`TokenSource`]: opaque registration handles and
//!   the counter that mints them.
//! - [`BoxListener`]: the boxed callback shape stored by emitters.
//! - [`EmitWhenError`] / [`Result`]: the error surface shared by emitters
//!   and listeners.
//!
//! Emitter implementations live elsewhere; any object implementing
//! [`EventLike`] works with the combinators.

pub mod emit_when_error;
pub mod event_like;
pub mod listener;
pub mod listener_token;

pub use self::emit_when_error::{EmitWhenError, Result};
pub use self::event_like::EventLike;
pub use self::listener::BoxListener;
pub use self::listener_token::{ListenerToken, TokenSource};
