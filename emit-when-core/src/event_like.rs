// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Minimal publish/subscribe capability interface.
//!
//! An [`EventLike`] collaborator owns a registry of listeners keyed by
//! channel name and fans emissions out to them synchronously. The
//! combinators in the `emit-when` crate are written against this trait and
//! nothing else, so anything that can register, remove, and dispatch
//! callbacks can host a predicate-gated subscription, whether a
//! full-featured event bus or a forty-line struct in a test file.

use crate::{BoxListener, ListenerToken, Result};

/// Capability interface for emitter-like collaborators.
///
/// Implementors provide three operations:
///
/// - **register**: attach a callback to fire on future emissions of a
///   channel, handing back a [`ListenerToken`] for later removal;
/// - **deregister**: detach a previously attached callback by token;
/// - **emit**: invoke every callback registered on a channel,
///   synchronously, in registration order.
///
/// Channel identifiers are opaque strings; two channels are the same
/// exactly when their names compare equal. Payloads are a single structured
/// type `T` per emitter.
///
/// # Dispatch semantics
///
/// `emit` runs listeners within the caller's turn: no queuing, no
/// deferral. A listener error ends the fan-out for that emission and is
/// returned to the `emit` caller; whether later registrations would have
/// run is therefore observable, and implementors must dispatch in
/// registration order. Removal during dispatch takes effect for subsequent
/// emissions; implementors are expected to tolerate a listener removing
/// itself mid-dispatch (the self-removing "once" wrapper does exactly
/// that).
pub trait EventLike<T: 'static> {
    /// Attaches `listener` to fire on future emissions of `channel`.
    ///
    /// Returns the token that identifies this registration for
    /// [`remove_listener`](Self::remove_listener).
    fn on(&self, channel: &str, listener: BoxListener<T>) -> ListenerToken;

    /// Detaches the registration identified by `token` from `channel`.
    ///
    /// Removing a token that is not currently registered is a no-op, not
    /// an error; the return value reports whether anything was removed.
    fn remove_listener(&self, channel: &str, token: ListenerToken) -> bool;

    /// Invokes all listeners registered on `channel` with `payload`.
    ///
    /// Returns `Ok(true)` if at least one listener was dispatched,
    /// `Ok(false)` if the channel had no listeners.
    ///
    /// # Errors
    ///
    /// Returns the first listener error; remaining listeners for that
    /// emission are not invoked.
    fn emit(&self, channel: &str, payload: &T) -> Result<bool>;
}
