// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous in-memory emitter for tests.
//!
//! [`TestEmitter`] implements the `EventLike<T>` capability interface with
//! named channels and registration-order fan-out.
//!
//! ## Characteristics
//!
//! - **Synchronous**: `emit` invokes listeners within the caller's turn.
//! - **Thread-safe**: cheap to clone; all clones share the same registry.
//! - **Snapshot dispatch**: `emit` iterates a snapshot of the channel's
//!   registrations, so a listener may remove itself (or register others)
//!   mid-dispatch; such mutations take effect for subsequent emissions.
//! - **Fail-fast**: the first listener error ends the fan-out for that
//!   emission and is returned to the `emit` caller.
//!
//! A listener must not re-emit on a channel it is itself registered on;
//! the emitter keeps each callback behind its own lock during invocation.

use emit_when_core::{BoxListener, EventLike, ListenerToken, Result, TokenSource};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

struct Registration<T> {
    token: ListenerToken,
    callback: Arc<Mutex<BoxListener<T>>>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            token: self.token,
            callback: Arc::clone(&self.callback),
        }
    }
}

struct EmitterState<T> {
    channels: HashMap<String, Vec<Registration<T>>>,
    tokens: TokenSource,
}

/// An in-memory emitter with named channels and synchronous dispatch.
///
/// `TestEmitter` is the reference host for the predicate-gated
/// combinators: registrations are keyed by [`ListenerToken`], fan-out runs
/// in registration order, and removing an unknown token is a no-op.
///
/// See the [module documentation](self) for dispatch semantics.
pub struct TestEmitter<T: 'static> {
    state: Arc<Mutex<EmitterState<T>>>,
}

impl<T: 'static> TestEmitter<T> {
    /// Creates a new emitter with no channels and no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(EmitterState {
                channels: HashMap::new(),
                tokens: TokenSource::new(),
            })),
        }
    }

    /// Returns the number of listeners currently registered on `channel`.
    #[must_use]
    pub fn listener_count(&self, channel: &str) -> usize {
        self.state
            .lock()
            .channels
            .get(channel)
            .map_or(0, Vec::len)
    }

    /// Returns the names of all channels with at least one listener.
    #[must_use]
    pub fn channel_names(&self) -> Vec<String> {
        self.state
            .lock()
            .channels
            .iter()
            .filter(|(_, registrations)| !registrations.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Removes every listener on `channel`, or on all channels when `None`.
    ///
    /// Bulk teardown is idempotent; clearing an unknown channel has no
    /// effect.
    pub fn remove_all_listeners(&self, channel: Option<&str>) {
        let mut state = self.state.lock();
        match channel {
            Some(name) => {
                state.channels.remove(name);
            }
            None => state.channels.clear(),
        }
    }
}

impl<T: 'static> EventLike<T> for TestEmitter<T> {
    fn on(&self, channel: &str, listener: BoxListener<T>) -> ListenerToken {
        let mut state = self.state.lock();
        let token = state.tokens.mint();
        state
            .channels
            .entry(channel.to_owned())
            .or_default()
            .push(Registration {
                token,
                callback: Arc::new(Mutex::new(listener)),
            });
        token
    }

    fn remove_listener(&self, channel: &str, token: ListenerToken) -> bool {
        let mut state = self.state.lock();
        let Some(registrations) = state.channels.get_mut(channel) else {
            return false;
        };

        let before = registrations.len();
        registrations.retain(|registration| registration.token != token);
        before != registrations.len()
    }

    fn emit(&self, channel: &str, payload: &T) -> Result<bool> {
        // Snapshot under the registry lock, dispatch outside it, so that
        // listeners can remove themselves or register others mid-dispatch.
        let snapshot: Vec<Registration<T>> = {
            let state = self.state.lock();
            state.channels.get(channel).cloned().unwrap_or_default()
        };

        if snapshot.is_empty() {
            return Ok(false);
        }

        for registration in &snapshot {
            let mut callback = registration.callback.lock();
            (*callback)(payload)?;
        }

        Ok(true)
    }
}

impl<T: 'static> Default for TestEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Clone for TestEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
