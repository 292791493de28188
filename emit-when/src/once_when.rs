// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use emit_when_core::{EventLike, ListenerToken, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Invokes a listener the first time an emission satisfies a predicate,
/// then removes the subscription.
///
/// Registers exactly one wrapping callback on `channel`, which stays
/// registered across any number of non-satisfying emissions (unlike a
/// plain "once" primitive, which fires on the first emission regardless).
/// On the first emission whose payload satisfies `predicate`, the wrapper
/// invokes `listener` and deregisters itself from the emitter using the
/// token recorded at registration.
///
/// # Behavior
///
/// - Non-satisfying emission: no side effects, subscription stays armed
/// - First satisfying emission: listener runs once, then the wrapper
///   removes itself; neither predicate nor listener is consulted again
///   through this subscription
/// - Listener failure: self-removal still happens, and the error is
///   returned to the `emit` caller afterwards; cleanup never swallows it
/// - A predicate that never succeeds leaves the subscription alive for the
///   lifetime of the emitter
///
/// The emitter handle is captured by clone for the later self-removal,
/// hence the `Clone` bound; emitters are expected to be cheap shared
/// handles. Removing the returned token again after the wrapper has fired
/// is a no-op.
///
/// # Arguments
///
/// * `emitter` - Any clonable [`EventLike`] collaborator to register on
/// * `channel` - The channel to listen to
/// * `predicate` - Validates each emitted payload; side-effect-free
/// * `listener` - Invoked for the first payload the predicate accepts
///
/// # Examples
///
/// ```rust
/// use emit_when::once_when;
/// use emit_when_core::EventLike;
/// use emit_when_test_utils::{CallRecorder, TestEmitter};
///
/// let emitter = TestEmitter::<bool>::new();
/// let recorder = CallRecorder::new();
///
/// once_when(&emitter, "test", |flag: &bool| *flag, recorder.listener());
///
/// emitter.emit("test", &false).unwrap();
/// emitter.emit("test", &true).unwrap();
/// emitter.emit("test", &true).unwrap();
///
/// assert_eq!(recorder.count(), 1);
/// assert_eq!(emitter.listener_count("test"), 0);
/// ```
pub fn once_when<E, T, P, L>(
    emitter: &E,
    channel: &str,
    predicate: P,
    mut listener: L,
) -> ListenerToken
where
    E: EventLike<T> + Clone + Send + 'static,
    T: 'static,
    P: Fn(&T) -> bool + Send + 'static,
    L: FnMut(&T) -> Result<()> + Send + 'static,
{
    // The wrapper must remove itself with the token its own registration
    // returns; the slot is filled immediately after `on` hands it back,
    // before any emission can reach the wrapper.
    let token_slot: Arc<Mutex<Option<ListenerToken>>> = Arc::new(Mutex::new(None));
    let fired = AtomicBool::new(false);

    let handle = emitter.clone();
    let channel_name = channel.to_owned();
    let slot = Arc::clone(&token_slot);

    let token = emitter.on(
        channel,
        Box::new(move |payload| {
            if fired.load(Ordering::Acquire) {
                return Ok(());
            }
            if !predicate(payload) {
                return Ok(());
            }
            fired.store(true, Ordering::Release);

            // Capture the listener's outcome first: self-removal runs on
            // the success and the failure path alike.
            let outcome = listener(payload);

            match *slot.lock() {
                Some(own_token) => {
                    handle.remove_listener(&channel_name, own_token);
                }
                None => {
                    warn!(
                        "once_when wrapper on '{}' fired before its token was recorded; subscription cannot self-remove",
                        channel_name
                    );
                }
            }

            outcome
        }),
    );
    *token_slot.lock() = Some(token);

    token
}

/// Extension trait providing the `once_when` combinator as a method.
///
/// This is the method form of [`once_when`]: pure delegation, attached to
/// every clonable [`EventLike`] implementor through a blanket impl.
pub trait OnceWhenExt<T: 'static>: EventLike<T> {
    /// Invokes `listener` for the first emission of `channel` whose
    /// payload satisfies `predicate`, then removes the subscription.
    ///
    /// See [`once_when`] for the full contract.
    fn once_when<P, L>(&self, channel: &str, predicate: P, listener: L) -> ListenerToken
    where
        P: Fn(&T) -> bool + Send + 'static,
        L: FnMut(&T) -> Result<()> + Send + 'static;
}

impl<T, E> OnceWhenExt<T> for E
where
    T: 'static,
    E: EventLike<T> + Clone + Send + 'static,
{
    fn once_when<P, L>(&self, channel: &str, predicate: P, listener: L) -> ListenerToken
    where
        P: Fn(&T) -> bool + Send + 'static,
        L: FnMut(&T) -> Result<()> + Send + 'static,
    {
        once_when(self, channel, predicate, listener)
    }
}
