// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use emit_when_core::{EventLike, ListenerToken, Result};

/// Invokes a listener on every emission that satisfies a predicate.
///
/// Registers exactly one wrapping callback on `channel`. On each emission
/// the wrapper evaluates `predicate` against the payload: when it returns
/// `false` nothing happens, the listener is not called and no error is
/// raised for the rejected event; when it returns `true` the listener runs
/// synchronously, within the same dispatch turn, without disturbing the
/// fan-out to other listeners on the channel.
///
/// The subscription stays registered until the caller removes the returned
/// token (note that the token identifies the *wrapper*, the only
/// registration this call creates; the user listener is never registered
/// directly). Predicate and listener failures propagate through the
/// emitter's dispatch; the combinator neither catches nor wraps them.
///
/// # Arguments
///
/// * `emitter` - Any [`EventLike`] collaborator to register on
/// * `channel` - The channel to listen to
/// * `predicate` - Validates each emitted payload; side-effect-free
/// * `listener` - Invoked for every payload the predicate accepts
///
/// # Examples
///
/// ```rust
/// use emit_when::on_when;
/// use emit_when_core::EventLike;
/// use emit_when_test_utils::{CallRecorder, TestEmitter};
///
/// let emitter = TestEmitter::<bool>::new();
/// let recorder = CallRecorder::new();
///
/// on_when(&emitter, "test", |flag: &bool| *flag, recorder.listener());
///
/// emitter.emit("test", &false).unwrap();
/// emitter.emit("test", &true).unwrap();
/// emitter.emit("test", &true).unwrap();
///
/// assert_eq!(recorder.count(), 2);
/// ```
pub fn on_when<E, T, P, L>(
    emitter: &E,
    channel: &str,
    predicate: P,
    mut listener: L,
) -> ListenerToken
where
    E: EventLike<T> + ?Sized,
    T: 'static,
    P: Fn(&T) -> bool + Send + 'static,
    L: FnMut(&T) -> Result<()> + Send + 'static,
{
    emitter.on(
        channel,
        Box::new(move |payload| {
            if !predicate(payload) {
                return Ok(());
            }

            listener(payload)
        }),
    )
}

/// Extension trait providing the `on_when` combinator as a method.
///
/// This is the method form of [`on_when`]: pure delegation, attached to
/// every [`EventLike`] implementor through a blanket impl.
pub trait OnWhenExt<T: 'static>: EventLike<T> {
    /// Invokes `listener` on every emission of `channel` whose payload
    /// satisfies `predicate`.
    ///
    /// See [`on_when`] for the full contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use emit_when::OnWhenExt;
    /// use emit_when_core::EventLike;
    /// use emit_when_test_utils::{CallRecorder, TestEmitter};
    ///
    /// let emitter = TestEmitter::<i32>::new();
    /// let recorder = CallRecorder::new();
    ///
    /// emitter.on_when("load", |value: &i32| *value > 10, recorder.listener());
    ///
    /// emitter.emit("load", &5).unwrap();
    /// emitter.emit("load", &50).unwrap();
    ///
    /// assert_eq!(recorder.calls(), vec![50]);
    /// ```
    fn on_when<P, L>(&self, channel: &str, predicate: P, listener: L) -> ListenerToken
    where
        P: Fn(&T) -> bool + Send + 'static,
        L: FnMut(&T) -> Result<()> + Send + 'static;
}

impl<T, E> OnWhenExt<T> for E
where
    T: 'static,
    E: EventLike<T>,
{
    fn on_when<P, L>(&self, channel: &str, predicate: P, listener: L) -> ListenerToken
    where
        P: Fn(&T) -> bool + Send + 'static,
        L: FnMut(&T) -> Result<()> + Send + 'static,
    {
        on_when(self, channel, predicate, listener)
    }
}
