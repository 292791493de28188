// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for predicate-gated event subscriptions.
//!
//! The error surface is intentionally small: an emitter can fail while
//! dispatching, and a user listener can fail while handling a payload.
//! The combinators themselves add no error kinds of their own; they let
//! both cases propagate through the emitter's dispatch.
//!
//! # Examples
//!
//! ```
//! use emit_when_core::{EmitWhenError, Result};
//!
//! fn dispatch() -> Result<()> {
//!     Err(EmitWhenError::dispatch_error("registry unavailable"))
//! }
//! ```

/// Root error type for emitter dispatch and listener invocation.
#[derive(Debug, thiserror::Error)]
pub enum EmitWhenError {
    /// The emitter failed while fanning out an emission.
    ///
    /// Reserved for host emitters; the combinators never construct this
    /// variant themselves.
    #[error("Dispatch error: {context}")]
    DispatchError {
        /// Description of what went wrong during dispatch
        context: String,
    },

    /// A user-supplied listener returned an error.
    ///
    /// This wraps errors produced by listener callbacks, allowing them to
    /// surface through `emit` without losing the original error.
    #[error("Listener error: {0}")]
    ListenerError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EmitWhenError {
    /// Create a dispatch error with the given context
    pub fn dispatch_error(context: impl Into<String>) -> Self {
        Self::DispatchError {
            context: context.into(),
        }
    }

    /// Wrap a listener error
    ///
    /// # Examples
    ///
    /// ```
    /// use emit_when_core::EmitWhenError;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("handler failed: {msg}")]
    /// struct HandlerError {
    ///     msg: String,
    /// }
    ///
    /// let err = EmitWhenError::listener_error(HandlerError {
    ///     msg: "boom".to_string(),
    /// });
    /// assert!(matches!(err, EmitWhenError::ListenerError(_)));
    /// ```
    pub fn listener_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ListenerError(Box::new(error))
    }
}

/// Specialized Result type for emitter and listener operations
///
/// This is a type alias for `std::result::Result<T, EmitWhenError>`,
/// providing a convenient shorthand for functions that return emit-when
/// errors.
pub type Result<T> = std::result::Result<T, EmitWhenError>;
