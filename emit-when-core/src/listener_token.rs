// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Registration handles for emitter listeners.
//!
//! Removal works by token, not by callback identity: `on` returns a
//! [`ListenerToken`] and `remove_listener` takes it back. This keeps the
//! removal contract explicit; the self-removing "once" wrapper holds its
//! own token instead of relying on closure reference identity.

use std::sync::atomic::{AtomicU64, Ordering::SeqCst};

/// Opaque handle identifying one listener registration on an emitter.
///
/// Tokens are minted by the emitter (via a [`TokenSource`]) and are only
/// meaningful to the emitter that issued them. They are cheap to copy and
/// usable as map keys.
///
/// ```
/// use emit_when_core::TokenSource;
///
/// let tokens = TokenSource::new();
/// let a = tokens.mint();
/// let b = tokens.mint();
/// assert_ne!(a, b);
/// assert_eq!(a, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

impl ListenerToken {
    /// Gets the raw token value, for diagnostics only.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Monotonic counter minting unique [`ListenerToken`]s for one emitter.
#[derive(Debug, Default)]
pub struct TokenSource {
    next: AtomicU64,
}

impl TokenSource {
    /// Creates a new source starting at token zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Mints the next token.
    ///
    /// Tokens from the same source never repeat.
    pub fn mint(&self) -> ListenerToken {
        ListenerToken(self.next.fetch_add(1, SeqCst))
    }
}
