// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use emit_when_core::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every payload a listener is invoked with.
///
/// The recorder is the observation side of the scenario tests: hand its
/// [`listener`](Self::listener) to an emitter or combinator, emit, then
/// assert on [`count`](Self::count) or [`calls`](Self::calls). Clones share
/// the same call log.
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> CallRecorder<T> {
    /// Creates a recorder with an empty call log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Produces a listener that appends each payload to the shared log.
    pub fn listener(&self) -> impl FnMut(&T) -> Result<()> + Send + 'static {
        let calls = Arc::clone(&self.calls);
        move |payload| {
            calls.lock().push(payload.clone());
            Ok(())
        }
    }

    /// Number of invocations recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// All recorded payloads, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<T: Clone + Send + 'static> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}
