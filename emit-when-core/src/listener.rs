// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Result;

/// Boxed listener callback as stored by an emitter.
///
/// A listener receives a shared reference to the emitted payload and
/// performs side effects only; a returned error propagates out of the
/// emitter's `emit` call. Each emitter carries a single structured payload
/// type `T`; event families with heterogeneous payloads model `T` as an
/// enum rather than a variadic argument list.
pub type BoxListener<T> = Box<dyn FnMut(&T) -> Result<()> + Send + 'static>;
