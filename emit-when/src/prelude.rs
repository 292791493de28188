// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module for convenient imports

pub use crate::on_when::{on_when, OnWhenExt};
pub use crate::once_when::{once_when, OnceWhenExt};
pub use emit_when_core::{EmitWhenError, EventLike, ListenerToken, Result};
