// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A structured event payload for tests: one sensor measurement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reading {
    pub sensor: String,
    pub value: i64,
}

impl Reading {
    #[must_use]
    pub const fn new(sensor: String, value: i64) -> Self {
        Self { sensor, value }
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reading[sensor={}, value={}]", self.sensor, self.value)
    }
}

pub fn reading(sensor: &str, value: i64) -> Reading {
    Reading::new(sensor.to_string(), value)
}

pub fn reading_nominal() -> Reading {
    Reading::new("boiler".to_string(), 42)
}

pub fn reading_elevated() -> Reading {
    Reading::new("boiler".to_string(), 97)
}

pub fn reading_critical() -> Reading {
    Reading::new("boiler".to_string(), 181)
}
