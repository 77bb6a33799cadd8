// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors surfaced by [`RingLog`](crate::RingLog) and [`Cursor`](crate::Cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingError {
    /// Construction was asked for a buffer with no slots.
    ZeroCapacity,
    /// `Cursor::value` was called after the cursor yielded every entry.
    Exhausted,
}

impl RingError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroCapacity => "ZERO_CAPACITY",
            Self::Exhausted => "EXHAUSTED",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ZeroCapacity => "ring log capacity must be > 0",
            Self::Exhausted => "cursor read past the last live entry",
        }
    }
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.as_str(), self.message())
    }
}

impl std::error::Error for RingError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
