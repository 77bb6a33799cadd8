// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity, thread-safe rolling log of recent events.
//!
//! A [`RingLog`] keeps the most recent `capacity` values appended to it and
//! silently overwrites the oldest one once full. Reads come in two flavours:
//! [`RingLog::snapshot`] copies the live history under the lock, and
//! [`RingLog::cursor`] walks it lazily without holding the lock.

pub mod cursor;
pub mod error;
pub mod ring;

pub use cursor::Cursor;
pub use error::RingError;
pub use ring::{RawSlots, RingLog};
