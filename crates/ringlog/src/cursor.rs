// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::RingError;
use crate::ring::RingLog;

/// One-shot oldest-first cursor over a [`RingLog`], created by
/// [`RingLog::cursor`].
///
/// Start position and entry count are captured at creation. Each read locks
/// the ring just long enough to clone one slot, so concurrent appends can
/// replace an entry before the cursor reaches it.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    ring: &'a RingLog<T>,
    read_pos: usize,
    remaining: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(ring: &'a RingLog<T>, start: usize, count: usize) -> Self {
        Self { ring, read_pos: start, remaining: count }
    }

    /// Whether another entry is left to read.
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Number of entries left to read.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Read the current entry and advance.
    ///
    /// Returns [`RingError::Exhausted`] once every captured entry has been
    /// read; the cursor does not move in that case.
    pub fn value(&mut self) -> Result<T, RingError>
    where
        T: Clone,
    {
        if self.remaining == 0 {
            return Err(RingError::Exhausted);
        }
        let value = self.ring.read_slot(self.read_pos).ok_or(RingError::Exhausted)?;
        self.read_pos = (self.read_pos + 1) % self.ring.capacity();
        self.remaining -= 1;
        Ok(value)
    }
}

impl<T: Clone> Iterator for Cursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.has_next() {
            return None;
        }
        self.value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Cursor<'_, T> {}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
