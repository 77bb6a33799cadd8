// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::ops::Deref;

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::RingError;

/// Fixed-capacity circular log of the most recent values.
///
/// Appends never block on a full buffer: once every slot has been written,
/// each append overwrites the oldest live entry. All state sits behind a
/// single mutex, so appenders and snapshot readers on different threads see
/// a consistent view. Share it across threads with `Arc<RingLog<T>>`.
pub struct RingLog<T> {
    capacity: usize,
    inner: Mutex<Slots<T>>,
}

/// Storage and bookkeeping guarded by the ring's lock.
struct Slots<T> {
    buf: Box<[Option<T>]>,
    write_pos: usize,
    full: bool,
}

impl<T> Slots<T> {
    /// Physical index of the oldest live entry and the number of live entries.
    fn live(&self) -> (usize, usize) {
        if self.full {
            (self.write_pos, self.buf.len())
        } else {
            (0, self.write_pos)
        }
    }
}

impl<T> RingLog<T> {
    /// Create a ring log with `capacity` unset slots.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        let buf: Box<[Option<T>]> = (0..capacity).map(|_| None).collect();
        debug!(capacity, "ring log created");
        Ok(Self { capacity, inner: Mutex::new(Slots { buf, write_pos: 0, full: false }) })
    }

    /// Append a value, overwriting the oldest entry when full.
    ///
    /// Returns the slot index the next append will write to.
    pub fn append(&self, value: T) -> usize {
        let (next, evicted, wrapped) = {
            let mut inner = self.inner.lock();
            let pos = inner.write_pos;
            let evicted = inner.buf[pos].replace(value);
            let next = (pos + 1) % self.capacity;
            let wrapped = next == 0 && !inner.full;
            if next == 0 {
                inner.full = true;
            }
            inner.write_pos = next;
            (next, evicted, wrapped)
        };
        // The evicted value is dropped here, outside the lock.
        drop(evicted);
        if wrapped {
            debug!(capacity = self.capacity, "ring log wrapped, overwriting oldest entries");
        }
        next
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries: `capacity` once full, otherwise the appends so far.
    pub fn len(&self) -> usize {
        self.inner.lock().live().1
    }

    pub fn is_empty(&self) -> bool {
        let inner = self.inner.lock();
        !inner.full && inner.write_pos == 0
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// True once every slot has been written at least once.
    pub fn is_full(&self) -> bool {
        self.inner.lock().full
    }

    /// Copy the live entries, oldest first.
    ///
    /// The copy is taken in one pass under the lock, so it never straddles a
    /// concurrent append. Values are cloned, so wrap large payloads in `Arc`
    /// to keep this shallow.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        let inner = self.inner.lock();
        let (start, count) = inner.live();
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            if let Some(value) = &inner.buf[(start + i) % self.capacity] {
                out.push(value.clone());
            }
        }
        out
    }

    /// Start a lazy oldest-first cursor over the entries live right now.
    ///
    /// The cursor records where to start and how many entries to yield, then
    /// releases the lock. It does not see later appends, but if appends race
    /// with the traversal it may yield a value that replaced one that was
    /// live at creation. Use [`snapshot`](Self::snapshot) when a consistent
    /// view under concurrent writers matters.
    pub fn cursor(&self) -> Cursor<'_, T> {
        let (start, count) = self.inner.lock().live();
        Cursor::new(self, start, count)
    }

    /// The backing slots in physical order, unset placeholders included.
    ///
    /// Requires exclusive access, so no append can run while the slice is
    /// borrowed. Slot order is not oldest-first.
    pub fn raw_slots(&mut self) -> &[Option<T>] {
        &self.inner.get_mut().buf
    }

    /// The backing slots in physical order, read through a guard that holds
    /// the ring's lock until dropped.
    ///
    /// Every append and read on this ring blocks while the guard is alive.
    pub fn raw_slots_locked(&self) -> RawSlots<'_, T> {
        RawSlots { guard: self.inner.lock() }
    }

    /// Clone the value in physical slot `index`, holding the lock only for the read.
    pub(crate) fn read_slot(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().buf.get(index).cloned().flatten()
    }
}

impl<T> fmt::Debug for RingLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (write_pos, full, len) = {
            let inner = self.inner.lock();
            (inner.write_pos, inner.full, inner.live().1)
        };
        f.debug_struct("RingLog")
            .field("capacity", &self.capacity)
            .field("len", &len)
            .field("write_pos", &write_pos)
            .field("full", &full)
            .finish()
    }
}

/// Locked view of a ring's backing slots, see [`RingLog::raw_slots_locked`].
pub struct RawSlots<'a, T> {
    guard: MutexGuard<'a, Slots<T>>,
}

impl<T> Deref for RawSlots<'_, T> {
    type Target = [Option<T>];

    fn deref(&self) -> &Self::Target {
        &self.guard.buf
    }
}

#[cfg(test)]
#[path = "ring_tests.rs"]
mod tests;
