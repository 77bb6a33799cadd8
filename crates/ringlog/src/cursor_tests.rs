// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{RingError, RingLog};

#[test]
fn empty_ring_cursor_is_exhausted() -> anyhow::Result<()> {
    let ring = RingLog::<u32>::new(4)?;
    let mut cursor = ring.cursor();
    assert!(!cursor.has_next());
    assert_eq!(cursor.value(), Err(RingError::Exhausted));
    Ok(())
}

#[test]
fn manual_loop_yields_oldest_first() -> anyhow::Result<()> {
    let ring = RingLog::new(3)?;
    for v in ["A", "B", "C", "D", "E"] {
        ring.append(v);
    }

    let mut cursor = ring.cursor();
    let mut seen = Vec::new();
    while cursor.has_next() {
        seen.push(cursor.value()?);
    }
    assert_eq!(seen, vec!["C", "D", "E"]);
    Ok(())
}

#[test]
fn value_past_end_fails_without_moving() -> anyhow::Result<()> {
    let ring = RingLog::new(2)?;
    ring.append(1);

    let mut cursor = ring.cursor();
    assert_eq!(cursor.value(), Ok(1));
    assert_eq!(cursor.remaining(), 0);
    assert_eq!(cursor.value(), Err(RingError::Exhausted));
    assert_eq!(cursor.value(), Err(RingError::Exhausted));
    assert_eq!(cursor.next(), None);
    Ok(())
}

#[test]
fn has_next_does_not_advance() -> anyhow::Result<()> {
    let ring = RingLog::new(2)?;
    ring.append(10);

    let mut cursor = ring.cursor();
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.value(), Ok(10));
    Ok(())
}

#[test]
fn count_is_captured_at_creation() -> anyhow::Result<()> {
    let ring = RingLog::new(4)?;
    ring.append(1);
    ring.append(2);

    let cursor = ring.cursor();
    ring.append(3);

    assert_eq!(cursor.len(), 2);
    assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2]);
    Ok(())
}

#[test]
fn racing_append_is_visible_to_cursor() -> anyhow::Result<()> {
    let ring = RingLog::new(2)?;
    ring.append(1);
    ring.append(2);

    let mut cursor = ring.cursor();
    // Overwrites the slot holding 1 before the cursor reads it.
    ring.append(3);

    assert_eq!(cursor.value(), Ok(3));
    assert_eq!(cursor.value(), Ok(2));
    assert!(!cursor.has_next());
    Ok(())
}

#[test]
fn size_hint_tracks_remaining() -> anyhow::Result<()> {
    let ring = RingLog::new(3)?;
    for v in 0..5 {
        ring.append(v);
    }

    let mut cursor = ring.cursor();
    assert_eq!(cursor.size_hint(), (3, Some(3)));
    cursor.next();
    assert_eq!(cursor.size_hint(), (2, Some(2)));
    Ok(())
}
