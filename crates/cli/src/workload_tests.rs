// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use ringlog::RingLog;

use super::{read_back, render, run, Sample};
use crate::config::{Config, OutputFormat, ReadMode};

fn sample(writer: usize, seq: u64) -> Sample {
    Sample { writer, seq, timestamp_ms: 0 }
}

#[tokio::test]
async fn retains_capacity_samples() -> anyhow::Result<()> {
    let config = Config::test();
    let mut out = Vec::new();
    let summary = run(&config, &mut out).await?;

    assert_eq!(summary.appended, 40);
    assert_eq!(summary.retained, 8);
    assert_eq!(summary.capacity, 8);

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    for line in lines {
        let parsed: Sample = serde_json::from_str(line)?;
        assert!(parsed.writer < 2);
        assert!(parsed.seq < 20);
    }
    Ok(())
}

#[tokio::test]
async fn fewer_appends_than_capacity() -> anyhow::Result<()> {
    let config = Config { capacity: 64, writers: 1, appends: 5, ..Config::test() };
    let mut out = Vec::new();
    let summary = run(&config, &mut out).await?;

    assert_eq!(summary.retained, 5);
    let seqs: Vec<u64> = String::from_utf8(out)?
        .lines()
        .map(|line| serde_json::from_str::<Sample>(line).map(|s| s.seq))
        .collect::<Result<_, _>>()?;
    assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn cursor_mode_matches_snapshot_mode() -> anyhow::Result<()> {
    let config = Config::test();
    let ring = super::fill(&config).await?;

    let snap = read_back(&ring, ReadMode::Snapshot)?;
    let walked = read_back(&ring, ReadMode::Cursor)?;
    assert_eq!(snap, walked);
    Ok(())
}

#[test]
fn text_render() -> anyhow::Result<()> {
    let ring = RingLog::new(2)?;
    ring.append(sample(0, 1));
    ring.append(sample(1, 2));
    ring.append(sample(0, 3));

    let mut out = Vec::new();
    render(&read_back(&ring, ReadMode::Snapshot)?, OutputFormat::Text, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "writer=1 seq=2 ts=0\nwriter=0 seq=3 ts=0\n");
    Ok(())
}

#[tokio::test]
async fn zero_capacity_surfaces_ring_error() {
    let config = Config { capacity: 0, ..Config::test() };
    let mut out = Vec::new();
    crate::assert_err_contains!(run(&config, &mut out).await, "ZERO_CAPACITY");
}
