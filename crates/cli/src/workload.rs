// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent append workload against a shared [`RingLog`].
//!
//! Writers run as blocking tasks on the tokio runtime since appends take a
//! synchronous lock. Once every writer finishes, the retained history is read
//! back and rendered one sample per line.

use std::io::Write;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, info};

use ringlog::RingLog;

use crate::config::{Config, OutputFormat, ReadMode};

/// One recorded event: which writer produced it and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub writer: usize,
    pub seq: u64,
    pub timestamp_ms: u64,
}

/// Counters reported after a workload run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub appended: u64,
    pub retained: usize,
    pub capacity: usize,
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Spawn `config.writers` writers, each appending `config.appends` samples,
/// and wait for all of them.
pub async fn fill(config: &Config) -> anyhow::Result<Arc<RingLog<Sample>>> {
    let ring = Arc::new(RingLog::new(config.capacity)?);
    let mut tasks = JoinSet::new();

    for writer in 0..config.writers {
        let ring = Arc::clone(&ring);
        let appends = config.appends;
        tasks.spawn_blocking(move || {
            for seq in 0..appends {
                ring.append(Sample { writer, seq, timestamp_ms: now_ms() });
            }
            debug!(writer, appends, "writer finished");
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined?;
    }
    Ok(ring)
}

/// Read the retained samples oldest-first using the given mode.
pub fn read_back(ring: &RingLog<Sample>, mode: ReadMode) -> anyhow::Result<Vec<Sample>> {
    match mode {
        ReadMode::Snapshot => Ok(ring.snapshot()),
        ReadMode::Cursor => {
            let mut cursor = ring.cursor();
            let mut samples = Vec::with_capacity(cursor.remaining());
            while cursor.has_next() {
                samples.push(cursor.value()?);
            }
            Ok(samples)
        }
    }
}

/// Write samples one per line.
pub fn render(samples: &[Sample], format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    for sample in samples {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, sample)?;
                out.write_all(b"\n")?;
            }
            OutputFormat::Text => {
                writeln!(out, "writer={} seq={} ts={}", sample.writer, sample.seq, sample.timestamp_ms)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Run the full workload and print the retained history to `out`.
pub async fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<Summary> {
    let mode = config.read_mode()?;
    let format = config.output_format()?;

    let ring = fill(config).await?;
    let samples = read_back(&ring, mode)?;
    render(&samples, format, out)?;

    let summary = Summary {
        appended: config.total_appends(),
        retained: samples.len(),
        capacity: ring.capacity(),
    };
    info!(
        appended = summary.appended,
        retained = summary.retained,
        capacity = summary.capacity,
        read = %mode,
        "workload finished"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "workload_tests.rs"]
mod tests;
