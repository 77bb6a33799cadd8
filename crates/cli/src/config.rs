// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use serde::{Deserialize, Serialize};

/// How the retained history is read back after the workload.
///
/// - `Snapshot`: one consistent copy taken under the ring's lock.
/// - `Cursor`: lazy oldest-first walk that does not hold the lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    #[default]
    Snapshot,
    Cursor,
}

impl std::fmt::Display for ReadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot => f.write_str("snapshot"),
            Self::Cursor => f.write_str("cursor"),
        }
    }
}

impl std::str::FromStr for ReadMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snapshot" => Ok(Self::Snapshot),
            "cursor" => Ok(Self::Cursor),
            other => anyhow::bail!("invalid read mode: {other}"),
        }
    }
}

/// Output format for retained samples.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => anyhow::bail!("invalid output format: {other}"),
        }
    }
}

/// Drive concurrent writers into a rolling in-memory log and print what it retained.
#[derive(Debug, Parser)]
#[command(name = "ringlog", version, about)]
pub struct Config {
    /// Number of slots in the ring log.
    #[arg(long, env = "RINGLOG_CAPACITY", default_value = "16")]
    pub capacity: usize,

    /// Number of concurrent writers.
    #[arg(long, env = "RINGLOG_WRITERS", default_value = "4")]
    pub writers: usize,

    /// Appends performed by each writer.
    #[arg(long, env = "RINGLOG_APPENDS", default_value = "100")]
    pub appends: u64,

    /// Read mode for the retained history (snapshot or cursor).
    #[arg(long, env = "RINGLOG_READ", default_value = "snapshot")]
    pub read: String,

    /// Output format for retained samples (json or text).
    #[arg(long, env = "RINGLOG_OUTPUT", default_value = "json")]
    pub output: String,

    /// Log format (json or text).
    #[arg(long, env = "RINGLOG_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "RINGLOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Validate option combinations that clap cannot express.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.capacity == 0 {
            anyhow::bail!("--capacity must be > 0");
        }
        if self.writers == 0 {
            anyhow::bail!("--writers must be > 0");
        }
        self.read_mode()?;
        self.output_format()?;
        Ok(())
    }

    pub fn read_mode(&self) -> anyhow::Result<ReadMode> {
        self.read.parse()
    }

    pub fn output_format(&self) -> anyhow::Result<OutputFormat> {
        self.output.parse()
    }

    /// Total appends across all writers.
    pub fn total_appends(&self) -> u64 {
        self.writers as u64 * self.appends
    }

    /// Small, fast config for tests.
    pub fn test() -> Self {
        Self {
            capacity: 8,
            writers: 2,
            appends: 20,
            read: "snapshot".to_owned(),
            output: "json".to_owned(),
            log_format: "text".to_owned(),
            log_level: "debug".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
