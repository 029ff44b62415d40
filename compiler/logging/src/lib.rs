#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for the declaration loader.
//!
//! Non-fatal anomalies found while normalizing a declaration are reported to a
//! [`WarningSink`] supplied by the caller. [`TracingSink`] forwards them to
//! `tracing`; [`MemorySink`] keeps them in memory so tests can inspect them.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::Level;

/// Receives non-fatal warnings raised during normalization.
pub trait WarningSink: Send + Sync {
    /// Report a warning originating from `target` (a short component name).
    fn warn(&self, target: &str, message: &str);
}

/// Sink that emits every warning as a `tracing` event at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, target: &str, message: &str) {
        tracing::warn!(component = target, "{}", message);
    }
}

/// Sink that records warnings in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self { Self::default() }

    /// Recorded messages in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }

    /// Recorded `(target, message)` pairs in arrival order.
    pub fn entries(&self) -> Vec<(String, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of recorded warnings.
    pub fn len(&self) -> usize { self.entries().len() }

    /// Whether no warning has been recorded.
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl WarningSink for MemorySink {
    fn warn(&self, target: &str, message: &str) {
        let entry = (target.to_string(), message.to_string());
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Emits a debug-level trace event with a module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::debug!("[{}] {}", module, msg);
}

/// Install a global `tracing` fmt subscriber at `level`.
///
/// Events go to `file` (appended to, created if missing) when given, else to
/// stderr. Unknown level strings fall back to `info`. Calling this more than
/// once is harmless: later calls leave the first subscriber in place and
/// return `Ok(false)`.
pub fn init(level: &str, file: Option<&Path>) -> io::Result<bool> {
    let level = Level::from_str(level).unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);
    let installed = match file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init().is_ok()
        }
        None => builder.with_writer(io::stderr).try_init().is_ok(),
    };
    Ok(installed)
}
