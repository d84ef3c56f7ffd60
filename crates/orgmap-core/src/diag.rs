#![forbid(unsafe_code)]

//! Injectable diagnostics sink.
//!
//! Hierarchy construction and the chart model report noteworthy conditions
//! (excluded orphans, rejected snapshots, failed fullscreen requests)
//! through a [`DiagSink`] supplied by the host instead of writing to any
//! global console. Hosts pick the destination: [`TracingSink`] forwards to
//! the `tracing` ecosystem, [`MemorySink`] buffers records for an in-app
//! diagnostics panel or a test assertion, [`NullSink`] discards everything.

use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Sink trait
// ---------------------------------------------------------------------------

/// Destination for structured diagnostics.
pub trait DiagSink: Send + Sync {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Severity of a captured diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagLevel {
    Debug,
    Warn,
    Error,
}

/// One captured diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagRecord {
    pub level: DiagLevel,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

/// Sink that discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagSink for NullSink {
    fn debug(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Sink that forwards diagnostics to `tracing` events under the `orgmap`
/// target.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "orgmap", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "orgmap", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "orgmap", "{message}");
    }
}

/// Sink that buffers diagnostics in memory.
///
/// Useful for surfacing recent diagnostics inside the host UI and for
/// asserting on emitted messages in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<DiagRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: DiagLevel, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(DiagRecord {
                level,
                message: message.to_string(),
            });
        }
    }

    /// Snapshot of all records captured so far.
    #[must_use]
    pub fn records(&self) -> Vec<DiagRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Records at a specific level.
    #[must_use]
    pub fn records_at(&self, level: DiagLevel) -> Vec<DiagRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .collect()
    }

    /// Drain and return all captured records.
    pub fn take(&self) -> Vec<DiagRecord> {
        self.records
            .lock()
            .map(|mut r| std::mem::take(&mut *r))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl DiagSink for MemorySink {
    fn debug(&self, message: &str) {
        self.push(DiagLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.push(DiagLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(DiagLevel::Error, message);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
