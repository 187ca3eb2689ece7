//! Log sinks receiving one entry per described request.

use std::sync::Mutex;
use tracing::info;

/// Destination for serialized echo documents.
pub trait LogSink: Send + Sync {
    /// Write one entry.
    fn write_entry(&self, entry: &str);
}

/// Writes entries as `info` level tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn write_entry(&self, entry: &str) {
        info!("Request details: {}", entry);
    }
}

/// Keeps entries in memory.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    entries: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries written so far.
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogSink for MemoryLogSink {
    fn write_entry(&self, entry: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry.to_string());
    }
}
