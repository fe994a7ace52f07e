use crate::record::LogRecord;
use crate::sink::LogSink;
use async_trait::async_trait;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Sink that captures formatted lines in memory.
///
/// Useful for tests that assert on exactly which lines an endpoint
/// produced, without touching the real process streams.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("memory sink lock poisoned").clone()
    }
}

#[async_trait]
impl LogSink for MemorySink {
    async fn append(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines
            .lock()
            .expect("memory sink lock poisoned")
            .push(record.to_string());
        Ok(())
    }
}

/// Sink whose appends always fail.
///
/// Lets tests exercise the write-failure path of the endpoint.
#[derive(Clone, Default)]
pub struct FailingSink;

#[async_trait]
impl LogSink for FailingSink {
    async fn append(&self, _record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        Err("sink unavailable".into())
    }
}
