use crate::record::LogRecord;
use crate::sink::LogSink;
use async_trait::async_trait;
use std::error::Error;
use tokio::io::AsyncWriteExt;

/// Sink that appends formatted lines to the process stdout stream.
///
/// Each record becomes one `[<level>] <message>` line. The line is written
/// with a single `write_all` call; any serialization of concurrent writes
/// is provided by the stdout handle itself, not by this type.
#[derive(Clone, Default)]
pub struct StdoutSink;

#[async_trait]
impl LogSink for StdoutSink {
    async fn append(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let line = format!("{record}\n");
        let mut out = tokio::io::stdout();
        out.write_all(line.as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}
