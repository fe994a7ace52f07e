use crate::record::LogRecord;
use async_trait::async_trait;
use std::error::Error;

/// Asynchronous destination for ingested [`LogRecord`]s.
///
/// Implementations are responsible for appending the formatted line to a
/// concrete target (stdout, an in-memory buffer in tests, etc). The HTTP
/// handler calls `append` once per successfully decoded request.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Append a single record to the underlying target.
    ///
    /// **Parameters**
    /// - `record`: the decoded [`LogRecord`] for one request.
    ///
    /// **Returns**
    /// - `Ok(())` if the line was written.
    /// - `Err(..)` if the target failed. The handler treats this as a
    ///   full failure of the request; nothing is retried.
    ///
    /// Ordering between concurrent appends is whatever the target itself
    /// guarantees; the trait imposes none.
    async fn append(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>>;
}
