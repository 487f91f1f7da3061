use anyhow::Result;
use writeable_model::{Document, Finding};

/// One detection strategy over a normalized document.
///
/// Implementations are stateless: `analyze` takes `&self` and must not carry
/// state between invocations, so one pipeline instance can serve concurrent
/// `run` calls. Configuration is fixed at construction time.
pub trait Analyzer: Send + Sync {
    /// Report bucket this analyzer populates.
    fn category(&self) -> &str;

    /// Scan the document and return findings in document order.
    ///
    /// An `Err` return is contained by the pipeline and surfaced as a single
    /// synthetic error-severity finding in this analyzer's category; it never
    /// aborts the run.
    fn analyze(&self, document: &Document) -> Result<Vec<Finding>>;
}
