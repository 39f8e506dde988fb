use thiserror::Error;

/// Errors produced by the occupancy pipeline.
///
/// Every variant is fatal for the current run: there are no retries and no
/// partial results.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The bulk read from the backing store failed.
    #[error("data source error: {0}")]
    DataSource(String),

    /// Extraction produced zero flight records. The aggregation stages are
    /// undefined on empty input, so the run is refused rather than reporting
    /// misleading averages.
    #[error("dataset contains no flights with known seat capacity")]
    EmptyDataset,

    /// Caller-supplied configuration is out of range.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
