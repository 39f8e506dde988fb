use async_trait::async_trait;

use super::{DataSource, RawDataset};
use crate::error::AnalysisError;

/// A [`DataSource`] over rows already held in memory.
///
/// Used by tests and by callers that obtained the relations some other way.
pub struct MemorySource(RawDataset);

impl MemorySource {
    pub fn new(dataset: RawDataset) -> Self {
        Self(dataset)
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch_dataset(&self) -> Result<RawDataset, AnalysisError> {
        Ok(self.0.clone())
    }
}
