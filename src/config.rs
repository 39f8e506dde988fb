use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Flights strictly below this occupancy rate count as low-occupancy.
pub const DEFAULT_LOW_OCCUPANCY_THRESHOLD: f64 = 0.5;

/// How many worst-offender aircraft types to report.
pub const DEFAULT_TOP_N: usize = 5;

/// Tuning knobs for one analysis run, supplied explicitly by the caller.
///
/// Defaults cover the non-secret values only; where the data lives is the
/// data source's concern, not this struct's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub low_occupancy_threshold: f64,
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            low_occupancy_threshold: DEFAULT_LOW_OCCUPANCY_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Rejects thresholds outside `[0, 1]` and a zero report size.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..=1.0).contains(&self.low_occupancy_threshold) {
            return Err(AnalysisError::Configuration(format!(
                "low_occupancy_threshold must lie in [0, 1], got {}",
                self.low_occupancy_threshold
            )));
        }

        if self.top_n == 0 {
            return Err(AnalysisError::Configuration(
                "top_n must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_threshold_bounds_are_inclusive() {
        let mut config = AnalysisConfig::default();

        config.low_occupancy_threshold = 0.0;
        assert!(config.validate().is_ok());

        config.low_occupancy_threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = AnalysisConfig::default();

        config.low_occupancy_threshold = -0.1;
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::Configuration(_))
        ));

        config.low_occupancy_threshold = 1.1;
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::Configuration(_))
        ));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = AnalysisConfig {
            low_occupancy_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let config = AnalysisConfig {
            top_n: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::Configuration(_))
        ));
    }
}
