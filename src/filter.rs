//! Drop detections too small or too uncertain to chart.

use serde::Serialize;

use crate::detector::DetectionResult;

/// Minimum share of the document a language must cover to be shown.
pub const DEFAULT_PROPORTION_THRESHOLD: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterConfig {
    pub proportion_threshold: f64,
    pub reliable_only: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            proportion_threshold: DEFAULT_PROPORTION_THRESHOLD,
            reliable_only: true,
        }
    }
}

impl FilterConfig {
    pub fn with_reliable_only(self, reliable_only: bool) -> Self {
        Self {
            reliable_only,
            ..self
        }
    }

    /// Whether a single detection survives this configuration.
    pub fn accepts(&self, result: &DetectionResult) -> bool {
        result.proportion >= self.proportion_threshold
            && (!self.reliable_only || result.is_reliable)
    }
}

/// Keep the detections accepted by `config`, preserving their order.
///
/// An empty return is not an error: it means no language is significant.
pub fn filter(mut results: Vec<DetectionResult>, config: &FilterConfig) -> Vec<DetectionResult> {
    results.retain(|result| config.accepts(result));
    results
}
