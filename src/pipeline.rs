//! One upload, end to end: decode → classify → filter → label → compose.

use tracing::{debug, info};

use crate::catalog::LanguageCatalog;
use crate::chart::{compose, ChartSegment};
use crate::detector::{DetectionResult, LanguageIdentifier};
use crate::error::{InputError, PipelineError};
use crate::filter::{filter, FilterConfig};

/// The only accepted upload extension.
pub const ALLOWED_EXTENSION: &str = ".txt";

/// Result of a request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// At least one language survived filtering.
    Languages {
        survivors: Vec<DetectionResult>,
        segments: Vec<ChartSegment>,
    },
    /// Filtering left nothing to draw.
    NoSignificantLanguage,
}

impl Outcome {
    pub fn segments(&self) -> &[ChartSegment] {
        match self {
            Outcome::Languages { segments, .. } => segments,
            Outcome::NoSignificantLanguage => &[],
        }
    }
}

/// Validate an uploaded file and decode it as UTF-8 text.
pub fn decode_upload(file_name: &str, bytes: &[u8]) -> Result<String, InputError> {
    if !file_name.to_lowercase().ends_with(ALLOWED_EXTENSION) {
        return Err(InputError::UnsupportedExtension(file_name.to_string()));
    }

    let text = std::str::from_utf8(bytes).map_err(|_| InputError::InvalidEncoding)?;
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    Ok(text.to_string())
}

/// Run classification and build the chart for one document.
///
/// Empty text is rejected before the classifier is called. An unknown
/// language code among the survivors aborts the whole request.
pub fn analyze<I: LanguageIdentifier>(
    text: &str,
    identifier: &I,
    catalog: &LanguageCatalog,
    filter_config: &FilterConfig,
    max_results: usize,
) -> Result<Outcome, PipelineError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty.into());
    }

    let detections = identifier.find_top_languages(text, max_results);
    debug!(count = detections.len(), "Classifier returned detections");

    let survivors = filter(detections, filter_config);
    if survivors.is_empty() {
        info!(
            reliable_only = filter_config.reliable_only,
            "No significant language detected"
        );
        return Ok(Outcome::NoSignificantLanguage);
    }

    let segments = compose(&survivors, catalog)?;
    info!(
        languages = ?survivors.iter().map(|r| r.language_code.as_str()).collect::<Vec<_>>(),
        "Detected languages"
    );

    Ok(Outcome::Languages {
        survivors,
        segments,
    })
}
