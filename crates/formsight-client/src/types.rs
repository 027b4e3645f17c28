//! Service request/response types.

use formsight_models::PredictionResult;
use serde::{Deserialize, Serialize};

/// Fallback used when an upload response carries neither filename
/// field. Masks the malformed response rather than surfacing it; the
/// client logs a warning when it fires.
pub const DEFAULT_PROCESSED_FILENAME: &str = "processed_squat_clip.mp4";

/// Request body for the greeting endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

/// Response from the greeting endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetResponse {
    pub message: String,
}

/// Response from a video upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Name of the processed clip on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Older field name some service versions use instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_filename: Option<String>,
    /// Classification produced during processing
    pub prediction: PredictionResult,
}

impl UploadResponse {
    /// Resolve the processed clip's filename.
    ///
    /// Precedence: `filename`, then `processed_filename`, then
    /// [`DEFAULT_PROCESSED_FILENAME`].
    pub fn resolved_filename(&self) -> &str {
        self.filename
            .as_deref()
            .or(self.processed_filename.as_deref())
            .unwrap_or(DEFAULT_PROCESSED_FILENAME)
    }
}

/// Model status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction() -> PredictionResult {
        PredictionResult {
            predicted_label: "good".to_string(),
            confidence: 0.9,
            class_names: vec!["good".to_string()],
            all_probabilities: vec![0.9],
        }
    }

    #[test]
    fn test_resolved_filename_prefers_filename() {
        let response = UploadResponse {
            filename: Some("out.mp4".to_string()),
            processed_filename: Some("old.mp4".to_string()),
            prediction: prediction(),
        };
        assert_eq!(response.resolved_filename(), "out.mp4");
    }

    #[test]
    fn test_resolved_filename_falls_back_to_processed() {
        let response = UploadResponse {
            filename: None,
            processed_filename: Some("old.mp4".to_string()),
            prediction: prediction(),
        };
        assert_eq!(response.resolved_filename(), "old.mp4");
    }

    #[test]
    fn test_resolved_filename_hardcoded_fallback() {
        let response = UploadResponse {
            filename: None,
            processed_filename: None,
            prediction: prediction(),
        };
        assert_eq!(response.resolved_filename(), DEFAULT_PROCESSED_FILENAME);
    }
}
