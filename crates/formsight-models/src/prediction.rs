//! Prediction payload returned by the form-analysis service.

use serde::{Deserialize, Serialize};

/// Classification result for one uploaded video.
///
/// `class_names` and `all_probabilities` are index-aligned: the
/// probability for `class_names[i]` is `all_probabilities[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Winning class label (e.g. "buttwink")
    pub predicted_label: String,
    /// Confidence for the winning class, in [0, 1]
    pub confidence: f64,
    /// Ordered class vocabulary
    pub class_names: Vec<String>,
    /// Per-class probabilities, index-aligned with `class_names`
    pub all_probabilities: Vec<f64>,
}

impl PredictionResult {
    /// Check the payload's internal invariants: the probability vector
    /// is index-aligned with the vocabulary and the winning label is a
    /// member of it.
    ///
    /// An inconsistent payload is not rejected anywhere; it simply
    /// renders with no per-class breakdown or recommendation.
    pub fn is_consistent(&self) -> bool {
        self.all_probabilities.len() == self.class_names.len()
            && self.class_names.iter().any(|c| c == &self.predicted_label)
    }

    /// Look up the probability for a class by label.
    pub fn probability_for(&self, label: &str) -> Option<f64> {
        let idx = self.class_names.iter().position(|c| c == label)?;
        self.all_probabilities.get(idx).copied()
    }

    /// Confidence as a display percentage with one decimal, e.g. `87.0%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionResult {
        PredictionResult {
            predicted_label: "buttwink".to_string(),
            confidence: 0.87,
            class_names: vec![
                "good".to_string(),
                "buttwink".to_string(),
                "leanforward".to_string(),
            ],
            all_probabilities: vec![0.05, 0.87, 0.08],
        }
    }

    #[test]
    fn test_consistent_payload() {
        assert!(sample().is_consistent());
    }

    #[test]
    fn test_misaligned_probabilities() {
        let mut p = sample();
        p.all_probabilities.pop();
        assert!(!p.is_consistent());
    }

    #[test]
    fn test_unknown_winner_is_inconsistent() {
        let mut p = sample();
        p.predicted_label = "kneecave".to_string();
        assert!(!p.is_consistent());
    }

    #[test]
    fn test_probability_lookup() {
        let p = sample();
        assert_eq!(p.probability_for("buttwink"), Some(0.87));
        assert_eq!(p.probability_for("good"), Some(0.05));
        assert_eq!(p.probability_for("kneecave"), None);
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(sample().confidence_percent(), "87.0%");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "predicted_label": "good",
            "confidence": 0.91,
            "class_names": ["good", "buttwink", "leanforward"],
            "all_probabilities": [0.91, 0.04, 0.05]
        }"#;
        let p: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(p.predicted_label, "good");
        assert!(p.is_consistent());
    }
}
