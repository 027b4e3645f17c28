//! Exercise-fault vocabulary and coaching recommendations.

use serde::{Deserialize, Serialize};

/// Known squat-form classifications produced by the model.
///
/// The service may ship new labels before the client learns about
/// them; [`FaultLabel::from_label`] returns `None` for those and the
/// UI simply renders no recommendation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultLabel {
    /// Form within tolerance, nothing to fix
    Good,
    /// Posterior pelvic tilt at the bottom of the squat
    Buttwink,
    /// Excessive forward torso lean
    Leanforward,
}

impl FaultLabel {
    /// Get string representation of the label (the wire vocabulary).
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultLabel::Good => "good",
            FaultLabel::Buttwink => "buttwink",
            FaultLabel::Leanforward => "leanforward",
        }
    }

    /// Map a raw predicted label onto the known vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "good" => Some(FaultLabel::Good),
            "buttwink" => Some(FaultLabel::Buttwink),
            "leanforward" => Some(FaultLabel::Leanforward),
            _ => None,
        }
    }

    /// Human-readable heading for the result panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            FaultLabel::Good => "Good form",
            FaultLabel::Buttwink => "Butt wink",
            FaultLabel::Leanforward => "Forward lean",
        }
    }

    /// Coaching recommendations shown under the classification.
    ///
    /// Empty for `Good`; the UI hides the block when there is nothing
    /// to recommend.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            FaultLabel::Good => &[],
            FaultLabel::Buttwink => &[
                "Shorten your squat depth until your pelvis stays neutral.",
                "Widen your stance slightly and turn your toes out.",
                "Work on hip and ankle mobility before loading heavy.",
            ],
            FaultLabel::Leanforward => &[
                "Keep your chest up and look straight ahead.",
                "Shift the load toward mid-foot, not the toes.",
                "Strengthen your upper back with rows and face pulls.",
            ],
        }
    }
}

impl std::fmt::Display for FaultLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(FaultLabel::from_label("good"), Some(FaultLabel::Good));
        assert_eq!(FaultLabel::from_label("buttwink"), Some(FaultLabel::Buttwink));
        assert_eq!(
            FaultLabel::from_label("leanforward"),
            Some(FaultLabel::Leanforward)
        );
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(FaultLabel::from_label("kneecave"), None);
        assert_eq!(FaultLabel::from_label(""), None);
    }

    #[test]
    fn test_round_trip_matches_wire_vocabulary() {
        for label in [FaultLabel::Good, FaultLabel::Buttwink, FaultLabel::Leanforward] {
            assert_eq!(FaultLabel::from_label(label.as_str()), Some(label));
        }
    }

    #[test]
    fn test_good_has_no_recommendations() {
        assert!(FaultLabel::Good.recommendations().is_empty());
        assert!(!FaultLabel::Buttwink.recommendations().is_empty());
        assert!(!FaultLabel::Leanforward.recommendations().is_empty());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&FaultLabel::Buttwink).unwrap();
        assert_eq!(json, "\"buttwink\"");
    }
}
