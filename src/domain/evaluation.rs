//! Clinical evaluation categories
//!
//! Closed enumerations of the labels the rule engine assigns per vital.
//! Serialized forms match the wire/export format exactly (the blood-pressure
//! stage labels are capitalized with underscores).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Blood-pressure evaluation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodPressureCategory {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "elevated")]
    Elevated,
    #[serde(rename = "Hypertension_Stage_I")]
    HypertensionStageI,
    #[serde(rename = "Hypertension_Stage_II")]
    HypertensionStageII,
    #[serde(rename = "Hypertensive_Crisis")]
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    /// The serialized label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::HypertensionStageI => "Hypertension_Stage_I",
            Self::HypertensionStageII => "Hypertension_Stage_II",
            Self::HypertensiveCrisis => "Hypertensive_Crisis",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-measurement evaluation category (heart rate, blood sugar,
/// blood oxygen, body temperature)
///
/// Blood oxygen only ever produces `Low` or `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalCategory {
    Low,
    Normal,
    High,
}

impl VitalCategory {
    /// The serialized label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for VitalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bp_category_serialized_labels() {
        let json = serde_json::to_string(&BloodPressureCategory::HypertensionStageII).unwrap();
        assert_eq!(json, "\"Hypertension_Stage_II\"");

        let json = serde_json::to_string(&BloodPressureCategory::Normal).unwrap();
        assert_eq!(json, "\"normal\"");
    }

    #[test]
    fn test_bp_category_round_trip() {
        for cat in [
            BloodPressureCategory::Normal,
            BloodPressureCategory::Elevated,
            BloodPressureCategory::HypertensionStageI,
            BloodPressureCategory::HypertensionStageII,
            BloodPressureCategory::HypertensiveCrisis,
        ] {
            let json = serde_json::to_string(&cat).unwrap();
            let back: BloodPressureCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(cat, back);
        }
    }

    #[test]
    fn test_vital_category_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&VitalCategory::Low).unwrap(),
            "\"low\""
        );
        assert_eq!(VitalCategory::High.as_str(), "high");
    }

    #[test]
    fn test_display_matches_serialized_form() {
        assert_eq!(
            BloodPressureCategory::HypertensiveCrisis.to_string(),
            "Hypertensive_Crisis"
        );
        assert_eq!(VitalCategory::Normal.to_string(), "normal");
    }
}
