//! Clinical threshold rules
//!
//! Pure, stateless, deterministic classification of single vital measurements.
//! Each evaluator reads only the fields it needs from the record and returns
//! a category; it never mutates or inspects unrelated fields.
//!
//! Blood pressure is evaluated as an explicit ordered cascade of
//! (predicate, category) pairs, top to bottom, first match wins. The cascade
//! reproduces the source rule order literally, including placing the
//! `Hypertensive_Crisis` arm after the `Hypertension_Stage_II` arm: because
//! the Stage II predicate is an OR over the same ranges, the Crisis arm can
//! never match. A reading of 185/125 therefore classifies as
//! `Hypertension_Stage_II`. Reordering the cascade would change observable
//! behavior, so it is kept as-is.

use crate::domain::errors::PulseError;
use crate::domain::evaluation::{BloodPressureCategory, VitalCategory};
use crate::domain::record::VitalRecord;
use crate::domain::result::Result;

type BpPredicate = fn(f64, f64) -> bool;

fn bp_normal(systolic: f64, diastolic: f64) -> bool {
    systolic < 120.0 && diastolic < 80.0
}

fn bp_elevated(systolic: f64, diastolic: f64) -> bool {
    (120.0..=129.0).contains(&systolic) && diastolic < 80.0
}

fn bp_stage_one(systolic: f64, diastolic: f64) -> bool {
    (130.0..=139.0).contains(&systolic) || (80.0..=89.0).contains(&diastolic)
}

fn bp_stage_two(systolic: f64, diastolic: f64) -> bool {
    systolic >= 140.0 || diastolic >= 90.0
}

fn bp_crisis(systolic: f64, diastolic: f64) -> bool {
    // Shadowed by the Stage II arm above; kept to preserve the source cascade.
    systolic >= 180.0 || diastolic >= 120.0
}

/// The blood-pressure cascade, in evaluation order
static BP_CASCADE: &[(BpPredicate, BloodPressureCategory)] = &[
    (bp_normal, BloodPressureCategory::Normal),
    (bp_elevated, BloodPressureCategory::Elevated),
    (bp_stage_one, BloodPressureCategory::HypertensionStageI),
    (bp_stage_two, BloodPressureCategory::HypertensionStageII),
    (bp_crisis, BloodPressureCategory::HypertensiveCrisis),
];

/// Classifies a record's blood pressure
///
/// # Errors
///
/// Returns [`PulseError::Evaluation`] when no cascade arm matches, which can
/// only happen for non-finite measurements (every comparison against NaN is
/// false).
pub fn evaluate_blood_pressure(record: &VitalRecord) -> Result<BloodPressureCategory> {
    let (systolic, diastolic) = (record.systolic_bp, record.diastolic_bp);

    BP_CASCADE
        .iter()
        .find(|(predicate, _)| predicate(systolic, diastolic))
        .map(|(_, category)| *category)
        .ok_or_else(|| {
            PulseError::Evaluation(format!(
                "blood pressure {systolic}/{diastolic} matched no rule for record {}",
                record.record_id
            ))
        })
}

/// Classifies a record's heart rate (60-100 inclusive is normal)
pub fn evaluate_heart_rate(record: &VitalRecord) -> VitalCategory {
    let heart_rate = record.heart_rate;
    if (60.0..=100.0).contains(&heart_rate) {
        VitalCategory::Normal
    } else if heart_rate < 60.0 {
        VitalCategory::Low
    } else {
        VitalCategory::High
    }
}

/// Classifies a record's blood sugar (< 70 low, >= 180 high)
pub fn evaluate_blood_sugar(record: &VitalRecord) -> VitalCategory {
    let blood_sugar = record.blood_sugar;
    if blood_sugar < 70.0 {
        VitalCategory::Low
    } else if blood_sugar >= 180.0 {
        VitalCategory::High
    } else {
        VitalCategory::Normal
    }
}

/// Classifies a record's blood oxygen saturation (< 95 low, never high)
pub fn evaluate_blood_oxygen(record: &VitalRecord) -> VitalCategory {
    if record.blood_oxygen < 95.0 {
        VitalCategory::Low
    } else {
        VitalCategory::Normal
    }
}

/// Classifies a record's body temperature (< 97 low, > 99 high)
pub fn evaluate_body_temperature(record: &VitalRecord) -> VitalCategory {
    let body_temperature = record.body_temperature;
    if body_temperature < 97.0 {
        VitalCategory::Low
    } else if body_temperature > 99.0 {
        VitalCategory::High
    } else {
        VitalCategory::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{PatientId, RecordId};
    use test_case::test_case;

    fn record(systolic: f64, diastolic: f64, hr: f64, temp: f64, oxygen: f64, sugar: f64) -> VitalRecord {
        VitalRecord {
            record_id: RecordId::new("rec-1").unwrap(),
            patient_id: PatientId::new("pat-1").unwrap(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            dob: "1990-03-14".to_string(),
            check_in_date: "2024-05-01".to_string(),
            record_timestamp: "2024-05-01 10:00:00".to_string(),
            systolic_bp: systolic,
            diastolic_bp: diastolic,
            heart_rate: hr,
            body_temperature: temp,
            blood_oxygen: oxygen,
            blood_sugar: sugar,
        }
    }

    fn bp(systolic: f64, diastolic: f64) -> BloodPressureCategory {
        evaluate_blood_pressure(&record(systolic, diastolic, 70.0, 98.0, 98.0, 90.0)).unwrap()
    }

    #[test_case(110.0, 70.0 => BloodPressureCategory::Normal; "both below thresholds")]
    #[test_case(119.0, 79.0 => BloodPressureCategory::Normal; "just under both bounds")]
    #[test_case(120.0, 79.0 => BloodPressureCategory::Elevated; "systolic lower bound")]
    #[test_case(129.0, 79.0 => BloodPressureCategory::Elevated; "systolic upper bound")]
    #[test_case(130.0, 70.0 => BloodPressureCategory::HypertensionStageI; "systolic stage one")]
    #[test_case(110.0, 80.0 => BloodPressureCategory::HypertensionStageI; "diastolic stage one")]
    #[test_case(125.0, 85.0 => BloodPressureCategory::HypertensionStageI; "elevated systolic with stage one diastolic")]
    #[test_case(140.0, 70.0 => BloodPressureCategory::HypertensionStageII; "systolic stage two")]
    #[test_case(110.0, 90.0 => BloodPressureCategory::HypertensionStageII; "diastolic stage two")]
    fn test_bp_cascade(systolic: f64, diastolic: f64) -> BloodPressureCategory {
        bp(systolic, diastolic)
    }

    #[test]
    fn test_bp_crisis_arm_is_shadowed_by_stage_two() {
        // 185/125 satisfies the crisis thresholds, but the Stage II arm is
        // evaluated first and its OR predicate also matches. The cascade
        // therefore yields Stage II; asserting this pins the rule order.
        assert_eq!(bp(185.0, 125.0), BloodPressureCategory::HypertensionStageII);
        assert_eq!(bp(200.0, 130.0), BloodPressureCategory::HypertensionStageII);
    }

    #[test]
    fn test_bp_nan_fails_evaluation() {
        let err = evaluate_blood_pressure(&record(f64::NAN, 80.0, 70.0, 98.0, 98.0, 90.0))
            .unwrap_err();
        assert!(matches!(err, PulseError::Evaluation(_)));
    }

    #[test_case(60.0 => VitalCategory::Normal; "lower bound inclusive")]
    #[test_case(100.0 => VitalCategory::Normal; "upper bound inclusive")]
    #[test_case(59.9 => VitalCategory::Low; "just below lower bound")]
    #[test_case(100.1 => VitalCategory::High; "just above upper bound")]
    #[test_case(72.0 => VitalCategory::Normal; "resting rate")]
    fn test_heart_rate(hr: f64) -> VitalCategory {
        evaluate_heart_rate(&record(115.0, 75.0, hr, 98.0, 98.0, 90.0))
    }

    #[test_case(69.9 => VitalCategory::Low; "just below lower bound")]
    #[test_case(70.0 => VitalCategory::Normal; "lower bound exclusive of low")]
    #[test_case(179.9 => VitalCategory::Normal; "just below high threshold")]
    #[test_case(180.0 => VitalCategory::High; "high threshold inclusive")]
    fn test_blood_sugar(sugar: f64) -> VitalCategory {
        evaluate_blood_sugar(&record(115.0, 75.0, 70.0, 98.0, 98.0, sugar))
    }

    #[test_case(94.9 => VitalCategory::Low; "just below threshold")]
    #[test_case(95.0 => VitalCategory::Normal; "threshold inclusive of normal")]
    #[test_case(100.0 => VitalCategory::Normal; "full saturation")]
    fn test_blood_oxygen(oxygen: f64) -> VitalCategory {
        evaluate_blood_oxygen(&record(115.0, 75.0, 70.0, 98.0, oxygen, 90.0))
    }

    #[test_case(96.9 => VitalCategory::Low; "just below low bound")]
    #[test_case(97.0 => VitalCategory::Normal; "low bound exclusive of low")]
    #[test_case(99.0 => VitalCategory::Normal; "high bound exclusive of high")]
    #[test_case(99.1 => VitalCategory::High; "just above high bound")]
    fn test_body_temperature(temp: f64) -> VitalCategory {
        evaluate_body_temperature(&record(115.0, 75.0, 70.0, temp, 98.0, 90.0))
    }
}
