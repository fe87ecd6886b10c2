//! Patient record generation
//!
//! Produces a plausible population of vital-sign readings for exercising the
//! pipeline end to end, and mutates readings over time so consecutive
//! batches differ the way a live ward feed would.

use crate::domain::errors::PulseError;
use crate::domain::ids::{PatientId, RecordId};
use crate::domain::record::VitalRecord;
use crate::domain::result::Result;
use chrono::Local;
use rand::Rng;
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Tony", "Radia", "Dennis",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Hoare",
    "Perlman", "Ritchie",
];

/// Generates the initial patient population
pub fn generate_population(count: usize) -> Result<Vec<VitalRecord>> {
    (0..count).map(|_| generate_patient()).collect()
}

/// Generates one patient with a fresh reading
///
/// Vital ranges deliberately straddle the clinical thresholds so generated
/// batches exercise every evaluation category.
pub fn generate_patient() -> Result<VitalRecord> {
    let mut rng = rand::thread_rng();

    let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())].to_string();
    let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())].to_string();
    let dob = format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(1935..=2005),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    );

    let now = Local::now();

    Ok(VitalRecord {
        record_id: new_record_id()?,
        patient_id: PatientId::new(Uuid::new_v4().to_string()).map_err(PulseError::Parse)?,
        first_name,
        last_name,
        dob,
        check_in_date: now.format("%Y-%m-%d").to_string(),
        record_timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        systolic_bp: rng.gen_range(95.0..=185.0),
        diastolic_bp: rng.gen_range(60.0..=120.0),
        heart_rate: rng.gen_range(50.0..=115.0),
        body_temperature: rng.gen_range(96.0..=101.0),
        blood_oxygen: rng.gen_range(90.0..=100.0),
        blood_sugar: rng.gen_range(60.0..=200.0),
    })
}

/// Mutates a patient's vitals in place, producing a new reading
///
/// The patient identity stays fixed; the reading gets a fresh record ID and
/// timestamp, and each vital drifts a small step within its plausible range.
pub fn update_vitals(record: &mut VitalRecord) -> Result<()> {
    let mut rng = rand::thread_rng();

    record.record_id = new_record_id()?;
    record.record_timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    record.systolic_bp = drift(&mut rng, record.systolic_bp, 8.0, 90.0, 195.0);
    record.diastolic_bp = drift(&mut rng, record.diastolic_bp, 6.0, 55.0, 130.0);
    record.heart_rate = drift(&mut rng, record.heart_rate, 5.0, 45.0, 130.0);
    record.body_temperature = drift(&mut rng, record.body_temperature, 0.4, 95.0, 103.0);
    record.blood_oxygen = drift(&mut rng, record.blood_oxygen, 1.0, 85.0, 100.0);
    record.blood_sugar = drift(&mut rng, record.blood_sugar, 10.0, 50.0, 250.0);

    Ok(())
}

/// File name for one serialized batch: `<object_name>-<timestamp>.json`
///
/// The timestamp carries microsecond precision and contains no spaces or
/// colons, so consecutive uploads never collide.
pub fn batch_file_name(object_name: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S%.6f");
    format!("{object_name}-{timestamp}.json")
}

fn new_record_id() -> Result<RecordId> {
    RecordId::new(Uuid::new_v4().to_string()).map_err(PulseError::Parse)
}

fn drift(rng: &mut impl Rng, value: f64, step: f64, min: f64, max: f64) -> f64 {
    (value + rng.gen_range(-step..=step)).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_population_size() {
        let population = generate_population(25).unwrap();
        assert_eq!(population.len(), 25);
    }

    #[test]
    fn test_generated_patients_are_distinct() {
        let population = generate_population(10).unwrap();
        let ids: HashSet<&str> = population.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_generated_vitals_within_plausible_ranges() {
        for record in generate_population(50).unwrap() {
            assert!((95.0..=185.0).contains(&record.systolic_bp));
            assert!((60.0..=120.0).contains(&record.diastolic_bp));
            assert!((50.0..=115.0).contains(&record.heart_rate));
            assert!((96.0..=101.0).contains(&record.body_temperature));
            assert!((90.0..=100.0).contains(&record.blood_oxygen));
            assert!((60.0..=200.0).contains(&record.blood_sugar));
        }
    }

    #[test]
    fn test_update_vitals_refreshes_reading() {
        let mut record = generate_patient().unwrap();
        let patient_id = record.patient_id.clone();
        let previous_record_id = record.record_id.clone();

        update_vitals(&mut record).unwrap();

        assert_eq!(record.patient_id, patient_id);
        assert_ne!(record.record_id, previous_record_id);
    }

    #[test]
    fn test_update_vitals_stays_clamped() {
        let mut record = generate_patient().unwrap();
        for _ in 0..200 {
            update_vitals(&mut record).unwrap();
            assert!((90.0..=195.0).contains(&record.systolic_bp));
            assert!((85.0..=100.0).contains(&record.blood_oxygen));
        }
    }

    #[test]
    fn test_batch_file_name_format() {
        let name = batch_file_name("patient_records");
        assert!(name.starts_with("patient_records-"));
        assert!(name.ends_with(".json"));
        assert!(!name.contains(' '));
        assert!(!name.contains(':'));
    }

    #[test]
    fn test_batch_file_names_do_not_collide() {
        let a = batch_file_name("patient_records");
        let b = batch_file_name("patient_records");
        assert_ne!(a, b);
    }
}
