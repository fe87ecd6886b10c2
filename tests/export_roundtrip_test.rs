//! CSV export round-trip properties
//!
//! Evaluating a batch and formatting it must preserve every source field and
//! value, add exactly the five evaluation columns, and keep both column and
//! row order stable.

use pulse::core::evaluate::evaluate_batch;
use pulse::core::export::csv::format_batch;
use pulse::domain::record::parse_batch;
use serde_json::json;

const SOURCE_FIELDS: [&str; 13] = [
    "Record_ID",
    "Patient_ID",
    "First_Name",
    "Last_Name",
    "DOB",
    "Check_In_Date",
    "Record_Timestamp",
    "Systolic_BP",
    "Diastolic_BP",
    "Heart_Rate",
    "Body_Temperature",
    "Blood_Oxygen",
    "Blood_Sugar",
];

const EVAL_FIELDS: [&str; 5] = [
    "BP_evaluation",
    "Heart_Rate_Eval",
    "Blood_Sugar_Eval",
    "Blood_Oxygen_Eval",
    "Body_Temp_Eval",
];

fn sample_batch() -> Vec<u8> {
    serde_json::to_vec(&json!([
        {
            "Record_ID": "rec-1",
            "Patient_ID": "pat-1",
            "First_Name": "Ada",
            "Last_Name": "Lovelace",
            "DOB": "1990-03-14",
            "Check_In_Date": "2024-05-01",
            "Record_Timestamp": "2024-05-01 10:00:00",
            "Systolic_BP": 115.0,
            "Diastolic_BP": 75.0,
            "Heart_Rate": 70.0,
            "Body_Temperature": 98.0,
            "Blood_Oxygen": 98.0,
            "Blood_Sugar": 90.0
        },
        {
            "Record_ID": "rec-2",
            "Patient_ID": "pat-2",
            "First_Name": "Grace",
            "Last_Name": "Hopper",
            "DOB": "1986-12-09",
            "Check_In_Date": "2024-05-01",
            "Record_Timestamp": "2024-05-01 10:05:00",
            "Systolic_BP": 185.0,
            "Diastolic_BP": 125.0,
            "Heart_Rate": 110.0,
            "Body_Temperature": 96.5,
            "Blood_Oxygen": 93.0,
            "Blood_Sugar": 200.0
        }
    ]))
    .unwrap()
}

fn rendered_rows(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

#[test]
fn test_round_trip_adds_exactly_five_columns_in_order() {
    let records = parse_batch(&sample_batch()).unwrap();
    let evaluated = evaluate_batch(records).unwrap();
    let bytes = format_batch(&evaluated).unwrap();

    let (header, rows) = rendered_rows(&bytes);

    let expected: Vec<&str> = SOURCE_FIELDS
        .iter()
        .chain(EVAL_FIELDS.iter())
        .copied()
        .collect();
    assert_eq!(header, expected);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_round_trip_preserves_source_values_and_row_order() {
    let records = parse_batch(&sample_batch()).unwrap();
    let evaluated = evaluate_batch(records.clone()).unwrap();
    let bytes = format_batch(&evaluated).unwrap();

    let (header, rows) = rendered_rows(&bytes);

    for (row, record) in rows.iter().zip(&records) {
        let field = |name: &str| {
            let index = header.iter().position(|h| h == name).unwrap();
            row[index].as_str()
        };

        assert_eq!(field("Record_ID"), record.record_id.as_str());
        assert_eq!(field("Patient_ID"), record.patient_id.as_str());
        assert_eq!(field("First_Name"), record.first_name);
        assert_eq!(field("DOB"), record.dob);
        assert_eq!(field("Record_Timestamp"), record.record_timestamp);
        assert_eq!(field("Systolic_BP").parse::<f64>().unwrap(), record.systolic_bp);
        assert_eq!(field("Heart_Rate").parse::<f64>().unwrap(), record.heart_rate);
        assert_eq!(field("Blood_Sugar").parse::<f64>().unwrap(), record.blood_sugar);
    }

    assert_eq!(rows[0][0], "rec-1");
    assert_eq!(rows[1][0], "rec-2");
}

#[test]
fn test_round_trip_evaluations_match_thresholds() {
    let records = parse_batch(&sample_batch()).unwrap();
    let evaluated = evaluate_batch(records).unwrap();
    let bytes = format_batch(&evaluated).unwrap();

    let (header, rows) = rendered_rows(&bytes);
    let field = |row: &[String], name: &str| {
        let index = header.iter().position(|h| h == name).unwrap();
        row[index].clone()
    };

    // rec-1 is the all-normal scenario
    for eval in EVAL_FIELDS {
        assert_eq!(field(&rows[0], eval), "normal");
    }

    // rec-2: 185/125 lands on Stage II because the cascade tests it first
    assert_eq!(field(&rows[1], "BP_evaluation"), "Hypertension_Stage_II");
    assert_eq!(field(&rows[1], "Heart_Rate_Eval"), "high");
    assert_eq!(field(&rows[1], "Blood_Sugar_Eval"), "high");
    assert_eq!(field(&rows[1], "Blood_Oxygen_Eval"), "low");
    assert_eq!(field(&rows[1], "Body_Temp_Eval"), "low");
}
