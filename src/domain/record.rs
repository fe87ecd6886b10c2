//! Vital-sign record models
//!
//! [`VitalRecord`] is the raw reading as it appears on the wire (a flat JSON
//! object inside a batch array). [`EvaluatedRecord`] is the same reading plus
//! the five categorical evaluations, immutable once produced.
//!
//! Construction from JSON is explicit: every required field is extracted by
//! name and its absence is a checked `MissingField` error, not a runtime
//! lookup failure. Field declaration order matches the wire format and drives
//! the column order of the tabular export and the relational insert.

use crate::domain::errors::PulseError;
use crate::domain::evaluation::{BloodPressureCategory, VitalCategory};
use crate::domain::ids::{PatientId, RecordId};
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw patient vital-sign reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalRecord {
    #[serde(rename = "Record_ID")]
    pub record_id: RecordId,
    #[serde(rename = "Patient_ID")]
    pub patient_id: PatientId,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    #[serde(rename = "Check_In_Date")]
    pub check_in_date: String,
    #[serde(rename = "Record_Timestamp")]
    pub record_timestamp: String,
    #[serde(rename = "Systolic_BP")]
    pub systolic_bp: f64,
    #[serde(rename = "Diastolic_BP")]
    pub diastolic_bp: f64,
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: f64,
    #[serde(rename = "Body_Temperature")]
    pub body_temperature: f64,
    #[serde(rename = "Blood_Oxygen")]
    pub blood_oxygen: f64,
    #[serde(rename = "Blood_Sugar")]
    pub blood_sugar: f64,
}

impl VitalRecord {
    /// Builds a record from one flat JSON object
    ///
    /// `context` identifies the record in error messages (its `Record_ID`
    /// when present, otherwise its position in the batch).
    pub fn from_value(value: &Value, context: &str) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            PulseError::Parse(format!("record {context} is not a JSON object"))
        })?;

        let get_string = |field: &str| -> Result<String> {
            obj.get(field)
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .ok_or_else(|| PulseError::MissingField {
                    field: field.to_string(),
                    record: context.to_string(),
                })
        };

        let get_number = |field: &str| -> Result<f64> {
            obj.get(field)
                .and_then(Value::as_f64)
                .ok_or_else(|| PulseError::MissingField {
                    field: field.to_string(),
                    record: context.to_string(),
                })
        };

        let record_id = RecordId::new(get_string("Record_ID")?)
            .map_err(|e| PulseError::Parse(format!("record {context}: {e}")))?;
        let patient_id = PatientId::new(get_string("Patient_ID")?)
            .map_err(|e| PulseError::Parse(format!("record {context}: {e}")))?;

        Ok(Self {
            record_id,
            patient_id,
            first_name: get_string("First_Name")?,
            last_name: get_string("Last_Name")?,
            dob: get_string("DOB")?,
            check_in_date: get_string("Check_In_Date")?,
            record_timestamp: get_string("Record_Timestamp")?,
            systolic_bp: get_number("Systolic_BP")?,
            diastolic_bp: get_number("Diastolic_BP")?,
            heart_rate: get_number("Heart_Rate")?,
            body_temperature: get_number("Body_Temperature")?,
            blood_oxygen: get_number("Blood_Oxygen")?,
            blood_sugar: get_number("Blood_Sugar")?,
        })
    }
}

/// Parses a batch payload (JSON array of flat objects) into raw records
///
/// A payload that is not a JSON array is a `Parse` error; a record missing a
/// required field fails the whole batch with `MissingField`. There is no
/// per-record isolation inside a batch.
pub fn parse_batch(bytes: &[u8]) -> Result<Vec<VitalRecord>> {
    let values: Vec<Value> = serde_json::from_slice(bytes)
        .map_err(|e| PulseError::Parse(format!("batch payload is not a JSON array: {e}")))?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let context = value
            .get("Record_ID")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{index}"));
        records.push(VitalRecord::from_value(value, &context)?);
    }

    Ok(records)
}

/// A vital-sign reading annotated with its five clinical evaluations
///
/// Immutable once produced by the batch evaluator; both sinks receive
/// read-only views and never retain references across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRecord {
    #[serde(flatten)]
    pub record: VitalRecord,
    #[serde(rename = "BP_evaluation")]
    pub bp_evaluation: BloodPressureCategory,
    #[serde(rename = "Heart_Rate_Eval")]
    pub heart_rate_eval: VitalCategory,
    #[serde(rename = "Blood_Sugar_Eval")]
    pub blood_sugar_eval: VitalCategory,
    #[serde(rename = "Blood_Oxygen_Eval")]
    pub blood_oxygen_eval: VitalCategory,
    #[serde(rename = "Body_Temp_Eval")]
    pub body_temp_eval: VitalCategory,
}

impl EvaluatedRecord {
    /// The underlying record's identifier
    pub fn record_id(&self) -> &RecordId {
        &self.record.record_id
    }
}
