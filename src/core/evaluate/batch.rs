//! Batch evaluation
//!
//! Applies the rule engine to every record in a batch, producing a fully
//! annotated batch. Evaluators run in a fixed order per record: blood
//! pressure, heart rate, blood sugar, blood oxygen, body temperature.
//! Record order is preserved and no records are dropped. A record that
//! cannot be evaluated fails the whole batch; there is no per-record
//! isolation inside a batch.

use crate::core::evaluate::rules;
use crate::domain::record::{EvaluatedRecord, VitalRecord};
use crate::domain::result::Result;

/// Evaluates every record in a batch
pub fn evaluate_batch(records: Vec<VitalRecord>) -> Result<Vec<EvaluatedRecord>> {
    let mut evaluated = Vec::with_capacity(records.len());

    for record in records {
        evaluated.push(evaluate_record(record)?);
    }

    Ok(evaluated)
}

/// Evaluates a single record through all five rule evaluators
pub fn evaluate_record(record: VitalRecord) -> Result<EvaluatedRecord> {
    let bp_evaluation = rules::evaluate_blood_pressure(&record)?;
    let heart_rate_eval = rules::evaluate_heart_rate(&record);
    let blood_sugar_eval = rules::evaluate_blood_sugar(&record);
    let blood_oxygen_eval = rules::evaluate_blood_oxygen(&record);
    let body_temp_eval = rules::evaluate_body_temperature(&record);

    Ok(EvaluatedRecord {
        record,
        bp_evaluation,
        heart_rate_eval,
        blood_sugar_eval,
        blood_oxygen_eval,
        body_temp_eval,
    })
}
