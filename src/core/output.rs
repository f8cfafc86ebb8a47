use crate::domain::model::{LicencePlate, Number, Operation};
use crate::utils::error::Result;
use serde::{Serialize, Serializer};

#[derive(Debug, Serialize)]
struct CalcReport {
    operation: Operation,
    #[serde(serialize_with = "serialize_result")]
    result: Number,
}

/// JSON has no inf/NaN, so non-finite floats are written as the strings `inf`, `-inf`, `NaN`.
fn serialize_result<S: Serializer>(
    result: &Number,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match *result {
        Number::Float(v) if !v.is_finite() => serializer.serialize_str(&result.to_string()),
        _ => result.serialize(serializer),
    }
}

#[derive(Debug, Serialize)]
struct PlateReport<'a> {
    plate: &'a LicencePlate,
    stolen: bool,
}

pub fn render_calc(operation: Operation, result: Number, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&CalcReport { operation, result })?)
    } else {
        Ok(result.to_string())
    }
}

pub fn render_plate(plate: &LicencePlate, stolen: bool, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&PlateReport { plate, stolen })?)
    } else if stolen {
        Ok("stolen".to_string())
    } else {
        Ok("not stolen".to_string())
    }
}
