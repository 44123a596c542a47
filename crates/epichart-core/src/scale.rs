// File: crates/epichart-core/src/scale.rs
// Summary: Multiplicative value scaling over nested per-series JSON data points.

use serde_json::{Map, Value};

use crate::diag::Diagnostics;
use crate::error::{AccessorError, ValidationError};

/// Field extractor for one data point. Contract: pure, no side effects, total
/// over the point type; failures are reported via `Err`, not panics.
pub type PointAccessor<'a> = &'a dyn Fn(&Map<String, Value>) -> Result<Value, AccessorError>;

/// Scale selected numeric fields of every data point by `factor`.
///
/// Each series element must be a JSON object carrying a `data` array of point
/// objects; everything else about the element is passed through untouched.
/// For each point, each accessor supplies a value; a numeric value selects
/// the FIRST key of the point whose current value compares equal (object
/// insertion order) and the product is written into a shallow copy. Matching
/// always reads the original point, so accessors that resolve to the same
/// field do not compound.
///
/// Accessor failures and non-numeric values are reported to `diag` and that
/// field is skipped; scaling of the remaining fields and points continues.
pub fn scale_values(
    series: &[Value],
    factor: f64,
    accessors: &[PointAccessor<'_>],
    diag: &dyn Diagnostics,
) -> Result<Vec<Value>, ValidationError> {
    if series.is_empty() {
        return Err(ValidationError::EmptySeries);
    }
    if accessors.is_empty() {
        return Err(ValidationError::NoAccessors);
    }

    // Shape check first so nothing is scaled when any block is malformed.
    let mut blocks: Vec<(&Map<String, Value>, &Vec<Value>)> = Vec::with_capacity(series.len());
    for (i, block) in series.iter().enumerate() {
        let obj = block
            .as_object()
            .ok_or(ValidationError::MalformedSeries(i))?;
        let points = match obj.get("data") {
            Some(Value::Array(points)) => points,
            _ => return Err(ValidationError::MalformedSeries(i)),
        };
        blocks.push((obj, points));
    }

    let mut out = Vec::with_capacity(blocks.len());
    for (obj, points) in blocks {
        let scaled: Vec<Value> = points
            .iter()
            .map(|p| scale_point(p, factor, accessors, diag))
            .collect();
        let mut block = obj.clone();
        block.insert("data".to_string(), Value::Array(scaled));
        out.push(Value::Object(block));
    }
    Ok(out)
}

fn scale_point(
    point: &Value,
    factor: f64,
    accessors: &[PointAccessor<'_>],
    diag: &dyn Diagnostics,
) -> Value {
    let Some(original) = point.as_object() else {
        diag.warn("data point is not an object; left unscaled");
        return point.clone();
    };

    let mut scaled = original.clone();
    for accessor in accessors {
        let value = match accessor(original) {
            Ok(value) => value,
            Err(err) => {
                diag.warn(&format!("accessor failed for data point: {err}"));
                continue;
            }
        };
        let Some(number) = value.as_f64() else {
            diag.warn("accessor returned a non-numeric value; field left unscaled");
            continue;
        };

        // First key whose current value compares equal, in insertion order.
        let key = original
            .iter()
            .find(|(_, v)| v.as_f64() == Some(number))
            .map(|(k, _)| k.clone());
        let Some(key) = key else { continue };

        match serde_json::Number::from_f64(number * factor) {
            Some(product) => {
                scaled.insert(key, Value::Number(product));
            }
            None => diag.warn("scaled value is not representable; field left unscaled"),
        }
    }
    Value::Object(scaled)
}
