// File: crates/epichart-core/src/pivot.rs
// Summary: Long-to-wide pivot for stacked rendering, plus accessor-driven lookups.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::epiweek::WeekId;

/// One record per week with one numeric field per category. The category map
/// is flattened on serialization so consumers see `{ epiweek, week_start,
/// week_end, <category>: value, ... }`. Insertion order is kept, so category
/// keys come out in first-seen order, not alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideRow {
    pub epiweek: WeekId,
    pub week_start: String,
    pub week_end: String,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

/// Reshape long-format rows into one `WideRow` per distinct week identifier,
/// in first-encountered order.
///
/// Field extraction goes through accessor closures so the pivot is not tied
/// to a fixed field-naming convention. Every category in `categories` is
/// pre-seeded to 0.0 and then overwritten by the row's actual value; labels
/// outside `categories` are passed through, not rejected. Duplicate (week,
/// category) pairs are not deduplicated; the last write wins.
pub fn build_wide_rows<R>(
    rows: &[R],
    categories: &[String],
    week_of: impl Fn(&R) -> WeekId,
    week_start_of: impl Fn(&R) -> &str,
    week_end_of: impl Fn(&R) -> &str,
    label_of: impl Fn(&R) -> &str,
    value_of: impl Fn(&R) -> f64,
) -> Vec<WideRow> {
    let mut index: HashMap<WeekId, usize> = HashMap::new();
    let mut out: Vec<WideRow> = Vec::new();

    for row in rows {
        let week = week_of(row);
        let slot = *index.entry(week).or_insert_with(|| {
            out.push(WideRow {
                epiweek: week,
                week_start: week_start_of(row).to_string(),
                week_end: week_end_of(row).to_string(),
                values: categories.iter().map(|c| (c.clone(), 0.0)).collect(),
            });
            out.len() - 1
        });
        out[slot]
            .values
            .insert(label_of(row).to_string(), value_of(row));
    }

    out
}

/// Week-end label of the first row matching `week`, if any.
pub fn find_week_end<'a, R>(
    week: WeekId,
    rows: &'a [R],
    week_of: impl Fn(&R) -> WeekId,
    week_end_of: impl Fn(&'a R) -> &'a str,
) -> Option<&'a str> {
    rows.iter().find(|r| week_of(r) == week).map(week_end_of)
}

/// Week identifier of the first row matching `week_end`, if any.
pub fn find_week<R>(
    week_end: &str,
    rows: &[R],
    week_of: impl Fn(&R) -> WeekId,
    week_end_of: impl Fn(&R) -> &str,
) -> Option<WeekId> {
    rows.iter().find(|r| week_end_of(r) == week_end).map(|r| week_of(r))
}
