// File: crates/epichart-core/src/normalize.rs
// Summary: Gap-filling normalizer turning sparse weekly observations into a rectangular grid.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_range::parse_day;
use crate::epiweek::{WeekGrid, WeekId, WeekInfo};
use crate::error::ValidationError;

/// One reported prevalence value for a (week, category) pair. Field names are
/// wire-stable; downstream chart components bind to them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub epiweek: WeekId,
    pub name: String,
    pub mean_lineage_prevalence: f64,
    pub week_start: String,
    pub week_end: String,
    pub geo_loc_region: String,
}

/// Observation-shaped output row with a derived, parsed week-end date.
/// Synthesized rows carry a prevalence of 0.0 and week-grid metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub epiweek: WeekId,
    pub name: String,
    pub mean_lineage_prevalence: f64,
    pub week_start: String,
    pub week_end: String,
    pub geo_loc_region: String,
    pub week_end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSeries {
    pub rows: Vec<NormalizedRow>,
    pub categories: Vec<String>,
}

/// Fill a sparse long-format series so every (week, category) pair in range
/// is present exactly once.
///
/// Output rows are sorted ascending by week identifier; within a week,
/// categories appear in first-seen input order. Cardinality is always
/// `weeks-in-range x distinct-categories`. Empty input yields an empty
/// result without error. Malformed `week_start`/`week_end` strings are
/// rejected up front.
pub fn normalize(observations: &[Observation]) -> Result<NormalizedSeries, ValidationError> {
    if observations.is_empty() {
        return Ok(NormalizedSeries::default());
    }

    // Distinct categories, first-seen order.
    let mut categories: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for obs in observations {
        if seen.insert(obs.name.as_str()) {
            categories.push(obs.name.clone());
        }
    }

    // Per-week metadata keyed by week id; later input entries overwrite
    // earlier ones for the same week.
    let mut observed: BTreeMap<WeekId, WeekInfo> = BTreeMap::new();
    for obs in observations {
        observed.insert(
            obs.epiweek,
            WeekInfo {
                week_start: parse_day(&obs.week_start)?,
                week_end: parse_day(&obs.week_end)?,
                geo_loc_region: obs.geo_loc_region.clone(),
            },
        );
    }

    let grid = WeekGrid::complete(observed, &observations[0].geo_loc_region);

    let mut existing: HashMap<(WeekId, &str), &Observation> = HashMap::new();
    for obs in observations {
        existing.insert((obs.epiweek, obs.name.as_str()), obs);
    }

    let mut rows = Vec::with_capacity(grid.len() * categories.len());
    for &week in grid.week_ids() {
        let Some(info) = grid.get(week) else { continue };
        for name in &categories {
            match existing.get(&(week, name.as_str())) {
                Some(obs) => rows.push(NormalizedRow {
                    epiweek: obs.epiweek,
                    name: obs.name.clone(),
                    mean_lineage_prevalence: obs.mean_lineage_prevalence,
                    week_start: obs.week_start.clone(),
                    week_end: obs.week_end.clone(),
                    geo_loc_region: obs.geo_loc_region.clone(),
                    week_end_date: parse_day(&obs.week_end)?,
                }),
                None => rows.push(NormalizedRow {
                    epiweek: week,
                    name: name.clone(),
                    mean_lineage_prevalence: 0.0,
                    week_start: info.week_start.format("%Y-%m-%d").to_string(),
                    week_end: info.week_end.format("%Y-%m-%d").to_string(),
                    geo_loc_region: info.geo_loc_region.clone(),
                    week_end_date: info.week_end,
                }),
            }
        }
    }

    Ok(NormalizedSeries { rows, categories })
}
