// File: crates/epichart-core/src/epiweek.rs
// Summary: Epiweek arithmetic and week-grid completion over sparse observations.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};

/// Composite `year * 100 + weekIndex` identifier, e.g. `202107`.
pub type WeekId = u32;

/// Per-week metadata carried alongside a week identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekInfo {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub geo_loc_region: String,
}

/// Week identifier for a calendar date.
///
/// Bucketing standard: weeks are counted from January 1st of the date's year
/// in plain 7-day strides (`weekIndex = dayOfYear / 7 + 1`, day-of-year
/// zero-based). This is deliberately NOT ISO-8601 or MMWR week numbering;
/// buckets reset at each January 1st, so the last bucket of a year may cover
/// fewer than 7 days. Years before 1 CE are outside the supported range.
pub fn epiweek_of(date: NaiveDate) -> WeekId {
    let week = date.ordinal0() / 7 + 1;
    date.year() as WeekId * 100 + week
}

/// Middot-separated display label for a week identifier, e.g. `2021·07`.
pub fn format_epiweek_label(week: WeekId) -> String {
    let digits = week.to_string();
    let split = digits.len().min(4);
    format!("{}\u{00B7}{}", &digits[..split], &digits[split..])
}

/// The unbroken ascending sequence of week identifiers between the earliest
/// and latest observed week, with metadata for every identifier in range.
#[derive(Debug, Clone, Default)]
pub struct WeekGrid {
    ids: Vec<WeekId>,
    info: BTreeMap<WeekId, WeekInfo>,
}

impl WeekGrid {
    /// Fill the gaps in a sparse set of observed weeks.
    ///
    /// Walks forward from the earliest observed week's start date in fixed
    /// 7-day strides through the latest observed week's end date, never
    /// backward. Week identifiers not present in `observed` get synthesized
    /// metadata: end = start + 6 days, region inherited from `default_region`.
    pub fn complete(observed: BTreeMap<WeekId, WeekInfo>, default_region: &str) -> Self {
        let (first, last) = match (observed.keys().next(), observed.keys().next_back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Self::default(),
        };
        let walk_start = observed[&first].week_start;
        let walk_end = observed[&last].week_end;

        let mut info = observed;
        let mut ids = BTreeSet::new();
        let mut cursor = walk_start;
        while cursor <= walk_end {
            let id = epiweek_of(cursor);
            info.entry(id).or_insert_with(|| WeekInfo {
                week_start: cursor,
                week_end: cursor + Days::new(6),
                geo_loc_region: default_region.to_string(),
            });
            ids.insert(id);
            cursor = match cursor.checked_add_days(Days::new(7)) {
                Some(next) => next,
                None => break,
            };
        }
        Self {
            ids: ids.into_iter().collect(),
            info,
        }
    }

    /// Ascending, duplicate-free week identifiers covered by the grid.
    pub fn week_ids(&self) -> &[WeekId] {
        &self.ids
    }

    pub fn get(&self, id: WeekId) -> Option<&WeekInfo> {
        self.info.get(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
