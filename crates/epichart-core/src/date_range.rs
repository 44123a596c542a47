// File: crates/epichart-core/src/date_range.rs
// Summary: Consecutive calendar-day sequence generator (full range and sliding window).

use chrono::{Days, NaiveDate};

use crate::error::ValidationError;

/// Calendar-day bound accepted either as a structured date or as a strict
/// `YYYY-MM-DD` string. Any time-of-day component is out of the picture by
/// construction; comparisons happen at day granularity.
#[derive(Debug, Clone)]
pub enum DayValue {
    Date(NaiveDate),
    Iso(String),
}

impl From<NaiveDate> for DayValue {
    fn from(d: NaiveDate) -> Self {
        DayValue::Date(d)
    }
}

impl From<&str> for DayValue {
    fn from(s: &str) -> Self {
        DayValue::Iso(s.to_string())
    }
}

impl From<String> for DayValue {
    fn from(s: String) -> Self {
        DayValue::Iso(s)
    }
}

impl DayValue {
    fn resolve(&self) -> Result<NaiveDate, ValidationError> {
        match self {
            DayValue::Date(d) => Ok(*d),
            DayValue::Iso(s) => parse_day(s),
        }
    }
}

/// Strict `YYYY-MM-DD` parser used by every date-consuming component.
/// chrono accepts unpadded month/day fields, so the shape is checked first.
pub(crate) fn parse_day(s: &str) -> Result<NaiveDate, ValidationError> {
    let bad = || ValidationError::BadDate(s.to_string());
    if s.len() != 10 || s.as_bytes()[4] != b'-' || s.as_bytes()[7] != b'-' {
        return Err(bad());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| bad())
}

/// Inclusive sequence of `YYYY-MM-DD` labels from `start` to `end`, one per day.
///
/// Two modes:
/// - `window: None` requires an explicit `start`; reversed bounds are swapped
///   rather than rejected.
/// - `window: Some(n)` anchors the sequence at `end - (n - 1)` days; an
///   explicit `start` acts as a floor the window never extends past.
pub fn date_range(
    start: Option<DayValue>,
    end: impl Into<DayValue>,
    window: Option<usize>,
) -> Result<Vec<String>, ValidationError> {
    let mut end = end.into().resolve()?;
    let mut start = start.map(|s| s.resolve()).transpose()?;

    // Swap reversed bounds (only when both are explicit).
    if let Some(s) = start {
        if s > end {
            start = Some(end);
            end = s;
        }
    }

    if let Some(n) = window {
        if n < 1 {
            return Err(ValidationError::ZeroWindow);
        }
        let computed = end
            .checked_sub_days(Days::new(n as u64 - 1))
            .ok_or_else(|| ValidationError::BadDate(end.to_string()))?;
        start = Some(match start {
            Some(floor) => floor.max(computed),
            None => computed,
        });
    }

    let start = start.ok_or(ValidationError::MissingStart)?;

    let mut out = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        out.push(cursor.format("%Y-%m-%d").to_string());
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(out)
}
