// File: crates/epichart-core/src/lib.rs
// Summary: Core library entry point; exports the chart data-preparation API.

pub mod date_range;
pub mod diag;
pub mod epiweek;
pub mod error;
pub mod normalize;
pub mod palette;
pub mod pivot;
pub mod scale;
pub mod theme;
pub mod ticks;

pub use date_range::{date_range, DayValue};
pub use diag::{CollectDiagnostics, Diagnostics, LogDiagnostics, NullDiagnostics};
pub use epiweek::{epiweek_of, format_epiweek_label, WeekGrid, WeekId, WeekInfo};
pub use error::{AccessorError, ValidationError};
pub use normalize::{normalize, NormalizedRow, NormalizedSeries, Observation};
pub use palette::{select_palette, OTHER_LABEL};
pub use pivot::{build_wide_rows, find_week, find_week_end, WideRow};
pub use scale::{scale_values, PointAccessor};
pub use ticks::filter_x_ticks;
