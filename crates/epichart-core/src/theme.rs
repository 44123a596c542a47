// File: crates/epichart-core/src/theme.rs
// Summary: Shared color constants for chart-component consumers.

/// Fallback series color when no palette applies.
pub const DEFAULT_COLOR: &str = "#3498db";

/// Neutral color for aggregate/leftover groupings outside the curated
/// palettes (see `palette::select_palette` for the stacked-chart tables).
pub const OTHER_COLOR: &str = "#bab0ab";

/// ColorBrewer ramp name consumed by heatmap components.
pub const HEATMAP_COLOR_SCHEME: &str = "RdPu";

/// 20-color categorical cycle (paired dark/light hues).
pub const CATEGORICAL_20: [&str; 20] = [
    "#4E79A7", // dk blue
    "#aecBe8", // lt blue
    "#f28e2b", // orange
    "#FFBE7D", // lt. orange
    "#59a14f", // green
    "#8CD17D", // lt. green
    "#e15759", // red
    "#FF9D9A", // lt. red
    "#499894", // teal
    "#86BCB6", // lt. teal
    "#B6992D", // dk yellow
    "#F1CE63", // yellow
    "#D37295", // dk pink
    "#FABFD2", // lt. pink
    "#B07AA1", // dk purple
    "#D4A6C8", // lt. purple
    "#9D7660", // brown
    "#D7B5A6", // lt. brown
    "#bcbd22", // puce
    "#79706E", // grey
];

/// Discrete 11-step yellow-green-blue sequential ramp.
pub const YL_GN_BU_11: [&str; 11] = [
    "#ffffd9",
    "#eff9bd",
    "#d5eeb3",
    "#a9ddb7",
    "#73c9bd",
    "#45b4c2",
    "#2897bf",
    "#2073b2",
    "#234ea0",
    "#1c3185",
    "#081d58",
];
