// File: crates/epichart-core/src/ticks.rs
// Summary: Adaptive x-axis tick decimation by tick count and rendering width.

/// One tier of the decimation table: applies when the tick count exceeds
/// `min_ticks`, with stride chosen by width breakpoint. `w400` only exists in
/// the base tier; other tiers fall through to `fallback` below 550px.
struct Tier {
    min_ticks: usize,
    w700: usize,
    w550: usize,
    w400: Option<usize>,
    fallback: usize,
}

const TIERS: [Tier; 4] = [
    Tier { min_ticks: 270, w700: 60, w550: 90, w400: None, fallback: 210 },
    Tier { min_ticks: 210, w700: 30, w550: 60, w400: None, fallback: 90 },
    Tier { min_ticks: 120, w700: 21, w550: 30, w400: None, fallback: 60 },
    Tier { min_ticks: 0, w700: 14, w550: 21, w400: Some(30), fallback: 45 },
];

/// Select the decimation stride for `count` ticks at the given width.
fn stride_for(count: usize, width: f64) -> usize {
    let tier = TIERS
        .iter()
        .find(|t| count > t.min_ticks)
        .unwrap_or(&TIERS[3]);
    let stride = if width > 700.0 {
        tier.w700
    } else if width > 550.0 {
        tier.w550
    } else if width > 400.0 {
        tier.w400.unwrap_or(tier.fallback)
    } else {
        tier.fallback
    };
    // The table never holds a zero, but a degenerate stride must not panic.
    stride.max(1)
}

/// Keep every `stride`-th tick (indices 0, stride, 2*stride, ...), preserving
/// input order. Output is always a subsequence of the input; the first tick
/// is always kept.
pub fn filter_x_ticks<T: Clone>(ticks: &[T], width: f64) -> Vec<T> {
    if ticks.is_empty() {
        return Vec::new();
    }
    let stride = stride_for(ticks.len(), width);
    ticks.iter().step_by(stride).cloned().collect()
}
