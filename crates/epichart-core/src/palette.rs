// File: crates/epichart-core/src/palette.rs
// Summary: Curated colorblind-safe palette selection keyed by category count.

/// Label of the aggregate bucket that always takes the neutral grey slot.
pub const OTHER_LABEL: &str = "Other";

// Curated sequences; hand-vetted for distinguishability under common
// color-vision deficiencies. Lookup only, never generated or interpolated.
// When "Other" is present its grey sits last.
const WITH_OTHER: [&[&str]; 10] = [
    &["#b8b8b8"],
    &["#1a80bb", "#b8b8b8"],
    &["#1a80bb", "#ea801c", "#b8b8b8"],
    &["#4a2377", "#f55f74", "#0d7087", "#b8b8b8"],
    &["#082a54", "#e02b35", "#59a89c", "#a559aa", "#b8b8b8"],
    &["#082a54", "#e02b35", "#59a89c", "#a559aa", "#f0c571", "#e8e8e8"],
    &["#4477aa", "#66ccee", "#228833", "#ccbb44", "#ee6677", "#aa3377", "#bbbbbb"],
    &["#88ccee", "#cc6677", "#117733", "#ddcc77", "#882255", "#44aa99", "#999933", "#dddddd"],
    &["#332288", "#cc6677", "#ddcc77", "#117733", "#88ccee", "#882255", "#44aa99", "#999933", "#dddddd"],
    // default for 10+ categories
    &["#332288", "#cc6677", "#ddcc77", "#117733", "#88ccee", "#882255", "#44aa99", "#999933", "#aa4499", "#dddddd"],
];

const WITHOUT_OTHER: [&[&str]; 10] = [
    &["#1a80bb"],
    &["#1a80bb", "#ea801c"],
    &["#0f2080", "#f5793a", "#85c0f9"],
    &["#8cc5e3", "#f55f74", "#4a2377", "#0d7087"],
    &["#082a54", "#e02b35", "#f0c571", "#59a89c", "#a559aa"],
    &["#4477aa", "#66ccee", "#228833", "#ccbb44", "#ee6677", "#aa3377"],
    &["#88ccee", "#cc6677", "#117733", "#ddcc77", "#882255", "#44aa99", "#999933"],
    &["#88ccee", "#cc6677", "#117733", "#ddcc77", "#882255", "#44aa99", "#999933", "#aa4499"],
    &["#332288", "#cc6677", "#ddcc77", "#117733", "#88ccee", "#882255", "#44aa99", "#999933", "#aa4499"],
    // default for 10+ categories
    &["#332288", "#cc6677", "#ddcc77", "#117733", "#88ccee", "#882255", "#44aa99", "#999933", "#aa4499", "#dddddd"],
];

/// Pick the color sequence for a set of category labels.
///
/// Pure table lookup on category count, with a parallel table when the
/// designated "Other" aggregate is present. Identical inputs always yield
/// the identical sequence. Callers are expected to order "Other" last so it
/// lines up with its grey slot.
pub fn select_palette<S: AsRef<str>>(labels: &[S]) -> Vec<&'static str> {
    let has_other = labels.iter().any(|l| l.as_ref() == OTHER_LABEL);
    let table = if has_other { &WITH_OTHER } else { &WITHOUT_OTHER };
    let slot = match labels.len() {
        1..=9 => labels.len() - 1,
        _ => 9,
    };
    table[slot].to_vec()
}
