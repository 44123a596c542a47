// File: crates/epichart-core/tests/pivot.rs
// Purpose: Validate long-to-wide pivoting and accessor-driven week lookups.

use anyhow::Result;
use epichart_core::{build_wide_rows, find_week, find_week_end, normalize, NormalizedRow, Observation};

fn obs(epiweek: u32, name: &str, value: f64, start: &str, end: &str) -> Observation {
    Observation {
        epiweek,
        name: name.to_string(),
        mean_lineage_prevalence: value,
        week_start: start.to_string(),
        week_end: end.to_string(),
        geo_loc_region: "Quebec".to_string(),
    }
}

fn week_of(r: &NormalizedRow) -> u32 {
    r.epiweek
}
fn week_start_of(r: &NormalizedRow) -> &str {
    &r.week_start
}
fn week_end_of(r: &NormalizedRow) -> &str {
    &r.week_end
}
fn label_of(r: &NormalizedRow) -> &str {
    &r.name
}
fn value_of(r: &NormalizedRow) -> f64 {
    r.mean_lineage_prevalence
}

#[test]
fn one_wide_row_per_week_with_every_category() {
    // Normalizer output for {A, B} over three weeks (week 2 gap-filled).
    let input = vec![
        obs(202401, "A", 0.6, "2024-01-01", "2024-01-07"),
        obs(202401, "B", 0.4, "2024-01-01", "2024-01-07"),
        obs(202403, "A", 0.8, "2024-01-15", "2024-01-21"),
    ];
    let norm = normalize(&input).unwrap();
    let wide = build_wide_rows(
        &norm.rows,
        &norm.categories,
        week_of,
        week_start_of,
        week_end_of,
        label_of,
        value_of,
    );

    assert_eq!(wide.len(), 3);
    for row in &wide {
        assert!(row.values.contains_key("A"), "missing A in week {}", row.epiweek);
        assert!(row.values.contains_key("B"), "missing B in week {}", row.epiweek);
    }
    assert_eq!(wide[0].epiweek, 202401);
    assert_eq!(wide[0].values["A"], 0.6);
    assert_eq!(wide[0].values["B"], 0.4);
    // Gap-filled week pivots to all zeros.
    assert_eq!(wide[1].values["A"], 0.0);
    assert_eq!(wide[1].values["B"], 0.0);
    assert_eq!(wide[2].values["A"], 0.8);
    assert_eq!(wide[2].values["B"], 0.0);
}

#[test]
fn weeks_appear_in_first_encountered_order() {
    let rows = vec![
        obs(202403, "A", 0.3, "2024-01-15", "2024-01-21"),
        obs(202401, "A", 0.1, "2024-01-01", "2024-01-07"),
        obs(202403, "B", 0.7, "2024-01-15", "2024-01-21"),
    ];
    let categories = vec!["A".to_string(), "B".to_string()];
    let wide = build_wide_rows(
        &rows,
        &categories,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_start.as_str(),
        |r: &Observation| r.week_end.as_str(),
        |r: &Observation| r.name.as_str(),
        |r: &Observation| r.mean_lineage_prevalence,
    );
    let weeks: Vec<u32> = wide.iter().map(|w| w.epiweek).collect();
    assert_eq!(weeks, vec![202403, 202401]);
}

#[test]
fn duplicate_pairs_last_write_wins() {
    let rows = vec![
        obs(202401, "A", 0.1, "2024-01-01", "2024-01-07"),
        obs(202401, "A", 0.9, "2024-01-01", "2024-01-07"),
    ];
    let categories = vec!["A".to_string()];
    let wide = build_wide_rows(
        &rows,
        &categories,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_start.as_str(),
        |r: &Observation| r.week_end.as_str(),
        |r: &Observation| r.name.as_str(),
        |r: &Observation| r.mean_lineage_prevalence,
    );
    assert_eq!(wide.len(), 1);
    assert_eq!(wide[0].values["A"], 0.9);
}

#[test]
fn labels_outside_the_category_set_pass_through() {
    let rows = vec![obs(202401, "Stray", 0.5, "2024-01-01", "2024-01-07")];
    let categories = vec!["A".to_string()];
    let wide = build_wide_rows(
        &rows,
        &categories,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_start.as_str(),
        |r: &Observation| r.week_end.as_str(),
        |r: &Observation| r.name.as_str(),
        |r: &Observation| r.mean_lineage_prevalence,
    );
    assert_eq!(wide[0].values["A"], 0.0);
    assert_eq!(wide[0].values["Stray"], 0.5);
}

#[test]
fn wide_row_serializes_with_flattened_categories() -> Result<()> {
    let rows = vec![
        obs(202401, "A", 0.6, "2024-01-01", "2024-01-07"),
        obs(202401, "B", 0.4, "2024-01-01", "2024-01-07"),
    ];
    let categories = vec!["A".to_string(), "B".to_string()];
    let wide = build_wide_rows(
        &rows,
        &categories,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_start.as_str(),
        |r: &Observation| r.week_end.as_str(),
        |r: &Observation| r.name.as_str(),
        |r: &Observation| r.mean_lineage_prevalence,
    );
    let json = serde_json::to_value(&wide[0])?;
    assert_eq!(json["epiweek"], 202401);
    assert_eq!(json["week_start"], "2024-01-01");
    assert_eq!(json["week_end"], "2024-01-07");
    assert_eq!(json["A"], 0.6);
    assert_eq!(json["B"], 0.4);
    Ok(())
}

#[test]
fn category_keys_serialize_in_first_seen_order() -> Result<()> {
    // "Zeta" is seen before "Alpha"; the wire shape must keep that order,
    // not sort the keys.
    let rows = vec![
        obs(202401, "Zeta", 0.7, "2024-01-01", "2024-01-07"),
        obs(202401, "Alpha", 0.3, "2024-01-01", "2024-01-07"),
    ];
    let categories = vec!["Zeta".to_string(), "Alpha".to_string()];
    let wide = build_wide_rows(
        &rows,
        &categories,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_start.as_str(),
        |r: &Observation| r.week_end.as_str(),
        |r: &Observation| r.name.as_str(),
        |r: &Observation| r.mean_lineage_prevalence,
    );
    let json = serde_json::to_value(&wide[0])?;
    let keys: Vec<&str> = json
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("wide row did not serialize to an object"))?
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["epiweek", "week_start", "week_end", "Zeta", "Alpha"]);
    Ok(())
}

#[test]
fn week_lookups_resolve_in_both_directions() {
    let rows = vec![
        obs(202401, "A", 0.6, "2024-01-01", "2024-01-07"),
        obs(202402, "A", 0.2, "2024-01-08", "2024-01-14"),
    ];
    let end = find_week_end(
        202402,
        &rows,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_end.as_str(),
    );
    assert_eq!(end, Some("2024-01-14"));

    let week = find_week(
        "2024-01-07",
        &rows,
        |r: &Observation| r.epiweek,
        |r: &Observation| r.week_end.as_str(),
    );
    assert_eq!(week, Some(202401));

    assert_eq!(
        find_week_end(
            209901,
            &rows,
            |r: &Observation| r.epiweek,
            |r: &Observation| r.week_end.as_str(),
        ),
        None
    );
}
