//! End-to-end view tests
//!
//! Load a launch table from disk, drive the parameter state and check both
//! derived views:
//! - distribution counts add up to the selected launches
//! - the ALL scatter ignores the payload range
//! - a site scatter is exactly the site launches inside the range

use std::io::Write;
use std::path::PathBuf;

use launch_dash::data::aggregate::success_distribution;
use launch_dash::data::filter::scatter_series;
use launch_dash::data::loader::load_file;
use launch_dash::data::model::{LaunchDataset, Outcome, PayloadRange, SiteSelector};
use launch_dash::state::{recompute, AppState, Parameters};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const LAUNCHES: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0.0,v1.0
2,CCAFS LC-40,0,525.0,v1.0
3,CCAFS LC-40,1,677.0,v1.0
4,VAFB SLC-4E,0,500.0,v1.1
5,CCAFS LC-40,1,3170.0,v1.1
6,KSC LC-39A,1,2490.0,FT
7,KSC LC-39A,0,5300.0,FT
8,CCAFS SLC-40,1,9600.0,B4
9,KSC LC-39A,1,3600.0,B4
10,VAFB SLC-4E,1,9600.0,B5
";

fn write_table(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("spacex_launch_dash.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

fn load() -> (TempDir, LaunchDataset) {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, LAUNCHES);
    let ds = load_file(&path).unwrap();
    (dir, ds)
}

fn site(name: &str) -> SiteSelector {
    SiteSelector::Site(name.to_string())
}

// =============================================================================
// Distribution
// =============================================================================

/// Success counts per site, sorted by site name.
#[test]
fn test_all_sites_distribution() {
    let (_dir, ds) = load();
    let dist = success_distribution(&ds, &SiteSelector::All);
    assert_eq!(
        dist.pairs(),
        vec![
            ("CCAFS LC-40", 2),
            ("CCAFS SLC-40", 1),
            ("KSC LC-39A", 2),
            ("VAFB SLC-4E", 1),
        ]
    );
    let successes = ds
        .records()
        .iter()
        .filter(|r| r.outcome == Outcome::Success)
        .count();
    assert_eq!(dist.total(), successes);
}

/// Per-site counts cover every launch of that site.
#[test]
fn test_site_distribution_sums() {
    let (_dir, ds) = load();
    for name in ds.sites() {
        let dist = success_distribution(&ds, &site(name));
        let launches = ds.records().iter().filter(|r| &r.site == name).count();
        assert_eq!(dist.total(), launches, "site {name}");
    }
    assert_eq!(
        success_distribution(&ds, &site("CCAFS LC-40")).pairs(),
        vec![("0", 2), ("1", 2)]
    );
}

// =============================================================================
// Scatter
// =============================================================================

/// The ALL view shows every launch whatever the range.
#[test]
fn test_all_scatter_length() {
    let (_dir, ds) = load();
    for range in [
        PayloadRange::new(0.0, 1000.0),
        ds.payload_bounds(),
        PayloadRange::new(5000.0, 100.0),
    ] {
        assert_eq!(scatter_series(&ds, &SiteSelector::All, &range).len(), ds.len());
    }
}

/// Site view is sound and complete for the inclusive range.
#[test]
fn test_site_scatter_matches_predicate() {
    let (_dir, ds) = load();
    let range = PayloadRange::new(525.0, 3170.0);
    let series = scatter_series(&ds, &site("CCAFS LC-40"), &range);
    let got: Vec<(f64, u8, &str)> = series
        .points
        .iter()
        .map(|p| (p.x, p.y, p.color.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![(525.0, 0, "v1.0"), (677.0, 1, "v1.0"), (3170.0, 1, "v1.1")]
    );
}

// =============================================================================
// Parameter state
// =============================================================================

/// Driving the app state gives the same views as a direct recompute.
#[test]
fn test_app_state_matches_recompute() {
    let (_dir, ds) = load();
    let mut app = AppState::default();
    app.set_dataset(ds.clone());

    app.apply("KSC LC-39A", PayloadRange::new(2000.0, 4000.0))
        .unwrap();
    let expected = recompute(
        &ds,
        &Parameters {
            site: site("KSC LC-39A"),
            payload: PayloadRange::new(2000.0, 4000.0),
        },
    );
    assert_eq!(app.views(), Some(&expected));
    assert_eq!(expected.scatter.len(), 2);

    assert!(app.apply("Boca Chica", ds.payload_bounds()).is_err());
    assert_eq!(app.views(), Some(&expected));
}

/// Missing required column fails the whole load.
#[test]
fn test_missing_column_fails_load() {
    let dir = TempDir::new().unwrap();
    let path = write_table(&dir, "Launch Site,class\nA,1\n");
    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("Payload Mass (kg)"));
}
