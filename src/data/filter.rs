use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelector};
use super::series::{ScatterPoint, ScatterSeries};

pub const SCATTER_TITLE: &str = "Payload Mass vs. Success Rate by Booster Version Category";
pub const SCATTER_X_LABEL: &str = "Payload Mass";
pub const SCATTER_Y_LABEL: &str = "Success Rate";

// ---------------------------------------------------------------------------
// Row predicate
// ---------------------------------------------------------------------------

/// Whether a launch belongs in the scatter view.
///
/// With `All` the payload range is not consulted at all: every launch is
/// shown. A specific site applies both the site match and the inclusive
/// payload range.
pub fn passes(record: &LaunchRecord, site: &SiteSelector, range: &PayloadRange) -> bool {
    match site {
        SiteSelector::All => true,
        SiteSelector::Site(name) => record.site == *name && range.contains(record.payload_mass),
    }
}

// ---------------------------------------------------------------------------
// Scatter series
// ---------------------------------------------------------------------------

/// Build the payload-vs-outcome scatter series for the given parameters.
pub fn scatter_series(
    dataset: &LaunchDataset,
    site: &SiteSelector,
    range: &PayloadRange,
) -> ScatterSeries {
    let points = dataset
        .records()
        .iter()
        .filter(|rec| passes(rec, site, range))
        .map(|rec| ScatterPoint {
            x: rec.payload_mass,
            y: rec.outcome.as_u8(),
            color: rec.booster_category.clone(),
        })
        .collect();

    ScatterSeries {
        title: SCATTER_TITLE.to_string(),
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::scenario;
    use crate::data::model::Outcome;

    fn site(name: &str) -> SiteSelector {
        SiteSelector::Site(name.to_string())
    }

    #[test]
    fn test_site_and_range_filter() {
        let ds = scenario();
        let series = scatter_series(&ds, &site("A"), &PayloadRange::new(0.0, 1000.0));
        assert_eq!(
            series.points,
            vec![ScatterPoint {
                x: 500.0,
                y: 1,
                color: "v1.0".to_string(),
            }]
        );
        assert_eq!(series.title, SCATTER_TITLE);
    }

    #[test]
    fn test_all_sites_ignores_range() {
        let ds = scenario();
        let series = scatter_series(&ds, &SiteSelector::All, &PayloadRange::new(0.0, 1000.0));
        assert_eq!(series.len(), ds.len());
        let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![500.0, 1500.0, 800.0]);

        let series = scatter_series(&ds, &SiteSelector::All, &PayloadRange::new(9.0, 1.0));
        assert_eq!(series.len(), ds.len());
    }

    #[test]
    fn test_range_is_inclusive() {
        let ds = scenario();
        let series = scatter_series(&ds, &site("A"), &PayloadRange::new(500.0, 1500.0));
        assert_eq!(series.len(), 2);
        let series = scatter_series(&ds, &site("A"), &PayloadRange::new(500.0, 500.0));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_inverted_range_and_unknown_site_are_empty() {
        let ds = scenario();
        assert!(scatter_series(&ds, &site("A"), &PayloadRange::new(1500.0, 500.0)).is_empty());
        assert!(scatter_series(&ds, &site("Z"), &ds.payload_bounds()).is_empty());
    }

    #[test]
    fn test_soundness_and_completeness() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 0.0, Outcome::Success, "FT"),
            LaunchRecord::new("B", 2500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("A", 2500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("A", 2500.1, Outcome::Success, "B4"),
            LaunchRecord::new("A", 1999.9, Outcome::Success, "B5"),
            LaunchRecord::new("A", 2000.0, Outcome::Failure, "FT"),
        ])
        .unwrap();
        let range = PayloadRange::new(2000.0, 2500.0);
        let sel = site("A");

        let series = scatter_series(&ds, &sel, &range);
        let expected: Vec<f64> = ds
            .records()
            .iter()
            .filter(|r| r.site == "A" && range.contains(r.payload_mass))
            .map(|r| r.payload_mass)
            .collect();
        let got: Vec<f64> = series.points.iter().map(|p| p.x).collect();
        assert_eq!(got, expected);
        assert_eq!(got, vec![2500.0, 2000.0]);
        assert_eq!(series.points[0].color, "v1.1");
        assert_eq!(series.points[0].y, 0);
    }

    #[test]
    fn test_repeat_calls_are_equal() {
        let ds = scenario();
        let range = ds.payload_bounds();
        assert_eq!(
            scatter_series(&ds, &site("B"), &range),
            scatter_series(&ds, &site("B"), &range)
        );
    }
}
