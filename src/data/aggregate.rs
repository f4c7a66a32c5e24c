use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome, SiteSelector};
use super::series::{DistributionSlice, SuccessDistribution};

pub const ALL_SITES_TITLE: &str = "Success launches By Sites";

// ---------------------------------------------------------------------------
// Success distribution
// ---------------------------------------------------------------------------

/// Count launches for the distribution chart.
///
/// * `All`     – successful launches grouped by site, ascending site name.
/// * `Site(s)` – launches of `s` grouped by outcome, `"0"` before `"1"`.
///   A site with no launches gives an empty series.
pub fn success_distribution(dataset: &LaunchDataset, site: &SiteSelector) -> SuccessDistribution {
    match site {
        SiteSelector::All => {
            let mut per_site: BTreeMap<&str, usize> = BTreeMap::new();
            for rec in dataset
                .records()
                .iter()
                .filter(|r| r.outcome == Outcome::Success)
            {
                *per_site.entry(rec.site.as_str()).or_default() += 1;
            }
            SuccessDistribution {
                title: ALL_SITES_TITLE.to_string(),
                slices: to_slices(per_site),
            }
        }
        SiteSelector::Site(name) => {
            let mut per_outcome: BTreeMap<Outcome, usize> = BTreeMap::new();
            for rec in dataset.records().iter().filter(|r| r.site == *name) {
                *per_outcome.entry(rec.outcome).or_default() += 1;
            }
            SuccessDistribution {
                title: format!("Success/Fail launches of the Launch Site {name}"),
                slices: to_slices(per_outcome.into_iter().map(|(o, n)| (o.label(), n))),
            }
        }
    }
}

fn to_slices<'a>(groups: impl IntoIterator<Item = (&'a str, usize)>) -> Vec<DistributionSlice> {
    groups
        .into_iter()
        .map(|(label, value)| DistributionSlice {
            label: label.to_string(),
            value,
        })
        .collect()
}
