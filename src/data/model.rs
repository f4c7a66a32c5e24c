use std::collections::BTreeSet;
use std::fmt;

use super::error::{LoadError, UnknownSiteError};

// ---------------------------------------------------------------------------
// Source column names
// ---------------------------------------------------------------------------

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const OUTCOME_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

/// Selector value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch result. Ordered so that `Failure` sorts before `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret an integer class value; only 0 and 1 are valid.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Interpret a floating point class value (pandas often widens ints).
    pub fn from_class_f64(class: f64) -> Option<Self> {
        if class == 0.0 {
            Some(Outcome::Failure)
        } else if class == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    /// Parse the textual form found in CSV cells: `0`, `1`, `0.0`, `1.0`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Self::from_class(i);
        }
        s.parse::<f64>().ok().and_then(Self::from_class_f64)
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Label used by the per-site distribution: `"0"` or `"1"`.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "0",
            Outcome::Success => "1",
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        LaunchRecord {
            site: site.into(),
            payload_mass,
            outcome,
            booster_category: booster_category.into(),
        }
    }

    /// Field rules checked once at load time. `row` is only used for the error.
    fn validate(&self, row: usize) -> Result<(), LoadError> {
        if self.site.trim().is_empty() {
            return Err(LoadError::InvalidField {
                row,
                column: SITE_COLUMN,
                value: self.site.clone(),
            });
        }
        if !self.payload_mass.is_finite() || self.payload_mass < 0.0 {
            return Err(LoadError::InvalidField {
                row,
                column: PAYLOAD_COLUMN,
                value: self.payload_mass.to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Which launch sites a view covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => f.write_str(ALL_SITES),
            SiteSelector::Site(name) => f.write_str(name),
        }
    }
}

/// Inclusive payload mass interval. `low > high` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full, validated launch table with bounds and indices computed once.
///
/// There are no mutating methods; once built the dataset only hands out
/// shared references.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: BTreeSet<String>,
    booster_categories: BTreeSet<String>,
}

impl LaunchDataset {
    /// Validate the records and build the cached bounds and indices.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        let mut sites = BTreeSet::new();
        let mut booster_categories = BTreeSet::new();

        for (row, rec) in records.iter().enumerate() {
            rec.validate(row)?;
            min_payload = min_payload.min(rec.payload_mass);
            max_payload = max_payload.max(rec.payload_mass);
            sites.insert(rec.site.clone());
            booster_categories.insert(rec.booster_category.clone());
        }

        Ok(LaunchDataset {
            records,
            min_payload,
            max_payload,
            sites,
            booster_categories,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a loaded dataset; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// `[min_payload, max_payload]`, the default payload range.
    pub fn payload_bounds(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }

    /// Distinct site names in ascending order.
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    /// Distinct booster categories in ascending order.
    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    /// Turn a raw selector string into a [`SiteSelector`], rejecting names
    /// that are neither `ALL` nor a known site.
    pub fn resolve_site(&self, raw: &str) -> Result<SiteSelector, UnknownSiteError> {
        if raw == ALL_SITES {
            return Ok(SiteSelector::All);
        }
        if self.sites.contains(raw) {
            Ok(SiteSelector::Site(raw.to_string()))
        } else {
            Err(UnknownSiteError(raw.to_string()))
        }
    }
}
