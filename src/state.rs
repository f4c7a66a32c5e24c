use serde::Serialize;
use thiserror::Error;

use crate::color::ColorMap;
use crate::data::aggregate::success_distribution;
use crate::data::error::UnknownSiteError;
use crate::data::filter::scatter_series;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelector};
use crate::data::series::{ScatterSeries, SuccessDistribution};

// ---------------------------------------------------------------------------
// Parameters and derived views
// ---------------------------------------------------------------------------

/// The two user-selected inputs every view is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub site: SiteSelector,
    pub payload: PayloadRange,
}

impl Parameters {
    /// All sites, full payload span of the dataset.
    pub fn defaults_for(dataset: &LaunchDataset) -> Self {
        Parameters {
            site: SiteSelector::All,
            payload: dataset.payload_bounds(),
        }
    }
}

/// Both chart series for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub success_distribution: SuccessDistribution,
    pub scatter: ScatterSeries,
}

/// Recompute both views from scratch. The two series do not depend on each
/// other; each sees the full parameter set.
pub fn recompute(dataset: &LaunchDataset, params: &Parameters) -> DashboardViews {
    log::debug!("recomputing views for site={} payload={}", params.site, params.payload);
    DashboardViews {
        success_distribution: success_distribution(dataset, &params.site),
        scatter: scatter_series(dataset, &params.site, &params.payload),
    }
}

// ---------------------------------------------------------------------------
// Parameter state
// ---------------------------------------------------------------------------

/// Current parameters together with the views computed from them.
///
/// The only transition is [`ParameterState::set_parameters`], which swaps the
/// whole parameter tuple and recomputes both views before returning, so the
/// views always belong to the parameters they sit next to.
#[derive(Debug, Clone)]
pub struct ParameterState {
    params: Parameters,
    views: DashboardViews,
}

impl ParameterState {
    pub fn new(dataset: &LaunchDataset) -> Self {
        let params = Parameters::defaults_for(dataset);
        let views = recompute(dataset, &params);
        ParameterState { params, views }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    /// Replace the parameters and recompute. Unchanged parameters reuse the
    /// current views.
    pub fn set_parameters(&mut self, dataset: &LaunchDataset, params: Parameters) -> &DashboardViews {
        if params != self.params {
            self.views = recompute(dataset, &params);
            self.params = params;
        }
        &self.views
    }
}

/// Why a parameter change was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("no dataset loaded")]
    NoDataset,

    #[error(transparent)]
    UnknownSite(#[from] UnknownSiteError),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Selection and views; present whenever `dataset` is.
    pub params: Option<ParameterState>,

    /// Booster category colours for the scatter plot.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and reset parameters to its defaults.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.params = Some(ParameterState::new(&dataset));
        self.color_map = Some(ColorMap::new(dataset.booster_categories()));
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    pub fn views(&self) -> Option<&DashboardViews> {
        self.params.as_ref().map(ParameterState::views)
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.params.as_ref().map(ParameterState::parameters)
    }

    /// Apply a complete parameter set given as raw UI values.
    ///
    /// An unknown site leaves the current parameters and views untouched and
    /// reports the error in the status line.
    pub fn apply(&mut self, site: &str, payload: PayloadRange) -> Result<(), ParameterError> {
        let (Some(dataset), Some(state)) = (&self.dataset, &mut self.params) else {
            return Err(ParameterError::NoDataset);
        };

        match dataset.resolve_site(site) {
            Ok(site) => {
                state.set_parameters(dataset, Parameters { site, payload });
                self.status_message = None;
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected parameters: {e}");
                self.status_message = Some(format!("Error: {e}"));
                Err(e.into())
            }
        }
    }

    /// Change only the site selector.
    pub fn select_site(&mut self, site: &str) -> Result<(), ParameterError> {
        let payload = self
            .parameters()
            .map(|p| p.payload)
            .ok_or(ParameterError::NoDataset)?;
        self.apply(site, payload)
    }

    /// Change only the payload range; the current site selector is kept as is.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let (Some(dataset), Some(state)) = (&self.dataset, &mut self.params) else {
            return;
        };
        let params = Parameters {
            site: state.parameters().site.clone(),
            payload: PayloadRange::new(low, high),
        };
        state.set_parameters(dataset, params);
    }
}
