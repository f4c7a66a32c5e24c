use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use eframe::egui;
use serde::Serialize;

use launch_dash::app::LaunchDashApp;
use launch_dash::data::loader::load_file;
use launch_dash::data::model::{PayloadRange, ALL_SITES};
use launch_dash::state::{AppState, DashboardViews};

#[derive(Debug, Parser)]
#[command(
    name = "launch-dash",
    version,
    about = "Launch records dashboard: success distribution and payload scatter"
)]
struct Cli {
    /// Launch table to open (.csv, .json or .parquet)
    path: Option<PathBuf>,

    /// Launch site to select, or ALL
    #[arg(long, default_value = ALL_SITES)]
    site: String,

    /// Lower payload bound in kg (defaults to the dataset minimum)
    #[arg(long)]
    payload_min: Option<f64>,

    /// Upper payload bound in kg (defaults to the dataset maximum)
    #[arg(long)]
    payload_max: Option<f64>,

    /// Print both views as JSON and exit (no window)
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    site: String,
    payload_min: f64,
    payload_max: f64,
    #[serde(flatten)]
    views: &'a DashboardViews,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::default();
    if let Some(path) = &cli.path {
        let dataset = load_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        log::info!("Loaded {} launches from {}", dataset.len(), path.display());

        state.set_dataset(dataset);
        apply_cli_parameters(&mut state, &cli)?;
    } else if cli.json {
        bail!("--json needs a launch table path");
    }

    if cli.json {
        return print_report(&state);
    }

    run_window(state)
}

/// Apply `--site` / `--payload-*` to a freshly loaded state. A bad site is
/// fatal only for `--json`; the window opens on the defaults with the error
/// in its status line.
fn apply_cli_parameters(state: &mut AppState, cli: &Cli) -> Result<()> {
    let Some(bounds) = state.dataset.as_ref().map(|ds| ds.payload_bounds()) else {
        bail!("no dataset loaded");
    };
    let payload = PayloadRange::new(
        cli.payload_min.unwrap_or(bounds.low),
        cli.payload_max.unwrap_or(bounds.high),
    );
    if let Err(e) = state.apply(&cli.site, payload) {
        if cli.json {
            return Err(e.into());
        }
        log::warn!("ignoring --site: {e}");
    }
    Ok(())
}

fn print_report(state: &AppState) -> Result<()> {
    let (Some(params), Some(views)) = (state.parameters(), state.views()) else {
        bail!("no dataset loaded");
    };
    let report = Report {
        site: params.site.to_string(),
        payload_min: params.payload.low,
        payload_max: params.payload.high,
        views,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_window(state: AppState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Dash – Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_dash::data::model::{LaunchDataset, LaunchRecord, Outcome, SiteSelector};

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(
            LaunchDataset::from_records(vec![
                LaunchRecord::new("A", 500.0, Outcome::Success, "FT"),
                LaunchRecord::new("B", 800.0, Outcome::Failure, "B4"),
            ])
            .unwrap(),
        );
        state
    }

    #[test]
    fn test_unknown_site_keeps_window_on_defaults() {
        let cli = Cli::parse_from(["launch-dash", "launches.csv", "--site", "Mars"]);
        let mut state = loaded();
        apply_cli_parameters(&mut state, &cli).unwrap();

        let params = state.parameters().unwrap();
        assert_eq!(params.site, SiteSelector::All);
        assert_eq!(params.payload, PayloadRange::new(500.0, 800.0));
        assert!(state.status_message.as_deref().unwrap().contains("Mars"));
    }

    #[test]
    fn test_unknown_site_fails_json_report() {
        let cli = Cli::parse_from(["launch-dash", "launches.csv", "--site", "Mars", "--json"]);
        let mut state = loaded();
        assert!(apply_cli_parameters(&mut state, &cli).is_err());
    }

    #[test]
    fn test_cli_parameters_applied() {
        let cli = Cli::parse_from([
            "launch-dash",
            "launches.csv",
            "--site",
            "A",
            "--payload-min",
            "0",
        ]);
        let mut state = loaded();
        apply_cli_parameters(&mut state, &cli).unwrap();

        let params = state.parameters().unwrap();
        assert_eq!(params.site, SiteSelector::Site("A".to_string()));
        assert_eq!(params.payload, PayloadRange::new(0.0, 800.0));
        assert!(state.status_message.is_none());
    }
}
