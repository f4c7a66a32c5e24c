use std::ops::RangeInclusive;
use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{PayloadRange, SiteSelector, ALL_SITES};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – parameter widgets
// ---------------------------------------------------------------------------

/// Render the left parameter panel: site selector, payload range, legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    let (Some(dataset), Some(params)) = (&state.dataset, state.parameters()) else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let sites: Vec<String> = dataset.sites().iter().cloned().collect();
    let bounds = dataset.payload_bounds();
    let current_site = params.site.clone();
    let params_payload = params.payload;
    let PayloadRange { mut low, mut high } = params_payload;

    // ---- Launch site selector ----
    ui.strong("Launch site");
    let selected_text = match &current_site {
        SiteSelector::All => "All Sites".to_string(),
        SiteSelector::Site(name) => name.clone(),
    };
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("site_selector")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_site.is_all(), "All Sites")
                .clicked()
            {
                picked = Some(ALL_SITES.to_string());
            }
            for site in &sites {
                let is_current = matches!(&current_site, SiteSelector::Site(s) if s == site);
                if ui.selectable_label(is_current, site).clicked() {
                    picked = Some(site.clone());
                }
            }
        });
    if let Some(site) = picked {
        // Rejections are reported through the status line.
        let _ = state.select_site(&site);
    }
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let span = slider_span(bounds, params_payload);
    let mut changed = ui
        .add(egui::Slider::new(&mut low, span.clone()).text("min"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut high, span).text("max"))
        .changed();
    if ui.small_button("Reset").clicked() {
        low = bounds.low;
        high = bounds.high;
        changed = true;
    }
    if changed {
        state.set_payload_range(low, high);
    }
    if current_site.is_all() {
        ui.label(RichText::new("Range applies to a single site only.").weak());
    }
    ui.separator();

    // ---- Booster category legend ----
    if let Some(cm) = &state.color_map {
        egui::CollapsingHeader::new(RichText::new("Booster Version Category").strong())
            .default_open(true)
            .show(ui, |ui: &mut Ui| {
                for (category, color) in cm.legend_entries() {
                    ui.label(RichText::new(category).color(color));
                }
            });
    }
}

/// Slider track covering the dataset bounds and the current range, so a
/// range set outside the bounds (e.g. from the command line) is not clamped.
fn slider_span(bounds: PayloadRange, current: PayloadRange) -> RangeInclusive<f64> {
    let low = bounds.low.min(current.low).min(current.high);
    let high = bounds.high.max(current.high).max(current.low);
    low..=high
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(views)) = (&state.dataset, state.views()) {
            ui.label(format!(
                "{} launches loaded, {} plotted",
                ds.len(),
                views.scatter.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` into the state; a failure keeps the previous dataset visible.
pub fn load_into(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} launches from {} across sites {:?}",
                dataset.len(),
                path.display(),
                dataset.sites()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            let e = anyhow::Error::new(e).context(format!("loading {}", path.display()));
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
