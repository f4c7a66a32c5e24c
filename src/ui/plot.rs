use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::{generate_palette, ColorMap};
use crate::data::series::{ScatterSeries, SuccessDistribution};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: distribution chart above scatter chart
// ---------------------------------------------------------------------------

/// Render both charts in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(views) = state.views() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a launch table to begin  (File → Open…)");
        });
        return;
    };

    let half = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;
    distribution_chart(ui, &views.success_distribution, half);
    scatter_chart(ui, &views.scatter, state.color_map.as_ref(), half);
}

/// One bar per slice, each its own chart so the legend lists every label.
fn distribution_chart(ui: &mut Ui, dist: &SuccessDistribution, height: f32) {
    ui.strong(&dist.title);
    let palette = generate_palette(dist.slices.len());

    Plot::new("success_distribution")
        .height(height)
        .legend(Legend::default())
        .y_axis_label("Launches")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (slice, color)) in dist.slices.iter().zip(&palette).enumerate() {
                let bar = Bar::new(i as f64, slice.value as f64)
                    .name(&slice.label)
                    .fill(*color)
                    .width(0.6);
                let chart = BarChart::new(vec![bar]).name(&slice.label).color(*color);
                plot_ui.bar_chart(chart);
            }
        });
}

/// Payload vs. outcome, one point series per booster category.
fn scatter_chart(ui: &mut Ui, scatter: &ScatterSeries, colors: Option<&ColorMap>, height: f32) {
    ui.strong(&scatter.title);

    // Group by category for the legend; row order is kept inside each group.
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &scatter.points {
        by_category
            .entry(p.color.as_str())
            .or_default()
            .push([p.x, f64::from(p.y)]);
    }

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(scatter.x_label.as_str())
        .y_axis_label(scatter.y_label.as_str())
        .include_y(-0.5)
        .include_y(1.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, coords) in by_category {
                let color = colors
                    .map(|cm| cm.color_for(category))
                    .unwrap_or(Color32::LIGHT_BLUE);
                let points: PlotPoints = coords.into_iter().collect();
                plot_ui.points(Points::new(points).name(category).color(color).radius(4.0));
            }
        });
}
