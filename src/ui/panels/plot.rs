// WellScope - ui/panels/plot.rs
//
// Depth plot for the committed visualization. Depth runs down the y-axis
// (greater depth lower on screen), value along the x-axis.

use crate::app::state::AppState;
use crate::ui::theme;
use egui_plot::{Line, Plot, PlotPoints};

/// Render the curve-versus-depth plot, or the empty-state hint.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(display) = &state.display else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Select well, curve and depth range to visualize data.")
                    .weak(),
            );
        });
        return;
    };

    let request = &display.request;

    ui.horizontal(|ui| {
        ui.strong("Curve:");
        match request.unit.as_deref() {
            Some(unit) if !unit.is_empty() => {
                ui.label(format!("{} [{unit}]", request.mnemonic));
            }
            _ => {
                ui.label(&request.mnemonic);
            }
        }
        ui.separator();
        ui.strong("Depth range:");
        ui.label(format!("{} \u{2013} {}", request.min_depth, request.max_depth));
    });
    ui.add_space(4.0);

    // Depth is negated so deeper samples plot lower; the axis formatter
    // shows the true depth. Null values are dropped from the trace.
    let points: Vec<[f64; 2]> = display
        .samples
        .iter()
        .filter_map(|s| s.value.map(|v| [v, -s.depth]))
        .collect();

    let line = Line::new(PlotPoints::new(points))
        .color(theme::PLOT_LINE)
        .name(&request.mnemonic);

    Plot::new("curve_depth_plot")
        .x_axis_label("Value")
        .y_axis_label("Depth")
        .y_axis_formatter(|mark, _range| format!("{:.0}", -mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
