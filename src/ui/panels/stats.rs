// WellScope - ui/panels/stats.rs
//
// Summary statistics cards for the committed visualization.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the curve summary row. Nothing is drawn until a plot is displayed.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(display) = &state.display else {
        return;
    };

    ui.heading("Curve Summary");
    ui.add_space(4.0);

    let Some(stats) = &display.stats else {
        ui.label(
            egui::RichText::new("No data points in the selected interval.")
                .small()
                .weak(),
        );
        return;
    };

    ui.horizontal(|ui| {
        stat_card(ui, "Points", stats.count.to_string());
        stat_card(ui, "Min", format!("{:.2}", stats.min));
        stat_card(ui, "Max", format!("{:.2}", stats.max));
        stat_card(ui, "Average", format!("{:.2}", stats.average));
    });
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(theme::STATS_CARD_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(label).small().weak());
            ui.label(egui::RichText::new(value).strong());
        });
    });
}
