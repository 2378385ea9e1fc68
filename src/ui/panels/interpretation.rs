// WellScope - ui/panels/interpretation.rs
//
// Rule-engine interpretation statements. The panel is simply absent until a
// report has arrived for the committed visualization; interpretation-fetch
// failures leave it absent without any alert.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the interpretation list, if one is attached to the display.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(report) = state
        .display
        .as_ref()
        .and_then(|d| d.interpretation.as_ref())
    else {
        return;
    };

    let heading = ui.heading("Interpretation (Rule-Based Engine)");
    heading.on_hover_text(format!(
        "Server statistics for {}: min {:.2}, max {:.2}, average {:.2}, \
         std dev {:.2} over {} values",
        report.curve,
        report.statistics.min,
        report.statistics.max,
        report.statistics.average,
        report.statistics.std_dev,
        report.statistics.count,
    ));
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("interpretation_list")
        .max_height(theme::INTERPRETATION_MAX_HEIGHT)
        .show(ui, |ui| {
            for item in &report.interpretation {
                ui.horizontal_wrapped(|ui| {
                    ui.label("\u{2022}");
                    ui.label(item);
                });
            }
        });
}
