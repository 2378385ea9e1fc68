// WellScope - ui/panels/alert.rs
//
// Blocking failure notice for sample-fetch errors. Rendered as a modal-ish
// window over the whole viewport; the previous visualization stays on screen
// behind it.

use crate::app::state::AppState;

/// Render the fetch-error dialog when one is pending.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(error) = state.fetch_error.clone() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Curve Data Fetch Failed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&error);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.fetch_error = None;
    }
}
