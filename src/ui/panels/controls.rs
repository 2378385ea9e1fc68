// WellScope - ui/panels/controls.rs
//
// Left sidebar: upload controls, well/curve selectors, depth interval,
// Plot Curve trigger.
//
// This panel writes `state.pending_upload`, `state.pending_well_selection`,
// and `state.pending_plot`; gui.rs consumes them each frame. Curve selection
// is inert (no fetch) and is applied directly. No direct I/O or manager
// access from here.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the upload and selection controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    render_upload_section(ui, state);
    ui.separator();
    render_selection_section(ui, state);
    ui.separator();
    render_depth_section(ui, state);
}

fn render_upload_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Upload LAS File");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.upload_in_progress, egui::Button::new("Choose File\u{2026}"))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("LAS well logs", constants::LAS_EXTENSIONS)
                .pick_file()
            {
                state.picked_file = Some(path);
            }
        }

        match &state.picked_file {
            Some(path) => {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
                ui.label(egui::RichText::new(name).small());
            }
            None => {
                ui.label(egui::RichText::new("No file selected.").small().weak());
            }
        }
    });

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        // Disabled while uploading: mutual exclusion on this single control.
        let can_upload = state.picked_file.is_some() && !state.upload_in_progress;
        let label = if state.upload_in_progress {
            "Uploading\u{2026}"
        } else {
            "Upload File"
        };
        if ui.add_enabled(can_upload, egui::Button::new(label)).clicked() {
            state.pending_upload = true;
        }
        if state.upload_in_progress {
            ui.spinner();
        }
    });

    if let Some(message) = &state.upload_message {
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(&message.text)
                .small()
                .color(theme::message_colour(message.class)),
        );
    }
}

fn render_selection_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Select Well");
    ui.add_space(4.0);

    let well_text = state
        .selected_well()
        .map(|w| w.name.clone())
        .unwrap_or_else(|| "Choose well".to_string());

    let mut well_change: Option<Option<i64>> = None;
    egui::ComboBox::from_id_salt("well_select")
        .width(ui.available_width() - 8.0)
        .selected_text(well_text)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(state.selected_well.is_none(), "Choose well")
                .clicked()
            {
                well_change = Some(None);
            }
            for well in &state.wells {
                let response = ui
                    .selectable_label(state.selected_well == Some(well.id), &well.name)
                    .on_hover_text(format!(
                        "{}\nIngested {}",
                        well.original_filename,
                        well.created_at.format("%Y-%m-%d %H:%M")
                    ));
                if response.clicked() {
                    well_change = Some(Some(well.id));
                }
            }
        });
    if let Some(selection) = well_change {
        if selection != state.selected_well {
            state.pending_well_selection = Some(selection);
        }
    }

    ui.add_space(6.0);
    ui.heading("Select Curve");
    ui.add_space(4.0);

    let curve_text = state
        .selected_curve()
        .map(|c| c.label())
        .unwrap_or_else(|| "Choose curve".to_string());

    let mut curve_change: Option<i64> = None;
    ui.add_enabled_ui(state.selected_well.is_some(), |ui| {
        egui::ComboBox::from_id_salt("curve_select")
            .width(ui.available_width() - 8.0)
            .selected_text(curve_text)
            .show_ui(ui, |ui| {
                for curve in &state.curves {
                    let mut response =
                        ui.selectable_label(state.selected_curve == Some(curve.id), curve.label());
                    if let Some(description) = curve.description.as_deref() {
                        if !description.is_empty() {
                            response = response.on_hover_text(description);
                        }
                    }
                    if response.clicked() {
                        curve_change = Some(curve.id);
                    }
                }
            });
    });
    // Curve selection is inert until the user requests a plot.
    if let Some(curve_id) = curve_change {
        state.selected_curve = Some(curve_id);
    }

    if state.curves_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading curves\u{2026}").small().weak());
        });
    }
}

fn render_depth_section(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Depth Interval");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Min:");
        ui.add(
            egui::TextEdit::singleline(&mut state.min_depth_input)
                .hint_text("e.g. 1000")
                .desired_width(theme::DEPTH_FIELD_WIDTH),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Max:");
        ui.add(
            egui::TextEdit::singleline(&mut state.max_depth_input)
                .hint_text("e.g. 2000")
                .desired_width(theme::DEPTH_FIELD_WIDTH),
        );
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Plot Curve").clicked() {
            state.pending_plot = true;
        }
        if state.plot_in_progress {
            ui.spinner();
        }
    });
}
