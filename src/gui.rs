// WellScope - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels, polls the background managers, and applies
// their events to the application state with staleness checks.

use crate::app::catalog::CatalogManager;
use crate::app::plot::PlotManager;
use crate::app::state::{AppState, UploadFollowUp};
use crate::app::upload::UploadManager;
use crate::core::model::PlotRequest;
use crate::net::gateway::Gateway;
use crate::ui;

/// The WellScope application.
pub struct WellScopeApp {
    pub state: AppState,
    gateway: Gateway,
    catalog: CatalogManager,
    plot: PlotManager,
    upload: UploadManager,
}

impl WellScopeApp {
    /// Create a new application instance and start the initial well-catalog
    /// fetch.
    pub fn new(state: AppState, gateway: Gateway) -> Self {
        let mut catalog = CatalogManager::new();
        catalog.refresh_wells(&gateway);
        Self {
            state,
            gateway,
            catalog,
            plot: PlotManager::new(),
            upload: UploadManager::new(),
        }
    }

    /// The full well-selection cascade: state invalidation, supersession of
    /// in-flight fetches, and the curve-list fetch for the new well.
    fn apply_well_selection(&mut self, selection: Option<i64>) {
        self.state.apply_well_selection(selection);
        self.plot.invalidate();
        match selection {
            Some(well_id) => {
                self.state.curves_loading = true;
                self.catalog.fetch_curves(&self.gateway, well_id);
            }
            None => self.catalog.invalidate_curves(),
        }
    }

    /// Start a plot invocation from the current selection.
    fn handle_plot_request(&mut self) {
        // Deliberate guard, not an error path: partial input is a silent no-op.
        if !self.state.can_plot() {
            return;
        }
        let Some(curve) = self.state.selected_curve() else {
            return;
        };

        let min_text = self.state.min_depth_input.trim();
        let max_text = self.state.max_depth_input.trim();
        let (min_depth, max_depth) = match (min_text.parse::<f64>(), max_text.parse::<f64>()) {
            (Ok(min), Ok(max)) => (min, max),
            _ => {
                // Non-numeric depth text reaches the user through the same
                // blocking channel as a failed sample fetch.
                self.state.fetch_error = Some(format!(
                    "Depth bounds must be numeric (got '{min_text}' \u{2013} '{max_text}')."
                ));
                return;
            }
        };

        let request = PlotRequest {
            curve_id: curve.id,
            mnemonic: curve.mnemonic.clone(),
            unit: curve.unit.clone(),
            min_depth,
            max_depth,
        };
        self.state.plot_in_progress = true;
        self.plot.request_plot(&self.gateway, request);
    }

    /// Export the committed visualization's samples to a CSV file chosen by
    /// the user.
    fn export_displayed_samples(&mut self) {
        let (samples, default_name) = match &self.state.display {
            Some(display) => (
                display.samples.clone(),
                format!(
                    "{}_{}-{}.csv",
                    display.request.mnemonic, display.request.min_depth, display.request.max_depth
                ),
            ),
            None => return,
        };

        let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match std::fs::File::create(&dest) {
            Ok(file) => match crate::core::export::export_csv(&samples, file, &dest) {
                Ok(n) => {
                    self.state.status_message = format!("Exported {n} samples to CSV.");
                }
                Err(e) => {
                    self.state.status_message = format!("CSV export failed: {e}");
                }
            },
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }
}

impl eframe::App for WellScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll background workers and apply their events. Each apply checks
        // the event's generation so completions of superseded requests are
        // discarded rather than written to the display.
        let catalog_events = self.catalog.poll();
        let plot_events = self.plot.poll();
        let upload_events = self.upload.poll();
        let had_events =
            !catalog_events.is_empty() || !plot_events.is_empty() || !upload_events.is_empty();

        for event in catalog_events {
            self.state.apply_catalog_event(
                event,
                self.catalog.wells_generation(),
                self.catalog.curves_generation(),
            );
        }
        for event in plot_events {
            self.state.apply_plot_event(event, self.plot.generation());
        }
        for event in upload_events {
            match self.state.apply_upload_event(event) {
                Some(UploadFollowUp::RefreshWells) => {
                    self.catalog.refresh_wells(&self.gateway);
                }
                Some(UploadFollowUp::SelectExistingWell(well_id)) => {
                    // The duplicate path reuses the normal selection cascade.
                    self.apply_well_selection(Some(well_id));
                    self.catalog.refresh_wells(&self.gateway);
                }
                None => {}
            }
        }

        // Keep repainting while workers are active so results appear promptly.
        if had_events
            || self.state.curves_loading
            || self.state.plot_in_progress
            || self.state.upload_in_progress
        {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ---- Handle flags set by the controls panel ----
        if let Some(selection) = self.state.pending_well_selection.take() {
            self.apply_well_selection(selection);
        }
        if std::mem::take(&mut self.state.pending_plot) {
            self.handle_plot_request();
        }
        if std::mem::take(&mut self.state.pending_upload) {
            if let Some(path) = self.state.picked_file.clone() {
                if !self.state.upload_in_progress {
                    self.state.upload_in_progress = true;
                    self.state.upload_message = None;
                    self.upload.start_upload(&self.gateway, path);
                }
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_samples = self
                        .state
                        .display
                        .as_ref()
                        .is_some_and(|d| !d.samples.is_empty());
                    ui.add_enabled_ui(has_samples, |ui| {
                        if ui.button("Export Samples (CSV)\u{2026}").clicked() {
                            self.export_displayed_samples();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.gateway.base_url())
                            .small()
                            .weak(),
                    );
                    if let Some(display) = &self.state.display {
                        ui.separator();
                        ui.label(format!("{} samples", display.samples.len()));
                    }
                });
            });
        });

        // Summary pane (stats + interpretation) below the plot.
        if self.state.display.is_some() {
            egui::TopBottomPanel::bottom("summary_pane")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("summary_scroll")
                        .show(ui, |ui| {
                            ui::panels::stats::render(ui, &self.state);
                            ui.add_space(6.0);
                            ui::panels::interpretation::render(ui, &self.state);
                        });
                });
        }

        // Left sidebar: upload + selection controls.
        egui::SidePanel::left("controls")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| {
                        ui::panels::controls::render(ui, &mut self.state);
                    });
            });

        // Central panel: the depth plot.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::plot::render(ui, &self.state);
        });

        // Blocking fetch-failure dialog.
        ui::panels::alert::render(ctx, &mut self.state);
    }
}
