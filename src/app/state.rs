// WellScope - app/state.rs
//
// Application state management. Two distinct slices live here: what the user
// has *selected* (well, curve, depth inputs) and what is currently
// *displayed* (the last committed plot/stats/interpretation). They are
// connected only by the plot manager's fetch-then-commit step, so a selection
// change mid-fetch can never corrupt the display.
//
// Background-worker events are applied through the `apply_*` methods below,
// each of which checks the event's generation against the issuing manager's
// current generation and discards stale completions. Owned by the
// eframe::App implementation.

use crate::core::model::{
    CatalogEvent, Curve, InterpretationReport, MessageClass, PlotEvent, PlotRequest, Sample,
    Stats, UploadEvent, UploadOutcome, Well,
};
use std::path::PathBuf;

/// The committed visualization: one (curve, range) pair's samples, locally
/// derived statistics, and the backend interpretation once it lands.
#[derive(Debug, Clone)]
pub struct DisplayedCurve {
    pub request: PlotRequest,
    pub samples: Vec<Sample>,
    pub stats: Option<Stats>,
    pub interpretation: Option<InterpretationReport>,
}

/// Classed upload status message shown under the upload controls.
#[derive(Debug, Clone)]
pub struct UploadMessage {
    pub class: MessageClass,
    pub text: String,
}

/// Follow-up action the gui must take after an upload outcome was applied.
///
/// Manager calls (catalog refresh, curve fetch) are side effects and stay in
/// the gui; the state transition itself remains pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFollowUp {
    /// Refresh the well catalog; selection unchanged.
    RefreshWells,

    /// The file was a duplicate: select the existing well (through the
    /// normal invalidation cascade), then refresh the catalog.
    SelectExistingWell(i64),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Wells currently known to the client.
    pub wells: Vec<Well>,

    /// Curves of the currently selected well; empty while loading or when
    /// the curve fetch failed.
    pub curves: Vec<Curve>,

    /// Whether a curve-list fetch is in flight for the selected well.
    pub curves_loading: bool,

    // ---- Selection slice ----
    /// Currently selected well id.
    pub selected_well: Option<i64>,

    /// Currently selected curve id. Only meaningful relative to
    /// `selected_well`.
    pub selected_curve: Option<i64>,

    /// Depth bounds as free-form text; parsed only when a plot is requested.
    pub min_depth_input: String,
    pub max_depth_input: String,

    // ---- Upload slice ----
    /// LAS file picked for upload (None until the user picks one).
    pub picked_file: Option<PathBuf>,

    /// Whether an upload is in flight; the upload control is disabled while
    /// true (mutual exclusion on this single control).
    pub upload_in_progress: bool,

    /// Last upload outcome message; each outcome replaces the previous one.
    pub upload_message: Option<UploadMessage>,

    // ---- Display slice ----
    /// The last committed, non-stale visualization.
    pub display: Option<DisplayedCurve>,

    /// Whether a plot invocation is in flight.
    pub plot_in_progress: bool,

    // ---- Transient UI ----
    /// Blocking sample-fetch failure notice, rendered as a modal window.
    pub fetch_error: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    // ---- Flags set by panels, consumed by the gui update loop ----
    /// A panel requested a well selection change (None clears the selection).
    pub pending_well_selection: Option<Option<i64>>,

    /// The Plot Curve control was activated.
    pub pending_plot: bool,

    /// The Upload control was activated.
    pub pending_upload: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            wells: Vec::new(),
            curves: Vec::new(),
            curves_loading: false,
            selected_well: None,
            selected_curve: None,
            min_depth_input: String::new(),
            max_depth_input: String::new(),
            picked_file: None,
            upload_in_progress: false,
            upload_message: None,
            display: None,
            plot_in_progress: false,
            fetch_error: None,
            status_message: "Ready. Upload a LAS file or pick a well to begin.".to_string(),
            pending_well_selection: None,
            pending_plot: false,
            pending_upload: false,
        }
    }

    /// The currently selected well, if any.
    pub fn selected_well(&self) -> Option<&Well> {
        self.selected_well
            .and_then(|id| self.wells.iter().find(|w| w.id == id))
    }

    /// The currently selected curve, if any.
    pub fn selected_curve(&self) -> Option<&Curve> {
        self.selected_curve
            .and_then(|id| self.curves.iter().find(|c| c.id == id))
    }

    /// A plot can be requested once a curve is selected and both depth
    /// fields are non-empty. Anything less makes Plot Curve a silent no-op.
    pub fn can_plot(&self) -> bool {
        self.selected_curve.is_some()
            && !self.min_depth_input.trim().is_empty()
            && !self.max_depth_input.trim().is_empty()
    }

    /// Apply a well selection change.
    ///
    /// This is a hard invalidation: a curve id is only meaningful relative
    /// to its owning well, so the curve selection, the curve list, and the
    /// displayed visualization are cleared unconditionally, regardless of
    /// prior state. The caller bumps the plot and curve-list generations so
    /// in-flight completions are discarded on arrival.
    pub fn apply_well_selection(&mut self, well: Option<i64>) {
        self.selected_well = well;
        self.selected_curve = None;
        self.curves.clear();
        self.curves_loading = false;
        self.display = None;
        self.plot_in_progress = false;
    }

    /// Apply a catalog event, discarding it if its generation was superseded.
    pub fn apply_catalog_event(
        &mut self,
        event: CatalogEvent,
        wells_generation: u64,
        curves_generation: u64,
    ) {
        match event {
            CatalogEvent::WellsLoaded { generation, wells } => {
                if generation != wells_generation {
                    tracing::debug!(generation, "Discarding stale well catalog");
                    return;
                }
                self.status_message = format!("Loaded {} wells.", wells.len());
                self.wells = wells;
            }
            CatalogEvent::WellsFailed { generation, .. } => {
                // Soft failure: already logged by the worker, list unchanged.
                if generation != wells_generation {
                    tracing::debug!(generation, "Discarding stale well catalog failure");
                }
            }
            CatalogEvent::CurvesLoaded { generation, curves } => {
                if generation != curves_generation {
                    tracing::debug!(generation, "Discarding stale curve list");
                    return;
                }
                self.curves = curves;
                self.curves_loading = false;
            }
            CatalogEvent::CurvesFailed { generation, .. } => {
                // Soft failure: the list was cleared when the fetch started
                // and stays empty.
                if generation == curves_generation {
                    self.curves_loading = false;
                }
            }
        }
    }

    /// Apply a plot event, discarding it if its generation was superseded.
    pub fn apply_plot_event(&mut self, event: PlotEvent, current_generation: u64) {
        match event {
            PlotEvent::SamplesLoaded {
                generation,
                request,
                samples,
                stats,
            } => {
                if generation != current_generation {
                    tracing::debug!(generation, "Discarding stale samples");
                    return;
                }
                self.status_message = format!(
                    "Loaded {} samples for {} [{} – {}].",
                    samples.len(),
                    request.mnemonic,
                    request.min_depth,
                    request.max_depth
                );
                // Committing a fresh sample set clears any previous
                // interpretation; the new one arrives in a later event.
                self.display = Some(DisplayedCurve {
                    request,
                    samples,
                    stats,
                    interpretation: None,
                });
                self.plot_in_progress = false;
            }
            PlotEvent::SamplesFailed { generation, error } => {
                if generation != current_generation {
                    tracing::debug!(generation, "Discarding stale sample failure");
                    return;
                }
                // The previous display is preserved so the user is not left
                // with a blank screen; the failure is a blocking notice.
                self.plot_in_progress = false;
                self.fetch_error = Some(error);
            }
            PlotEvent::InterpretationLoaded { generation, report } => {
                if generation != current_generation {
                    tracing::debug!(generation, "Discarding stale interpretation");
                    return;
                }
                if let Some(display) = &mut self.display {
                    display.interpretation = Some(report);
                }
            }
            PlotEvent::InterpretationFailed { generation } => {
                if generation != current_generation {
                    return;
                }
                if let Some(display) = &mut self.display {
                    display.interpretation = None;
                }
            }
        }
    }

    /// Apply an upload event. Returns the follow-up action the gui must
    /// perform, if any.
    pub fn apply_upload_event(&mut self, event: UploadEvent) -> Option<UploadFollowUp> {
        self.upload_in_progress = false;
        match event {
            UploadEvent::Completed {
                outcome:
                    UploadOutcome::Ingested {
                        well_name,
                        curves_ingested,
                        measurements_inserted,
                        ..
                    },
            } => {
                self.upload_message = Some(UploadMessage {
                    class: MessageClass::Success,
                    text: format!(
                        "Upload successful: '{well_name}' with {curves_ingested} curves, \
                         {measurements_inserted} samples."
                    ),
                });
                // Selection is deliberately left unchanged: the user decides
                // whether to switch to the new well.
                Some(UploadFollowUp::RefreshWells)
            }
            UploadEvent::Completed {
                outcome: UploadOutcome::Duplicate { well_id, well_name },
            } => {
                self.upload_message = Some(UploadMessage {
                    class: MessageClass::Warning,
                    text: format!("File already uploaded. Existing well '{well_name}' loaded."),
                });
                Some(UploadFollowUp::SelectExistingWell(well_id))
            }
            UploadEvent::Failed { message } => {
                self.upload_message = Some(UploadMessage {
                    class: MessageClass::Error,
                    text: message,
                });
                None
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
