// WellScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. The catalog and
// measurement types deserialise directly from the backend's JSON responses.

use chrono::NaiveDateTime;
use serde::Deserialize;

// =============================================================================
// Catalog types
// =============================================================================

/// A named subsurface borehole record, container for one or more curves.
///
/// Created server-side when a LAS file is ingested; immutable from the
/// client's perspective. The `id` is an opaque foreign key for curves.
#[derive(Debug, Clone, Deserialize)]
pub struct Well {
    pub id: i64,
    pub name: String,

    /// Name of the LAS file this well was ingested from. Duplicate detection
    /// on the backend is keyed on it.
    pub original_filename: String,

    /// Server-side ingestion time (backend-local, no offset).
    pub created_at: NaiveDateTime,
}

/// A single logged measurement series belonging to a well.
#[derive(Debug, Clone, Deserialize)]
pub struct Curve {
    pub id: i64,

    /// Mnemonic identifying the measurement (e.g. "GR", "RHOB").
    pub mnemonic: String,

    /// Measurement unit as recorded in the LAS header, when present.
    pub unit: Option<String>,

    /// Free-text curve description from the LAS header, when present.
    pub description: Option<String>,
}

impl Curve {
    /// Display label for selectors and plot headers: mnemonic, with the unit
    /// appended when known.
    pub fn label(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("{} [{unit}]", self.mnemonic),
            _ => self.mnemonic.clone(),
        }
    }
}

// =============================================================================
// Measurements
// =============================================================================

/// One (depth, value) measurement point of a curve.
///
/// `value` is nullable: LAS null markers are stored as NULL server-side and
/// arrive as `null` in the JSON body. Null values are skipped by both the
/// plot and the statistics calculator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub depth: f64,
    pub value: Option<f64>,
}

/// Summary statistics over the finite values of a sample sequence.
///
/// Produced by `core::stats::compute`; never constructed from an empty
/// sequence (that case is `None` at the call site).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

// =============================================================================
// Interpretation
// =============================================================================

/// Statistics computed server-side by the interpretation engine.
///
/// Shown as hover detail only; the locally computed `Stats` drive the
/// summary panel.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStats {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// Full report produced by the backend's rule-based interpretation engine
/// for one (curve, depth range) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct InterpretationReport {
    /// Mnemonic of the interpreted curve, as echoed by the backend.
    pub curve: String,

    pub statistics: ServerStats,

    /// Ordered textual statements, rendered as a bullet list.
    pub interpretation: Vec<String>,
}

// =============================================================================
// Upload
// =============================================================================

/// Successful outcome of a LAS upload.
///
/// The error case travels as `GatewayError` and surfaces through
/// `UploadEvent::Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// A new well was ingested.
    Ingested {
        well_id: i64,
        well_name: String,
        curves_ingested: usize,
        measurements_inserted: usize,
    },

    /// The file was uploaded before; the backend returned the existing well.
    Duplicate { well_id: i64, well_name: String },
}

/// Visual class of the upload status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    Success,
    Warning,
    Error,
}

// =============================================================================
// Background-worker events
// =============================================================================
//
// Events are sent from worker threads to the UI thread over mpsc channels
// and applied once per frame. Variants that can race with a selection change
// carry the generation current when their request was issued; the UI
// discards events whose generation no longer matches.

/// Progress messages from catalog (wells / curves) fetch workers.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    WellsLoaded { generation: u64, wells: Vec<Well> },

    /// Catalog failures are soft: logged by the worker, the well list is
    /// left as it was (empty on first run). The error text is carried for
    /// diagnostics.
    WellsFailed { generation: u64, error: String },

    CurvesLoaded { generation: u64, curves: Vec<Curve> },

    CurvesFailed { generation: u64, error: String },
}

/// Progress messages from one plot invocation's worker.
///
/// A worker always sends `Samples*` first; `Interpretation*` follows only
/// after `SamplesLoaded`, which is what strictly orders the interpretation
/// fetch behind a successful sample fetch.
#[derive(Debug, Clone)]
pub enum PlotEvent {
    SamplesLoaded {
        generation: u64,
        request: PlotRequest,
        samples: Vec<Sample>,
        stats: Option<Stats>,
    },

    /// The sample fetch failed: the invocation is over and the previous
    /// display must be left untouched.
    SamplesFailed { generation: u64, error: String },

    InterpretationLoaded {
        generation: u64,
        report: InterpretationReport,
    },

    /// Interpretation failure is silent: plot and stats stay up, the
    /// interpretation panel simply does not render.
    InterpretationFailed { generation: u64 },
}

/// Everything a plot worker needs to know about what it is fetching, and
/// everything the display commit needs to label the result.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub curve_id: i64,
    pub mnemonic: String,
    pub unit: Option<String>,
    pub min_depth: f64,
    pub max_depth: f64,
}

/// Terminal messages from an upload worker.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    Completed { outcome: UploadOutcome },

    /// Backend detail when the backend supplied one, generic fallback text
    /// otherwise. Shown inline with error class.
    Failed { message: String },
}
