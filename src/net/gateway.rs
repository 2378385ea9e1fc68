// WellScope - net/gateway.rs
//
// Typed request/response functions wrapping the backend's REST operations.
// No retry or caching logic; every function surfaces a success value or a
// `GatewayError`. Range validity (min <= max, curve extent) is the backend's
// authority; the client ships the numbers as entered.
//
// All functions block, so they are only ever called from the background
// worker threads owned by the app-layer managers, never from the UI thread.

use crate::core::model::{Curve, InterpretationReport, Sample, UploadOutcome, Well};
use crate::util::constants;
use crate::util::error::GatewayError;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

/// HTTP client for the well-log backend.
#[derive(Clone)]
pub struct Gateway {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Gateway {
    /// Create a gateway for the given base address.
    ///
    /// The per-request timeout is fixed; there is no client-side retry.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| GatewayError::Http { source: e })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base address this gateway talks to (for logging and the status bar).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the backend's database health endpoint.
    ///
    /// Returns the reported database state (e.g. "connected"). Used once at
    /// startup; the result is logged, never surfaced in the UI.
    pub fn health(&self) -> Result<String, GatewayError> {
        #[derive(serde::Deserialize)]
        struct HealthResponse {
            database: String,
        }

        let response = self
            .http
            .get(format!("{}/health/db", self.base_url))
            .send()
            .map_err(|e| GatewayError::Http { source: e })?;

        let health: HealthResponse = read_json("/health/db", response)?;
        Ok(health.database)
    }

    /// List all ingested wells.
    pub fn list_wells(&self) -> Result<Vec<Well>, GatewayError> {
        tracing::debug!("Fetching well catalog");
        let response = self
            .http
            .get(format!("{}/api/wells", self.base_url))
            .send()
            .map_err(|e| GatewayError::Http { source: e })?;

        read_json("/api/wells", response)
    }

    /// List the curves belonging to one well.
    ///
    /// The backend answers 404 (with detail) for a well with no curves; that
    /// surfaces as `GatewayError::Status` like any other non-success status.
    pub fn list_curves(&self, well_id: i64) -> Result<Vec<Curve>, GatewayError> {
        tracing::debug!(well_id, "Fetching curve list");
        let response = self
            .http
            .get(format!("{}/api/wells/{well_id}/curves", self.base_url))
            .send()
            .map_err(|e| GatewayError::Http { source: e })?;

        read_json("/api/wells/{id}/curves", response)
    }

    /// Fetch a curve's samples within a depth range, ordered by depth.
    pub fn get_samples(
        &self,
        curve_id: i64,
        min_depth: f64,
        max_depth: f64,
    ) -> Result<Vec<Sample>, GatewayError> {
        tracing::debug!(curve_id, min_depth, max_depth, "Fetching samples");
        let response = self
            .http
            .get(format!("{}/api/curves/{curve_id}/data", self.base_url))
            .query(&[("min_depth", min_depth), ("max_depth", max_depth)])
            .send()
            .map_err(|e| GatewayError::Http { source: e })?;

        read_json("/api/curves/{id}/data", response)
    }

    /// Fetch the rule-engine interpretation for a curve and depth range.
    pub fn get_interpretation(
        &self,
        curve_id: i64,
        min_depth: f64,
        max_depth: f64,
    ) -> Result<InterpretationReport, GatewayError> {
        tracing::debug!(curve_id, min_depth, max_depth, "Fetching interpretation");
        let response = self
            .http
            .post(format!("{}/api/interpret", self.base_url))
            .query(&[
                ("curve_id", curve_id.to_string()),
                ("min_depth", min_depth.to_string()),
                ("max_depth", max_depth.to_string()),
            ])
            .send()
            .map_err(|e| GatewayError::Http { source: e })?;

        read_json("/api/interpret", response)
    }

    /// Upload a LAS file as a multipart form.
    ///
    /// Duplicate detection is server-side, keyed on the original filename;
    /// a duplicate is a *successful* outcome here, not an error.
    pub fn upload_file(&self, path: &Path) -> Result<UploadOutcome, GatewayError> {
        let metadata = std::fs::metadata(path).map_err(|e| GatewayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if metadata.len() > constants::MAX_UPLOAD_BYTES {
            return Err(GatewayError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: constants::MAX_UPLOAD_BYTES,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| GatewayError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.las")
            .to_string();

        tracing::info!(file = %path.display(), bytes = bytes.len(), "Uploading LAS file");

        let form = reqwest::blocking::multipart::Form::new()
            .part("file", reqwest::blocking::multipart::Part::bytes(bytes).file_name(filename));

        let response = self
            .http
            .post(format!("{}/api/wells/upload", self.base_url))
            .multipart(form)
            .send()
            .map_err(|e| GatewayError::Http { source: e })?;

        let raw: RawUploadResponse = read_json("/api/wells/upload", response)?;
        Ok(raw.into_outcome())
    }
}

// =============================================================================
// Wire shapes
// =============================================================================

/// Raw shape of the upload response: one object with `duplicate: true` for
/// the already-ingested case, ingestion counts otherwise.
#[derive(Debug, serde::Deserialize)]
struct RawUploadResponse {
    #[serde(default)]
    duplicate: bool,
    well_id: i64,
    well_name: String,
    #[serde(default)]
    curves_ingested: usize,
    #[serde(default)]
    measurements_inserted: usize,
}

impl RawUploadResponse {
    fn into_outcome(self) -> UploadOutcome {
        if self.duplicate {
            UploadOutcome::Duplicate {
                well_id: self.well_id,
                well_name: self.well_name,
            }
        } else {
            UploadOutcome::Ingested {
                well_id: self.well_id,
                well_name: self.well_name,
                curves_ingested: self.curves_ingested,
                measurements_inserted: self.measurements_inserted,
            }
        }
    }
}

/// Read a response body, mapping non-success statuses to `Status` (with the
/// backend's `detail` field extracted when the error body carries one) and
/// body-shape mismatches to `Decode`.
fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::blocking::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| GatewayError::Http { source: e })?;

    if !status.is_success() {
        return Err(GatewayError::Status {
            status,
            detail: extract_detail(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| GatewayError::Decode { endpoint, source: e })
}

/// Pull the `detail` field out of a backend error body.
///
/// The backend reports errors as `{"detail": "..."}`; validation errors carry
/// a structured `detail`, which is rendered as compact JSON rather than lost.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
