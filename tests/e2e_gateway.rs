// WellScope - tests/e2e_gateway.rs
//
// End-to-end tests for the remote data gateway.
//
// These tests exercise real TCP sockets, real HTTP request framing, and the
// real reqwest client against a minimal in-process backend fixture — no
// mocks, no stubs. This exercises the full path from a typed gateway call to
// decoded model objects, including multipart upload framing, the backend's
// `detail` error shape, and non-success status mapping.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

use wellscope::core::model::UploadOutcome;
use wellscope::core::stats;
use wellscope::net::gateway::Gateway;
use wellscope::util::error::GatewayError;

// =============================================================================
// Backend fixture
// =============================================================================

/// Routing function: (method, request target) -> (status, JSON body).
type Router = fn(&str, &str) -> (u16, String);

/// Spawn a one-shot backend serving exactly `connections` requests.
///
/// Every response carries `Connection: close`, so each gateway call uses one
/// connection and the fixture thread terminates deterministically.
fn spawn_backend(connections: usize, router: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture listener address");

    let handle = std::thread::spawn(move || {
        for _ in 0..connections {
            match listener.accept() {
                Ok((stream, _)) => handle_connection(stream, router),
                Err(_) => return,
            }
        }
    });

    (format!("http://{addr}"), handle)
}

fn handle_connection(stream: TcpStream, router: Router) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let target = parts.next().unwrap_or("").to_string();

    // Drain headers, tracking the body length so the request is fully read
    // before the response goes out (multipart uploads have a body).
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    break;
                }
                let lower = trimmed.to_ascii_lowercase();
                if let Some(value) = lower.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            Err(_) => return,
        }
    }
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        if reader.read_exact(&mut body).is_err() {
            return;
        }
    }

    let (status, body) = router(&method, &target);
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\r\n{body}",
        body.len()
    );

    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

// =============================================================================
// Catalog E2E
// =============================================================================

/// Listing wells decodes the full catalog shape, timestamps included.
#[test]
fn e2e_list_wells_decodes_catalog() {
    fn router(method: &str, target: &str) -> (u16, String) {
        assert_eq!(method, "GET");
        assert_eq!(target, "/api/wells");
        (
            200,
            r#"[
                {"id": 1, "name": "VOLVE F-11", "original_filename": "volve_f11.las",
                 "created_at": "2026-08-06T10:15:00"},
                {"id": 2, "name": "VOLVE F-12", "original_filename": "volve_f12.las",
                 "created_at": "2026-08-06T11:30:00.123456"}
            ]"#
            .to_string(),
        )
    }

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    let wells = gateway.list_wells().unwrap();
    assert_eq!(wells.len(), 2);
    assert_eq!(wells[0].name, "VOLVE F-11");
    assert_eq!(wells[1].original_filename, "volve_f12.las");

    handle.join().unwrap();
}

/// Listing curves decodes mnemonic, unit, and nullable description.
#[test]
fn e2e_list_curves_decodes_units() {
    fn router(method: &str, target: &str) -> (u16, String) {
        assert_eq!(method, "GET");
        assert_eq!(target, "/api/wells/1/curves");
        (
            200,
            r#"[
                {"id": 7, "mnemonic": "GR", "unit": "API", "description": "Gamma Ray"},
                {"id": 8, "mnemonic": "RHOB", "unit": null, "description": null}
            ]"#
            .to_string(),
        )
    }

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    let curves = gateway.list_curves(1).unwrap();
    assert_eq!(curves.len(), 2);
    assert_eq!(curves[0].label(), "GR [API]");
    assert_eq!(curves[1].label(), "RHOB");

    handle.join().unwrap();
}

/// A well with no curves is a 404 with detail; the gateway surfaces it as a
/// status error carrying the backend's reason.
#[test]
fn e2e_list_curves_not_found_carries_detail() {
    fn router(_method: &str, _target: &str) -> (u16, String) {
        (404, r#"{"detail": "No curves found for this well."}"#.to_string())
    }

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    match gateway.list_curves(9) {
        Err(GatewayError::Status { status, detail }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(detail.as_deref(), Some("No curves found for this well."));
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    handle.join().unwrap();
}

// =============================================================================
// Samples E2E
// =============================================================================

/// The depth bounds travel as query parameters and the ordered samples
/// (nulls included) decode; the derived statistics match the interval.
#[test]
fn e2e_get_samples_roundtrip_with_stats() {
    fn router(method: &str, target: &str) -> (u16, String) {
        assert_eq!(method, "GET");
        assert!(
            target.starts_with("/api/curves/7/data?"),
            "unexpected target {target}"
        );
        assert!(target.contains("min_depth="), "missing min_depth: {target}");
        assert!(target.contains("max_depth="), "missing max_depth: {target}");
        (
            200,
            r#"[
                {"depth": 1000.0, "value": 5.0},
                {"depth": 1250.0, "value": null},
                {"depth": 1500.0, "value": 7.0},
                {"depth": 2000.0, "value": 3.0}
            ]"#
            .to_string(),
        )
    }

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    let samples = gateway.get_samples(7, 1000.0, 2000.0).unwrap();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[1].value, None);

    let derived = stats::compute(&samples).unwrap();
    assert_eq!(derived.count, 3);
    assert_eq!(derived.min, 3.0);
    assert_eq!(derived.max, 7.0);
    assert!((derived.average - 5.0).abs() < 1e-12);

    handle.join().unwrap();
}

/// An inverted range is the backend's call: 400 with detail.
#[test]
fn e2e_get_samples_inverted_range_is_backend_error() {
    fn router(_method: &str, _target: &str) -> (u16, String) {
        (
            400,
            r#"{"detail": "min_depth cannot be greater than max_depth."}"#.to_string(),
        )
    }

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    match gateway.get_samples(7, 2000.0, 1000.0) {
        Err(GatewayError::Status { status, detail }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(detail.unwrap().contains("min_depth"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    handle.join().unwrap();
}

/// A connection-level failure surfaces as a transport error, distinct from
/// backend-reported statuses.
#[test]
fn e2e_unreachable_backend_is_transport_error() {
    let gateway = Gateway::new("http://127.0.0.1:1").unwrap();
    match gateway.list_wells() {
        Err(GatewayError::Http { .. }) => {}
        other => panic!("expected Http error, got {other:?}"),
    }
}

// =============================================================================
// Interpretation E2E
// =============================================================================

/// The interpretation report decodes in full: echoed curve, server
/// statistics, and the ordered statement list.
#[test]
fn e2e_get_interpretation_decodes_report() {
    fn router(method: &str, target: &str) -> (u16, String) {
        assert_eq!(method, "POST");
        assert!(target.starts_with("/api/interpret?"), "unexpected target {target}");
        assert!(target.contains("curve_id=7"), "missing curve_id: {target}");
        (
            200,
            r#"{
                "curve": "GR",
                "statistics": {"min": 3.0, "max": 7.0, "average": 5.0,
                               "std_dev": 1.63, "count": 3},
                "interpretation": [
                    "Low variability suggests stable formation properties.",
                    "No strong directional trend observed in selected interval."
                ]
            }"#
            .to_string(),
        )
    }

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    let report = gateway.get_interpretation(7, 1000.0, 2000.0).unwrap();
    assert_eq!(report.curve, "GR");
    assert_eq!(report.statistics.count, 3);
    assert_eq!(report.interpretation.len(), 2);
    assert!(report.interpretation[0].contains("Low variability"));

    handle.join().unwrap();
}

// =============================================================================
// Upload E2E
// =============================================================================

fn write_las_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("sample.las");
    std::fs::write(
        &path,
        "~Version\n VERS. 2.0 :\n~Well\n WELL. SAMPLE :\n~ASCII\n1000.0 5.0\n",
    )
    .unwrap();
    path
}

/// Uploading a new file posts multipart and decodes the ingestion counts.
#[test]
fn e2e_upload_new_file_is_ingested() {
    fn router(method: &str, target: &str) -> (u16, String) {
        assert_eq!(method, "POST");
        assert_eq!(target, "/api/wells/upload");
        (
            200,
            r#"{"well_id": 5, "well_name": "SAMPLE", "curves_ingested": 3,
                "measurements_inserted": 420}"#
                .to_string(),
        )
    }

    let dir = tempfile::tempdir().unwrap();
    let las_path = write_las_fixture(&dir);

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    match gateway.upload_file(&las_path).unwrap() {
        UploadOutcome::Ingested {
            well_id,
            well_name,
            curves_ingested,
            measurements_inserted,
        } => {
            assert_eq!(well_id, 5);
            assert_eq!(well_name, "SAMPLE");
            assert_eq!(curves_ingested, 3);
            assert_eq!(measurements_inserted, 420);
        }
        other => panic!("expected Ingested, got {other:?}"),
    }

    handle.join().unwrap();
}

/// Re-uploading is a successful duplicate outcome, not an error.
#[test]
fn e2e_upload_duplicate_returns_existing_well() {
    fn router(_method: &str, _target: &str) -> (u16, String) {
        (
            200,
            r#"{"duplicate": true, "well_id": 5, "well_name": "SAMPLE",
                "message": "File already uploaded."}"#
                .to_string(),
        )
    }

    let dir = tempfile::tempdir().unwrap();
    let las_path = write_las_fixture(&dir);

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    match gateway.upload_file(&las_path).unwrap() {
        UploadOutcome::Duplicate { well_id, well_name } => {
            assert_eq!(well_id, 5);
            assert_eq!(well_name, "SAMPLE");
        }
        other => panic!("expected Duplicate, got {other:?}"),
    }

    handle.join().unwrap();
}

/// A backend rejection carries its detail through to the caller.
#[test]
fn e2e_upload_rejected_carries_detail() {
    fn router(_method: &str, _target: &str) -> (u16, String) {
        (400, r#"{"detail": "Only LAS files are allowed."}"#.to_string())
    }

    let dir = tempfile::tempdir().unwrap();
    let las_path = write_las_fixture(&dir);

    let (base_url, handle) = spawn_backend(1, router);
    let gateway = Gateway::new(&base_url).unwrap();

    match gateway.upload_file(&las_path) {
        Err(error) => {
            assert_eq!(error.backend_detail(), Some("Only LAS files are allowed."));
        }
        Ok(other) => panic!("expected rejection, got {other:?}"),
    }

    handle.join().unwrap();
}

/// A missing local file never reaches the wire.
#[test]
fn e2e_upload_missing_file_fails_locally() {
    let gateway = Gateway::new("http://127.0.0.1:1").unwrap();
    match gateway.upload_file(std::path::Path::new("/nonexistent/missing.las")) {
        Err(GatewayError::Io { .. }) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}
