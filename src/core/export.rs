// WellScope - core/export.rs
//
// CSV export of the currently displayed curve samples.
// Core layer: writes to any Write trait object.

use crate::core::model::Sample;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export samples to CSV format.
///
/// Writes: depth, value. Null values are written as an empty field so the
/// output round-trips the backend's representation.
pub fn export_csv<W: Write>(
    samples: &[Sample],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["depth", "value"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for sample in samples {
        let value = sample.value.map(|v| v.to_string()).unwrap_or_default();
        csv_writer
            .write_record([&sample.depth.to_string(), &value])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_csv_export() {
        let samples = vec![
            Sample {
                depth: 1000.0,
                value: Some(5.25),
            },
            Sample {
                depth: 1000.5,
                value: None,
            },
            Sample {
                depth: 1001.0,
                value: Some(7.0),
            },
        ];
        let mut buf = Vec::new();
        let count = export_csv(&samples, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "depth,value");
        assert_eq!(lines[1], "1000,5.25");
        assert_eq!(lines[2], "1000.5,");
        assert_eq!(lines[3], "1001,7");
    }

    #[test]
    fn test_csv_export_empty() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 0);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.trim_end(), "depth,value");
    }
}
