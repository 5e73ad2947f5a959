//! CSV parsing into Polars DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

fn read_options() -> CsvReadOptions {
    // Scan every row so a late float in an integer-looking column still parses.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
}

/// Parses CSV bytes (e.g. an HTTP response body) into a DataFrame.
///
/// `origin` names the source in error messages.
pub fn read_csv_bytes(bytes: &[u8], origin: &str) -> Result<DataFrame> {
    let content = bytes.strip_prefix("\u{feff}".as_bytes()).unwrap_or(bytes);
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyDataset {
            origin: origin.to_string(),
        });
    }

    read_options()
        .into_reader_with_file_handle(Cursor::new(content.to_vec()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
}

/// Reads a CSV file from disk into a DataFrame.
pub fn read_csv_file(path: &Path) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_bytes(&bytes, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_bytes() {
        let df = read_csv_bytes(b"ano,usd\n2023,150000\n2024,30000\n", "inline").unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_read_csv_bytes_strips_bom() {
        let df = read_csv_bytes("\u{feff}ano,usd\n2023,1\n".as_bytes(), "inline").unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["ano", "usd"]);
    }

    #[test]
    fn test_read_csv_bytes_blank_input() {
        let result = read_csv_bytes(b"  \n", "inline");
        assert!(matches!(result, Err(IngestError::EmptyDataset { .. })));
    }

    #[test]
    fn test_read_csv_file() {
        let file = create_temp_csv("ano,cargo\n2023,Data Scientist\n");
        let df = read_csv_file(file.path()).unwrap();
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_read_csv_file_not_found() {
        let result = read_csv_file(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
