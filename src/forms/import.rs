//! Client-side pre-validation of CSV import files.
//!
//! Only the header row and record well-formedness are checked before the
//! file is shipped to the backend; per-row business validation stays server
//! side and comes back in the import outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportFileError {
    #[error("the file contains no data rows")]
    Empty,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),
    #[error("malformed CSV: {0}")]
    Malformed(String),
}

impl From<csv::Error> for ImportFileError {
    fn from(err: csv::Error) -> Self {
        ImportFileError::Malformed(err.to_string())
    }
}

/// Summary of a successful pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvPrecheck {
    pub rows: usize,
}

/// Verifies the header row carries every required column and counts the
/// data rows.
pub fn precheck_csv(bytes: &[u8], required: &[&str]) -> Result<CsvPrecheck, ImportFileError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = required
        .iter()
        .filter(|required| {
            !headers
                .iter()
                .any(|header| header.trim().eq_ignore_ascii_case(required))
        })
        .map(|h| h.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportFileError::MissingHeaders(missing));
    }

    let mut rows = 0;
    for record in reader.records() {
        record?;
        rows += 1;
    }
    if rows == 0 {
        return Err(ImportFileError::Empty);
    }

    Ok(CsvPrecheck { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_file() {
        let csv = b"model_name,brand\nMBP 14,Apple\nT14,Lenovo\n";
        let check = precheck_csv(csv, &["model_name"]).unwrap();
        assert_eq!(check.rows, 2);
    }

    #[test]
    fn header_match_ignores_case_and_padding() {
        let csv = b" Model_Name ,brand\nMBP 14,Apple\n";
        assert!(precheck_csv(csv, &["model_name"]).is_ok());
    }

    #[test]
    fn reports_missing_columns() {
        let csv = b"brand\nApple\n";
        match precheck_csv(csv, &["model_name", "brand"]) {
            Err(ImportFileError::MissingHeaders(missing)) => {
                assert_eq!(missing, vec!["model_name".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_header_only_files() {
        let csv = b"model_name,brand\n";
        assert!(matches!(
            precheck_csv(csv, &["model_name"]),
            Err(ImportFileError::Empty)
        ));
    }
}
