//! CSV dataset loading.

use super::normalize::parse_numeric;
use super::types::{Candidate, ColumnSpec};
use crate::error::SelectError;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads candidates from a CSV file.
///
/// See [`read_candidates`] for the parsing contract.
pub fn load_candidates(
    path: impl AsRef<Path>,
    columns: &ColumnSpec,
) -> Result<Vec<Candidate>, SelectError> {
    let file = File::open(path)?;
    read_candidates(file, columns)
}

/// Reads candidates from any CSV source.
///
/// The first row is a header; header cells and data cells are trimmed
/// before use. Weight and value cells go through
/// [`parse_numeric`]; a cell that cannot be coerced fails the whole
/// load with [`SelectError::ParseNumber`]. Weights must additionally be
/// finite and non-negative.
///
/// Rows whose name was already seen are skipped with a warning — the
/// first occurrence wins.
pub fn read_candidates<R: Read>(
    reader: R,
    columns: &ColumnSpec,
) -> Result<Vec<Candidate>, SelectError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_idx = column_index(&headers, &columns.name)?;
    let weight_idx = column_index(&headers, &columns.weight)?;
    let value_idx = column_index(&headers, &columns.value)?;

    let mut candidates = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for record in rdr.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            tracing::warn!(name, "duplicate candidate name, keeping first occurrence");
            continue;
        }

        let weight = parse_cell(&record, weight_idx, &columns.weight)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(SelectError::InvalidWeight {
                name: name.to_string(),
                value: weight,
            });
        }
        let value = parse_cell(&record, value_idx, &columns.value)?;

        candidates.push(Candidate::new(name, weight, value));
    }

    Ok(candidates)
}

fn column_index(headers: &csv::StringRecord, wanted: &str) -> Result<usize, SelectError> {
    headers
        .iter()
        .position(|h| h.trim() == wanted)
        .ok_or_else(|| SelectError::MissingColumn(wanted.to_string()))
}

fn parse_cell(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
) -> Result<f64, SelectError> {
    let text = record.get(idx).unwrap_or("");
    parse_numeric(text).ok_or_else(|| SelectError::ParseNumber {
        column: column.to_string(),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn spec() -> ColumnSpec {
        ColumnSpec::new("Golfer", "OWGR", "DK")
    }

    #[test]
    fn test_read_basic() {
        let csv = "Golfer,OWGR,DK\nJon Rahm,2.1,9500\nSam Burns,14.3,7800\n";
        let candidates = read_candidates(csv.as_bytes(), &spec()).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Jon Rahm");
        assert!((candidates[0].weight - 2.1).abs() < 1e-12);
        assert!((candidates[1].value - 7800.0).abs() < 1e-12);
    }

    #[test]
    fn test_headers_and_cells_trimmed() {
        let csv = " Golfer , OWGR , DK \n  Jon Rahm  , 2.1 , 9500 \n";
        let candidates = read_candidates(csv.as_bytes(), &spec()).unwrap();
        assert_eq!(candidates[0].name, "Jon Rahm");
    }

    #[test]
    fn test_currency_value_column() {
        let csv = "Golfer,OWGR,$/Event\nJon Rahm,2.1,\"$455,690\"\n";
        let columns = ColumnSpec::new("Golfer", "OWGR", "$/Event");
        let candidates = read_candidates(csv.as_bytes(), &columns).unwrap();
        assert!((candidates[0].value - 455690.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_column() {
        let csv = "Golfer,OWGR\nJon Rahm,2.1\n";
        let err = read_candidates(csv.as_bytes(), &spec()).unwrap_err();
        assert!(matches!(err, SelectError::MissingColumn(c) if c == "DK"));
    }

    #[test]
    fn test_unparseable_weight() {
        let csv = "Golfer,OWGR,DK\nJon Rahm,n/a,9500\n";
        let err = read_candidates(csv.as_bytes(), &spec()).unwrap_err();
        assert!(matches!(err, SelectError::ParseNumber { column, .. } if column == "OWGR"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let csv = "Golfer,OWGR,DK\nJon Rahm,-2.1,9500\n";
        let err = read_candidates(csv.as_bytes(), &spec()).unwrap_err();
        assert!(matches!(err, SelectError::InvalidWeight { .. }));
    }

    #[test]
    fn test_duplicate_name_first_wins() {
        let csv = "Golfer,OWGR,DK\nJon Rahm,2.1,9500\nJon Rahm,50.0,100\n";
        let candidates = read_candidates(csv.as_bytes(), &spec()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].weight - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_blank_name_skipped() {
        let csv = "Golfer,OWGR,DK\n,2.1,9500\nSam Burns,14.3,7800\n";
        let candidates = read_candidates(csv.as_bytes(), &spec()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Sam Burns");
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "Golfer,OWGR,DK").unwrap();
        writeln!(tmp, "Jon Rahm,2.1,9500").unwrap();
        tmp.flush().unwrap();

        let candidates = load_candidates(tmp.path(), &spec()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Jon Rahm");
    }
}
