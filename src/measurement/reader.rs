use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Result, SortbenchError};

use super::types::InputRow;

/// Required header names, in the order the producer writes them.
pub const COLUMNS: [&str; 7] = [
    "algoritmo",
    "cenario",
    "tamanho",
    "repeticao",
    "tempo_ms",
    "comparacoes",
    "trocas",
];

/// Read a measurement table from disk.
///
/// # Errors
/// Returns an error if the file cannot be opened, is not valid delimited text,
/// or lacks one of the required columns.
pub fn read_table(path: &Path) -> Result<Vec<InputRow>> {
    let file = File::open(path).map_err(|source| SortbenchError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_table_from(BufReader::new(file), path)
}

/// Read a measurement table from any reader. `source` is only used in errors.
///
/// Columns are located by header name, so extra columns and reordering are
/// tolerated. Short records yield empty cells rather than errors.
///
/// # Errors
/// Returns an error on malformed input or a missing required column.
pub fn read_table_from<R: Read>(reader: R, source: &Path) -> Result<Vec<InputRow>> {
    let csv_error = |source_err: csv::Error| SortbenchError::Csv {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let indices = column_indices(&headers, source)?;

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let line = record
            .position()
            .map_or(offset as u64 + 2, csv::Position::line);
        let cell = |i: usize| record.get(indices[i]).unwrap_or("");
        rows.push(InputRow::from_cells(
            line,
            [cell(0), cell(1), cell(2), cell(3), cell(4), cell(5), cell(6)],
        ));
    }

    tracing::debug!(path = %source.display(), rows = rows.len(), "read measurement table");
    Ok(rows)
}

fn column_indices(headers: &StringRecord, source: &Path) -> Result<[usize; 7]> {
    let mut indices = [0usize; 7];
    for (slot, name) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == name)
            .ok_or_else(|| SortbenchError::MissingColumn {
                path: source.to_path_buf(),
                column: name.to_string(),
            })?;
    }
    Ok(indices)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
