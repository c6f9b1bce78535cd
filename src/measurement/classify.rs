use super::types::{InputRow, RawMeasurement, SummaryRow};

/// Label assigned to every input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// One executed trial: the repetition cell is an integer.
    Raw,
    /// A precomputed aggregate: the repetition cell is anything else.
    Summary,
}

/// Classify a row by whether its repetition cell parses as an integer.
///
/// Total and stateless: blank cells, textual markers and decimal numbers are
/// all `Summary`.
#[must_use]
pub fn classify(row: &InputRow) -> RowKind {
    if parse_repetition(&row.repetition).is_some() {
        RowKind::Raw
    } else {
        RowKind::Summary
    }
}

fn parse_repetition(cell: &str) -> Option<i64> {
    cell.trim().parse().ok()
}

/// The classified table, resolved once per input file.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementSet {
    /// At least one summary row exists. Raw rows from the same file are kept
    /// for inspection only.
    Precomputed {
        summaries: Vec<SummaryRow>,
        raw: Vec<RawMeasurement>,
    },
    /// Raw trials only; statistics must be computed.
    Raw(Vec<RawMeasurement>),
}

impl MeasurementSet {
    /// Raw trials present in the table, whichever variant it is.
    #[must_use]
    pub fn raw(&self) -> &[RawMeasurement] {
        match self {
            Self::Precomputed { raw, .. } | Self::Raw(raw) => raw,
        }
    }

    #[must_use]
    pub fn summary_count(&self) -> usize {
        match self {
            Self::Precomputed { summaries, .. } => summaries.len(),
            Self::Raw(_) => 0,
        }
    }
}

/// Split rows into the raw and summary partitions.
///
/// Every row lands in exactly one partition; nothing is dropped here.
#[must_use]
pub fn partition(rows: &[InputRow]) -> MeasurementSet {
    let mut raw = Vec::new();
    let mut summaries = Vec::new();

    for row in rows {
        match parse_repetition(&row.repetition) {
            Some(repetition) => raw.push(RawMeasurement::from_row(row, repetition)),
            None => summaries.push(SummaryRow::from_row(row)),
        }
    }

    tracing::debug!(
        raw = raw.len(),
        summaries = summaries.len(),
        "classified measurement rows"
    );

    if summaries.is_empty() {
        MeasurementSet::Raw(raw)
    } else {
        MeasurementSet::Precomputed { summaries, raw }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
