use std::path::Path;

use csv::StringRecord;

use crate::error::EvalError;

// Per-pair configuration metadata, read once from the Round2 header and its
// first data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMeta {
    pub category: char,
    pub nodes: usize,
    pub threads: u32,
    pub senders: usize,
}

// Reads a Round1 table and reduces every data row to the maximum of its
// "Total" columns, in file order.
pub fn load_round1_maxima(path: &Path) -> Result<Vec<f64>, EvalError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let total_cols = columns_named(&headers, "Total");
    if total_cols.is_empty() {
        return Err(malformed(path, "no \"Total\" column in header".into()));
    }

    let mut maxima = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let mut row_max = f64::NEG_INFINITY;
        for &col in &total_cols {
            row_max = row_max.max(parse_cell(&record, col, row, &headers, path)?);
        }
        maxima.push(row_max);
    }
    Ok(maxima)
}

// Reads a Round2 table and combines every "Total" cell with the Round1
// maximum of the same row. Row correspondence is positional: exactly one
// maximum per Round2 data row, any count mismatch is an error.
pub fn aggregate_pair(
    path: &Path,
    round1_maxima: &[f64],
) -> Result<(ConfigMeta, Vec<f64>), EvalError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let total_cols = columns_named(&headers, "Total");
    let node_cols = columns_prefixed(&headers, "Node");
    if total_cols.is_empty() {
        return Err(malformed(path, "no \"Total\" column in header".into()));
    }

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    if records.len() != round1_maxima.len() {
        return Err(EvalError::Alignment {
            path: path.to_path_buf(),
            rows: records.len(),
            maxima: round1_maxima.len(),
        });
    }

    let meta = extract_meta(&records[0], &node_cols, path)?;

    let mut samples = Vec::with_capacity(records.len() * total_cols.len());
    for (row, (record, prev_max)) in records.iter().zip(round1_maxima).enumerate() {
        for &col in &total_cols {
            samples.push(parse_cell(record, col, row, &headers, path)? + prev_max);
        }
    }
    Ok((meta, samples))
}

fn extract_meta(
    first: &StringRecord,
    node_cols: &[usize],
    path: &Path,
) -> Result<ConfigMeta, EvalError> {
    let category = first
        .get(0)
        .and_then(|cell| cell.chars().next())
        .ok_or_else(|| malformed(path, "empty first column in the first data row".into()))?;
    let threads_cell = first
        .get(1)
        .ok_or_else(|| malformed(path, "first data row has no thread count column".into()))?;
    let threads = threads_cell
        .parse::<u32>()
        .map_err(|_| malformed(path, format!("invalid thread count {threads_cell:?}")))?;
    let senders = node_cols
        .iter()
        .filter(|&&col| first.get(col) == Some("sending"))
        .count();

    Ok(ConfigMeta {
        category,
        nodes: node_cols.len(),
        threads,
        senders,
    })
}

fn columns_named(headers: &StringRecord, name: &str) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .map(|(col, _)| col)
        .collect()
}

fn columns_prefixed(headers: &StringRecord, prefix: &str) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.starts_with(prefix))
        .map(|(col, _)| col)
        .collect()
}

fn parse_cell(
    record: &StringRecord,
    col: usize,
    row: usize,
    headers: &StringRecord,
    path: &Path,
) -> Result<f64, EvalError> {
    let cell = record
        .get(col)
        .ok_or_else(|| malformed(path, format!("row {}: missing column {}", row + 1, col)))?;
    cell.parse::<f64>().map_err(|_| {
        malformed(
            path,
            format!(
                "row {}, column {} ({}): invalid number {:?}",
                row + 1,
                col,
                headers.get(col).unwrap_or("?"),
                cell
            ),
        )
    })
}

fn malformed(path: &Path, reason: String) -> EvalError {
    EvalError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    }
}
