use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use datamatch_core::{CoreError, Result, RowRecord, TabularData};

/// Parse a stored dataset file, dispatching on extension.
pub fn read_tabular(path: &Path) -> Result<TabularData> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("xlsx") => read_xlsx(path),
        _ => Err(CoreError::InvalidFileType),
    }
}

/// Fully materialize a CSV file: first record is the header, every
/// subsequent record becomes a column->value map with inferred scalars.
pub fn read_csv(path: &Path) -> Result<TabularData> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| CoreError::MalformedFile(e.to_string()))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| CoreError::MalformedFile(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CoreError::MalformedFile(e.to_string()))?;
        let mut row = RowRecord::new();
        for (column, raw) in columns.iter().zip(record.iter()) {
            row.insert(column.clone(), infer_scalar(raw));
        }
        rows.push(row);
    }

    Ok(TabularData::new(columns, rows))
}

/// Fully materialize the first sheet of an XLSX workbook. The first row is
/// the header; cells keep their native Excel types.
pub fn read_xlsx(path: &Path) -> Result<TabularData> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| CoreError::MalformedFile(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CoreError::MalformedFile("workbook has no sheets".to_string()))?
        .map_err(|e| CoreError::MalformedFile(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = match sheet_rows.next() {
        Some(header) => header.iter().map(|cell| cell.to_string()).collect(),
        None => return Ok(TabularData::default()),
    };

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row = RowRecord::new();
        for (column, cell) in columns.iter().zip(sheet_row.iter()) {
            row.insert(column.clone(), cell_to_value(cell));
        }
        rows.push(row);
    }

    Ok(TabularData::new(columns, rows))
}

/// CSV fields are untyped text; recover the scalar types the rest of the
/// pipeline expects. Empty fields become null.
fn infer_scalar(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return serde_json::Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return serde_json::Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if float.is_finite() {
            return serde_json::Value::from(float);
        }
    }
    match trimmed {
        "true" | "True" | "TRUE" => return serde_json::Value::Bool(true),
        "false" | "False" | "FALSE" => return serde_json::Value::Bool(false),
        _ => {}
    }
    serde_json::Value::from(raw)
}

fn cell_to_value(cell: &Data) -> serde_json::Value {
    match cell {
        Data::Empty => serde_json::Value::Null,
        Data::String(s) => serde_json::Value::from(s.as_str()),
        Data::Int(i) => serde_json::Value::from(*i),
        Data::Float(f) => serde_json::Value::from(*f),
        Data::Bool(b) => serde_json::Value::from(*b),
        Data::DateTimeIso(s) | Data::DurationIso(s) => serde_json::Value::from(s.as_str()),
        // Serial datetimes and error cells have no JSON-native form.
        other => serde_json::Value::from(other.to_string()),
    }
}
