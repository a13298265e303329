use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::DatasetId;

/// One parsed row, column name to scalar value.
pub type RowRecord = serde_json::Map<String, serde_json::Value>;

/// A fully materialized tabular file: header order preserved, every row
/// expanded into a column->value record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<RowRecord>,
}

impl TabularData {
    pub fn new(columns: Vec<String>, rows: Vec<RowRecord>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Descriptor returned when listing stored datasets. Carries the full row
/// data; there is no size cap and no schema contract on the columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub name: String,
    pub uploaded_by: String,
    pub runs_count: i64,
    pub upload_date: DateTime<Utc>,
    pub data: Vec<RowRecord>,
}

impl Dataset {
    pub fn new(
        id: DatasetId,
        name: String,
        uploaded_by: String,
        upload_date: DateTime<Utc>,
        data: Vec<RowRecord>,
    ) -> Self {
        Self {
            id,
            name,
            uploaded_by,
            // Never maintained; the system does not track run usage per dataset.
            runs_count: 0,
            upload_date,
            data,
        }
    }
}
