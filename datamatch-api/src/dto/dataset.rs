use chrono::{DateTime, Utc};
use datamatch_core::DatasetId;
use serde::{Deserialize, Serialize};

/// Returned from an upload. Carries the descriptor metadata only; row data
/// is served by the listing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: DatasetId,
    pub name: String,
    pub uploaded_by: String,
    pub runs_count: i64,
    pub upload_date: DateTime<Utc>,
}
