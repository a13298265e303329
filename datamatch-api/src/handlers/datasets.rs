use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use datamatch_core::Dataset;
use datamatch_storage::{sanitize_filename, DatasetStore};

use crate::{
    dto::DatasetSummary,
    error::{ApiError, ApiResult},
    AppState,
};

/// Scan the upload directory and return every dataset with its full row
/// data. Re-parses every file on each call.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Dataset>>> {
    let datasets = state.datasets.list(&state.uploaded_by).await?;
    Ok(Json(datasets))
}

/// Accept a multipart upload with a `file` field and an optional `name`
/// field. Only `.csv` and `.xlsx` are accepted; anything else is rejected
/// before a single byte lands on disk. A supplied name overwrites any
/// existing file stored under it.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<DatasetSummary>> {
    let mut display_name: Option<String> = None;
    let mut original_filename: Option<String> = None;
    let mut file_bytes: Option<axum::body::Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => display_name = Some(field.text().await?),
            Some("file") => {
                original_filename = field.file_name().map(str::to_string);
                file_bytes = Some(field.bytes().await?);
            }
            _ => {}
        }
    }

    let bytes = file_bytes.ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;
    let original = original_filename.unwrap_or_default();
    if original.is_empty() {
        return Err(ApiError::BadRequest("No file selected".to_string()));
    }

    let Some(ext) = DatasetStore::allowed_extension(&original) else {
        return Err(ApiError::BadRequest("Invalid file type".to_string()));
    };

    let display_name = display_name.filter(|name| !name.is_empty());
    if let Some(name) = &display_name {
        if name.contains(['/', '\\']) || name.contains("..") {
            return Err(ApiError::BadRequest("Invalid file name".to_string()));
        }
    }

    let filename = match &display_name {
        Some(name) => format!("{name}.{ext}"),
        None => sanitize_filename(&original),
    };

    let id = state.datasets.store(&filename, &bytes).await?;

    let name = display_name.unwrap_or_else(|| {
        filename
            .strip_suffix(&format!(".{ext}"))
            .unwrap_or(&filename)
            .to_string()
    });

    Ok(Json(DatasetSummary {
        id,
        name,
        uploaded_by: state.uploaded_by.clone(),
        runs_count: 0,
        upload_date: Utc::now(),
    }))
}
