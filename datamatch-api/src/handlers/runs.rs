use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use datamatch_core::{matching, RunPreview, RunRecord};
use validator::Validate;

use crate::{dto::CreateRunRequest, error::ApiResult, AppState};

/// All persisted runs, newest first.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<serde_json::Value>>> {
    Ok(Json(state.runs.list().await?))
}

/// Compare two datasets and persist the result, full row data included.
/// `merged` is dataset1's rows unchanged.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateRunRequest>,
) -> ApiResult<Json<RunRecord>> {
    payload.validate()?;
    let started = Instant::now();

    let (data1, data2) = tokio::try_join!(
        state.datasets.load(&payload.dataset1),
        state.datasets.load(&payload.dataset2),
    )?;

    let common_columns = matching::find_common_columns(&data1.columns, &data2.columns);

    let run = RunRecord::new(
        payload.dataset1,
        payload.dataset2,
        payload.matching_method,
        payload.num_cdes.unwrap_or(3),
        payload.selected,
        data1.rows,
        data2.rows,
        common_columns,
        started.elapsed(),
    );

    state.runs.save(&run).await?;

    Ok(Json(run))
}

/// Same comparison as `create`, but ephemeral: nothing is written.
pub async fn create_preview(
    State(state): State<AppState>,
    Json(payload): Json<CreateRunRequest>,
) -> ApiResult<Json<RunPreview>> {
    payload.validate()?;

    let (data1, data2) = tokio::try_join!(
        state.datasets.load(&payload.dataset1),
        state.datasets.load(&payload.dataset2),
    )?;

    let common_columns = matching::find_common_columns(&data1.columns, &data2.columns);

    Ok(Json(RunPreview::new(
        payload.dataset1,
        payload.dataset2,
        payload.matching_method,
        payload.num_cdes.unwrap_or(0),
        common_columns,
    )))
}

/// Return a stored run file verbatim.
pub async fn get(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    Ok(Json(state.runs.get(&run_id).await?))
}

/// Mock analytics for the results page. Identical for every run id.
pub async fn results(Path(_run_id): Path<String>) -> Json<serde_json::Value> {
    Json(crate::results::mock_payload().clone())
}
