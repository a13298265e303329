use serde::Deserialize;
use validator::Validate;

/// Shared request shape for both the persisted and the preview run
/// endpoints. `num_cdes` defaults differ per endpoint, so it stays optional
/// here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRunRequest {
    #[validate(length(min = 1))]
    pub dataset1: String,
    #[validate(length(min = 1))]
    pub dataset2: String,
    pub matching_method: Option<String>,
    pub num_cdes: Option<u32>,
    #[serde(default)]
    pub selected: Vec<String>,
}
