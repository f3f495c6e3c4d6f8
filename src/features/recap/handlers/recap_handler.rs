use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::recap::dtos::{RecapBucketDto, RecapQuery};
use crate::features::recap::services::RecapService;
use crate::shared::types::{ApiResponse, Meta};

/// Grouped counts and percentages over the (optionally region-filtered) population
///
/// Region recap groups by province, or by the level below the deepest selected region.
#[utoipa::path(
    get,
    path = "/api/recap",
    params(RecapQuery),
    responses(
        (status = 200, description = "Recap buckets in display order", body = ApiResponse<Vec<RecapBucketDto>>)
    ),
    tag = "recap"
)]
pub async fn get_recap(
    State(service): State<Arc<RecapService>>,
    Query(query): Query<RecapQuery>,
) -> Result<Json<ApiResponse<Vec<RecapBucketDto>>>> {
    let buckets = service
        .compute(query.recap_type(), &query.filter())
        .await?;
    let items: Vec<RecapBucketDto> = buckets.into_iter().map(Into::into).collect();
    let total = items.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}
