use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{
    DistrictListQuery, DistrictResponseDto, ProvinceResponseDto, RegencyListQuery,
    RegencyResponseDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

fn list_response<T>(items: Vec<T>) -> Json<ApiResponse<Vec<T>>> {
    let total = items.len() as i64;
    Json(ApiResponse::success(Some(items), None, Some(Meta { total })))
}

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    responses(
        (status = 200, description = "List of provinces ordered by name", body = ApiResponse<Vec<ProvinceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces().await?;
    Ok(list_response(provinces.into_iter().map(Into::into).collect()))
}

// ==================== Regency Handlers ====================

/// List regencies, filtered by parent province
#[utoipa::path(
    get,
    path = "/api/regions/regencies",
    params(RegencyListQuery),
    responses(
        (status = 200, description = "Regencies of the province (empty when no province given)", body = ApiResponse<Vec<RegencyResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_regencies(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegencyListQuery>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = service
        .list_regencies(query.province_code.as_deref())
        .await?;
    Ok(list_response(regencies.into_iter().map(Into::into).collect()))
}

/// List regencies in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/regencies",
    params(
        ("code" = String, Path, description = "Province code (2 digits)")
    ),
    responses(
        (status = 200, description = "List of regencies in the province", body = ApiResponse<Vec<RegencyResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = service.list_regencies(Some(&code)).await?;
    Ok(list_response(regencies.into_iter().map(Into::into).collect()))
}

// ==================== District Handlers ====================

/// List districts, filtered by parent regency
#[utoipa::path(
    get,
    path = "/api/regions/districts",
    params(DistrictListQuery),
    responses(
        (status = 200, description = "Districts of the regency (empty when no regency given)", body = ApiResponse<Vec<DistrictResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_districts(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<DistrictListQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service
        .list_districts(query.regency_code.as_deref())
        .await?;
    Ok(list_response(districts.into_iter().map(Into::into).collect()))
}

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{code}/districts",
    params(
        ("code" = String, Path, description = "Regency code (4 digits)")
    ),
    responses(
        (status = 200, description = "List of districts in the regency", body = ApiResponse<Vec<DistrictResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service.list_districts(Some(&code)).await?;
    Ok(list_response(districts.into_iter().map(Into::into).collect()))
}
