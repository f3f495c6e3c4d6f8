use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::people::dtos::{PersonListQuery, PersonResponseDto, SavePersonDto};
use crate::features::people::services::PersonService;
use crate::shared::dates::today;
use crate::shared::types::{ApiResponse, Meta};

/// List people with optional search, sort and region filter
#[utoipa::path(
    get,
    path = "/api/people",
    params(PersonListQuery),
    responses(
        (status = 200, description = "Matching people in the requested order", body = ApiResponse<Vec<PersonResponseDto>>),
        (status = 400, description = "Unknown sort key")
    ),
    tag = "people"
)]
pub async fn list_people(
    State(service): State<Arc<PersonService>>,
    Query(query): Query<PersonListQuery>,
) -> Result<Json<ApiResponse<Vec<PersonResponseDto>>>> {
    let people = service.list(&query.to_query()?).await?;
    let today = today();
    let items: Vec<PersonResponseDto> = people
        .into_iter()
        .map(|p| PersonResponseDto::from_detail(p, today))
        .collect();
    let total = items.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/api/people/{id}",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person found", body = ApiResponse<PersonResponseDto>),
        (status = 404, description = "Person not found")
    ),
    tag = "people"
)]
pub async fn get_person(
    State(service): State<Arc<PersonService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PersonResponseDto>>> {
    let person = service.get(id).await?;
    Ok(Json(ApiResponse::success(
        Some(PersonResponseDto::from_detail(person, today())),
        None,
        None,
    )))
}

/// Save a person: create when `id` is absent, otherwise replace the existing record
#[utoipa::path(
    post,
    path = "/api/people",
    request_body = SavePersonDto,
    responses(
        (status = 201, description = "Person created", body = ApiResponse<PersonResponseDto>),
        (status = 200, description = "Person updated", body = ApiResponse<PersonResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Person to update not found"),
        (status = 409, description = "NIK already registered")
    ),
    tag = "people"
)]
pub async fn save_person(
    State(service): State<Arc<PersonService>>,
    AppJson(dto): AppJson<SavePersonDto>,
) -> Result<(StatusCode, Json<ApiResponse<PersonResponseDto>>)> {
    let dto = dto.trimmed();
    dto.validate()?;

    let id = dto.id;
    let person = service.save(id, dto.into()).await?;
    let (status, message) = match id {
        Some(_) => (StatusCode::OK, "Data penduduk berhasil diperbarui"),
        None => (StatusCode::CREATED, "Data penduduk berhasil disimpan"),
    };
    Ok((
        status,
        Json(ApiResponse::success(
            Some(PersonResponseDto::from_detail(person, today())),
            Some(message.to_string()),
            None,
        )),
    ))
}

/// Replace an existing person
#[utoipa::path(
    put,
    path = "/api/people/{id}",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    request_body = SavePersonDto,
    responses(
        (status = 200, description = "Person updated", body = ApiResponse<PersonResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Person not found"),
        (status = 409, description = "NIK already registered")
    ),
    tag = "people"
)]
pub async fn update_person(
    State(service): State<Arc<PersonService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SavePersonDto>,
) -> Result<Json<ApiResponse<PersonResponseDto>>> {
    let dto = dto.trimmed();
    dto.validate()?;

    let person = service.save(Some(id), dto.into()).await?;
    Ok(Json(ApiResponse::success(
        Some(PersonResponseDto::from_detail(person, today())),
        Some("Data penduduk berhasil diperbarui".to_string()),
        None,
    )))
}

/// Delete a person permanently
#[utoipa::path(
    delete,
    path = "/api/people/{id}",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person deleted"),
        (status = 404, description = "Person not found")
    ),
    tag = "people"
)]
pub async fn delete_person(
    State(service): State<Arc<PersonService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data penduduk berhasil dihapus".to_string()),
        None,
    )))
}
