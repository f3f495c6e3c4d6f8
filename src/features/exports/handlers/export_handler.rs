use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::Result;
use crate::features::exports::services::{CsvFile, ExportService};
use crate::features::people::dtos::PersonListQuery;
use crate::features::recap::dtos::RecapQuery;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

impl IntoResponse for CsvFile {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            [
                (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.content,
        )
            .into_response()
    }
}

/// Download the people list as CSV
///
/// Uses the same search, sort and region parameters as the list endpoint.
#[utoipa::path(
    get,
    path = "/api/exports/people",
    params(PersonListQuery),
    responses(
        (status = 200, description = "data-penduduk.csv", content_type = "text/csv", body = String),
        (status = 400, description = "Unknown sort key")
    ),
    tag = "exports"
)]
pub async fn export_people(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<PersonListQuery>,
) -> Result<CsvFile> {
    service.people_csv(&query.to_query()?).await
}

/// Download a recap as CSV
#[utoipa::path(
    get,
    path = "/api/exports/recap",
    params(RecapQuery),
    responses(
        (status = 200, description = "rekap-<type>.csv; empty for an unknown type", content_type = "text/csv", body = String)
    ),
    tag = "exports"
)]
pub async fn export_recap(
    State(service): State<Arc<ExportService>>,
    Query(query): Query<RecapQuery>,
) -> Result<CsvFile> {
    let raw_type = query.recap_type.as_deref().unwrap_or_default();
    service.recap_csv(raw_type, &query.filter()).await
}
