use utoipa::{Modify, OpenApi};

use crate::features::exports::handlers as exports_handlers;
use crate::features::people::{
    dtos as people_dtos, handlers as people_handlers, models as people_models,
};
use crate::features::recap::{
    dtos as recap_dtos, handlers as recap_handlers, models as recap_models,
};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::list_regencies,
        regions_handlers::list_regencies_by_province,
        regions_handlers::list_districts,
        regions_handlers::list_districts_by_regency,
        // People
        people_handlers::list_people,
        people_handlers::get_person,
        people_handlers::save_person,
        people_handlers::update_person,
        people_handlers::delete_person,
        // Recap
        recap_handlers::get_recap,
        // Exports
        exports_handlers::export_people,
        exports_handlers::export_recap,
    ),
    components(
        schemas(
            Meta,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::RegencyResponseDto,
            regions_dtos::DistrictResponseDto,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<Vec<regions_dtos::RegencyResponseDto>>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            // People
            people_models::Education,
            people_dtos::SavePersonDto,
            people_dtos::PersonResponseDto,
            ApiResponse<people_dtos::PersonResponseDto>,
            ApiResponse<Vec<people_dtos::PersonResponseDto>>,
            // Recap
            recap_models::RecapType,
            recap_dtos::RecapBucketDto,
            ApiResponse<Vec<recap_dtos::RecapBucketDto>>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts)"),
        (name = "people", description = "Population registry records"),
        (name = "recap", description = "Population counts and percentages by age, income, education or region"),
        (name = "exports", description = "CSV downloads"),
    ),
    info(
        title = "Penduduk Admin API",
        version = "0.1.0",
        description = "API documentation for the population registry admin",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
