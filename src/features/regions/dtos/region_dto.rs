use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{District, Province, Regency};

/// Query parameters for listing regencies
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegencyListQuery {
    /// Parent province code; when absent the list is empty
    #[param(example = "31")]
    pub province_code: Option<String>,
}

/// Query parameters for listing districts
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DistrictListQuery {
    /// Parent regency code; when absent the list is empty
    #[param(example = "3171")]
    pub regency_code: Option<String>,
}

/// Response DTO for province data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceResponseDto {
    pub code: String,
    pub name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            code: province.code,
            name: province.name,
        }
    }
}

/// Response DTO for regency data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegencyResponseDto {
    pub code: String,
    pub name: String,
    pub province_code: String,
}

impl From<Regency> for RegencyResponseDto {
    fn from(regency: Regency) -> Self {
        Self {
            code: regency.code,
            name: regency.name,
            province_code: regency.province_code,
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    pub code: String,
    pub name: String,
    pub regency_code: String,
}

impl From<District> for DistrictResponseDto {
    fn from(district: District) -> Self {
        Self {
            code: district.code,
            name: district.name,
            regency_code: district.regency_code,
        }
    }
}
