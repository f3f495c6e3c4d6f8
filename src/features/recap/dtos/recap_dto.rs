use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::recap::models::{RecapBucket, RecapType};
use crate::features::regions::selection::RegionFilter;

/// Query parameters for a recap and its CSV export
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RecapQuery {
    /// One of age, income, education, region. Anything else yields an empty recap.
    #[serde(rename = "type")]
    #[param(example = "age")]
    pub recap_type: Option<String>,

    #[param(example = "31")]
    pub province_code: Option<String>,
    pub regency_code: Option<String>,
    pub district_code: Option<String>,
}

impl RecapQuery {
    pub fn recap_type(&self) -> Option<RecapType> {
        self.recap_type.as_deref().and_then(RecapType::parse)
    }

    /// Each supplied code narrows the population on its own
    pub fn filter(&self) -> RegionFilter {
        RegionFilter::from_codes(
            self.province_code.as_deref(),
            self.regency_code.as_deref(),
            self.district_code.as_deref(),
        )
    }
}

/// One recap row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecapBucketDto {
    /// Range identifier, education value or region code
    #[schema(example = "17-35")]
    pub key: String,
    #[schema(example = "17-35 tahun")]
    pub label: String,
    /// Region code, region recap only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Region name, region recap only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub count: i64,
    /// Share of the filtered population, two decimals
    #[schema(example = 50.0)]
    pub percentage: f64,
}

impl From<RecapBucket> for RecapBucketDto {
    fn from(b: RecapBucket) -> Self {
        Self {
            percentage: b.percentage.to_f64().unwrap_or(0.0),
            key: b.key,
            label: b.label,
            code: b.code,
            name: b.name,
            count: b.count,
        }
    }
}
