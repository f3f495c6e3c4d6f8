use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::models::{District, Province, Regency};
use crate::features::regions::repositories::RegionRepository;

/// Read-only lookup over the province → regency → district hierarchy
pub struct RegionService {
    repo: Arc<dyn RegionRepository>,
}

fn non_blank(code: Option<&str>) -> Option<&str> {
    code.map(str::trim).filter(|c| !c.is_empty())
}

impl RegionService {
    pub fn new(repo: Arc<dyn RegionRepository>) -> Self {
        Self { repo }
    }

    /// List all provinces ordered by name
    pub async fn list_provinces(&self) -> Result<Vec<Province>> {
        self.repo.list_provinces().await
    }

    /// List regencies of a province; no province means no regencies
    pub async fn list_regencies(&self, province_code: Option<&str>) -> Result<Vec<Regency>> {
        match non_blank(province_code) {
            Some(code) => self.repo.list_regencies(code).await,
            None => Ok(Vec::new()),
        }
    }

    /// List districts of a regency; no regency means no districts
    pub async fn list_districts(&self, regency_code: Option<&str>) -> Result<Vec<District>> {
        match non_blank(regency_code) {
            Some(code) => self.repo.list_districts(code).await,
            None => Ok(Vec::new()),
        }
    }

    /// Display name of a district, if the code exists
    pub async fn district_name(&self, code: &str) -> Result<Option<String>> {
        Ok(self.repo.find_district(code).await?.map(|d| d.name))
    }
}
