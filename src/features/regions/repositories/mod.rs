//! Storage seam for the region reference tables.

mod postgres;

pub use postgres::PgRegionRepository;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::regions::models::{District, Province, Regency};

/// Read-only access to provinces, regencies and districts.
///
/// Every list is ordered by name ascending.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn list_provinces(&self) -> Result<Vec<Province>>;

    /// Regencies whose parent is `province_code`; unknown parents yield an empty list
    async fn list_regencies(&self, province_code: &str) -> Result<Vec<Regency>>;

    /// Districts whose parent is `regency_code`; unknown parents yield an empty list
    async fn list_districts(&self, regency_code: &str) -> Result<Vec<District>>;

    async fn find_district(&self, code: &str) -> Result<Option<District>>;
}
