mod postgres;

pub use postgres::PgRecapRepository;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::recap::models::RecapRow;
use crate::features::regions::selection::RegionFilter;

/// Read side for recaps: the region-filtered population, reduced to bucketing columns
#[async_trait]
pub trait RecapRepository: Send + Sync {
    async fn rows(&self, filter: &RegionFilter) -> Result<Vec<RecapRow>>;
}
