use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, Province, Regency};
use crate::features::regions::repositories::RegionRepository;

pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn list_provinces(&self) -> Result<Vec<Province>> {
        sqlx::query_as::<_, Province>(
            r#"
            SELECT code, name
            FROM provinces
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provinces: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_regencies(&self, province_code: &str) -> Result<Vec<Regency>> {
        sqlx::query_as::<_, Regency>(
            r#"
            SELECT code, name, province_code
            FROM regencies
            WHERE province_code = $1
            ORDER BY name ASC
            "#,
        )
        .bind(province_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch regencies for province {}: {:?}",
                province_code,
                e
            );
            AppError::Database(e)
        })
    }

    async fn list_districts(&self, regency_code: &str) -> Result<Vec<District>> {
        sqlx::query_as::<_, District>(
            r#"
            SELECT code, name, regency_code
            FROM districts
            WHERE regency_code = $1
            ORDER BY name ASC
            "#,
        )
        .bind(regency_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch districts for regency {}: {:?}",
                regency_code,
                e
            );
            AppError::Database(e)
        })
    }

    async fn find_district(&self, code: &str) -> Result<Option<District>> {
        sqlx::query_as::<_, District>(
            r#"
            SELECT code, name, regency_code
            FROM districts
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch district by code {}: {:?}", code, e);
            AppError::Database(e)
        })
    }
}
