use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::recap::models::RecapRow;
use crate::features::recap::repositories::RecapRepository;
use crate::features::regions::selection::RegionFilter;

pub struct PgRecapRepository {
    pool: PgPool,
}

impl PgRecapRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecapRepository for PgRecapRepository {
    async fn rows(&self, filter: &RegionFilter) -> Result<Vec<RecapRow>> {
        let mut conditions = Vec::new();
        let mut binds: Vec<&str> = Vec::new();

        for (column, code) in [
            ("p.province_code", &filter.province_code),
            ("p.regency_code", &filter.regency_code),
            ("p.district_code", &filter.district_code),
        ] {
            if let Some(code) = code {
                binds.push(code.as_str());
                conditions.push(format!("{} = ${}", column, binds.len()));
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            r#"
            SELECT
                p.birth_date, p.income, p.education,
                p.province_code, p.regency_code, p.district_code,
                prov.name AS province_name,
                reg.name AS regency_name,
                dist.name AS district_name
            FROM people p
            LEFT JOIN provinces prov ON p.province_code = prov.code
            LEFT JOIN regencies reg ON p.regency_code = reg.code
            LEFT JOIN districts dist ON p.district_code = dist.code
            {}
            "#,
            where_clause
        );

        let mut q = sqlx::query_as::<_, RecapRow>(&sql);
        for value in binds {
            q = q.bind(value);
        }

        q.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to fetch recap rows: {:?}", e);
            AppError::Database(e)
        })
    }
}
