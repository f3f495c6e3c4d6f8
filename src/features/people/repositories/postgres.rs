use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::handle_db_error;
use crate::core::error::{AppError, Result};
use crate::features::people::models::{PersonDetail, PersonInput, PersonQuery};
use crate::features::people::repositories::{like_pattern, PersonRepository};

/// Region-name join shared by every read; expects the person rows aliased as `p`
const DETAIL_SELECT: &str = r#"
    SELECT
        p.id, p.nik, p.name,
        p.province_code, p.regency_code, p.district_code,
        p.address, p.phone, p.email, p.birth_date,
        p.income, p.education, p.occupation, p.notes,
        p.created_at, p.updated_at,
        prov.name AS province_name,
        reg.name AS regency_name,
        dist.name AS district_name
"#;

const DETAIL_JOINS: &str = r#"
    LEFT JOIN provinces prov ON p.province_code = prov.code
    LEFT JOIN regencies reg ON p.regency_code = reg.code
    LEFT JOIN districts dist ON p.district_code = dist.code
"#;

pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn list(&self, query: &PersonQuery) -> Result<Vec<PersonDetail>> {
        let mut conditions = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(ref search) = query.search {
            binds.push(like_pattern(search));
            let n = binds.len();
            conditions.push(format!(
                "(p.name ILIKE ${n} OR p.address ILIKE ${n} OR prov.name ILIKE ${n} \
                 OR reg.name ILIKE ${n} OR dist.name ILIKE ${n} OR p.phone ILIKE ${n} \
                 OR p.email ILIKE ${n})"
            ));
        }

        let region = &query.region;
        for (column, code) in [
            ("p.province_code", &region.province_code),
            ("p.regency_code", &region.regency_code),
            ("p.district_code", &region.district_code),
        ] {
            if let Some(code) = code {
                binds.push(code.clone());
                conditions.push(format!("{} = ${}", column, binds.len()));
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "{} FROM people p {} {} ORDER BY {}",
            DETAIL_SELECT,
            DETAIL_JOINS,
            where_clause,
            query.sort.as_sql()
        );

        let mut q = sqlx::query_as::<_, PersonDetail>(&sql);
        for value in &binds {
            q = q.bind(value);
        }

        q.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to fetch people: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, id: Uuid) -> Result<Option<PersonDetail>> {
        let sql = format!(
            "{} FROM people p {} WHERE p.id = $1",
            DETAIL_SELECT, DETAIL_JOINS
        );

        sqlx::query_as::<_, PersonDetail>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch person {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, input: &PersonInput) -> Result<PersonDetail> {
        let sql = format!(
            r#"
            WITH p AS (
                INSERT INTO people (
                    nik, name, province_code, regency_code, district_code,
                    address, phone, email, birth_date, income,
                    education, occupation, notes
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING *
            )
            {} FROM p {}
            "#,
            DETAIL_SELECT, DETAIL_JOINS
        );

        sqlx::query_as::<_, PersonDetail>(&sql)
            .bind(&input.nik)
            .bind(&input.name)
            .bind(&input.province_code)
            .bind(&input.regency_code)
            .bind(&input.district_code)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.birth_date)
            .bind(input.income)
            .bind(input.education.as_str())
            .bind(&input.occupation)
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert person: {:?}", e);
                handle_db_error(e)
            })
    }

    async fn update(&self, id: Uuid, input: &PersonInput) -> Result<Option<PersonDetail>> {
        let sql = format!(
            r#"
            WITH p AS (
                UPDATE people SET
                    nik = $1,
                    name = $2,
                    province_code = $3,
                    regency_code = $4,
                    district_code = $5,
                    address = $6,
                    phone = $7,
                    email = $8,
                    birth_date = $9,
                    income = $10,
                    education = $11,
                    occupation = $12,
                    notes = $13,
                    updated_at = NOW()
                WHERE id = $14
                RETURNING *
            )
            {} FROM p {}
            "#,
            DETAIL_SELECT, DETAIL_JOINS
        );

        sqlx::query_as::<_, PersonDetail>(&sql)
            .bind(&input.nik)
            .bind(&input.name)
            .bind(&input.province_code)
            .bind(&input.regency_code)
            .bind(&input.district_code)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.birth_date)
            .bind(input.income)
            .bind(input.education.as_str())
            .bind(&input.occupation)
            .bind(&input.notes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update person {}: {:?}", id, e);
                handle_db_error(e)
            })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete person {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
