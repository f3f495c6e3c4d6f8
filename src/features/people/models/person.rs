use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::people::models::{Education, SortKey};
use crate::features::regions::selection::RegionFilter;

/// Person model representing one resident record
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Person {
    pub id: Uuid,
    pub nik: String,
    pub name: String,
    pub province_code: String,
    pub regency_code: String,
    pub district_code: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub income: i64,
    /// Stored as text so legacy values outside [`Education`] still load
    pub education: String,
    pub occupation: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A person joined with the display names of its region codes
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct PersonDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub person: Person,
    pub province_name: Option<String>,
    pub regency_name: Option<String>,
    pub district_name: Option<String>,
}

/// Field values written by a save; the store assigns `id` and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInput {
    pub nik: String,
    pub name: String,
    pub province_code: String,
    pub regency_code: String,
    pub district_code: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub income: i64,
    pub education: Education,
    pub occupation: String,
    pub notes: Option<String>,
}

/// Search, ordering and region narrowing for a people listing
#[derive(Debug, Clone, Default)]
pub struct PersonQuery {
    /// Case-insensitive substring over name, address, region names, phone and email
    pub search: Option<String>,
    pub sort: SortKey,
    pub region: RegionFilter,
}

impl PersonQuery {
    pub fn new(search: Option<&str>, sort: SortKey, region: RegionFilter) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self {
            search,
            sort,
            region,
        }
    }
}
