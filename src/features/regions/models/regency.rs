use serde::Serialize;
use sqlx::FromRow;

/// Regency model representing Indonesian regencies/cities (kabupaten/kota)
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Regency {
    pub code: String,
    pub name: String,
    pub province_code: String,
}
