use serde::Serialize;
use sqlx::FromRow;

/// District model representing Indonesian districts (kecamatan)
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct District {
    pub code: String,
    pub name: String,
    pub regency_code: String,
}
