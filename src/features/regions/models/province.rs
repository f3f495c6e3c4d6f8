use serde::Serialize;
use sqlx::FromRow;

/// Province model representing Indonesian provinces (provinsi)
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Province {
    pub code: String,
    pub name: String,
}
