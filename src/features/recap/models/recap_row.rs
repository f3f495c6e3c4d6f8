use chrono::NaiveDate;
use sqlx::FromRow;

/// The columns of one person that recap bucketing reads
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct RecapRow {
    pub birth_date: NaiveDate,
    pub income: i64,
    pub education: String,
    pub province_code: String,
    pub regency_code: String,
    pub district_code: String,
    pub province_name: Option<String>,
    pub regency_name: Option<String>,
    pub district_name: Option<String>,
}
