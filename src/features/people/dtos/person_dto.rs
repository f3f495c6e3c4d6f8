use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::people::models::{Education, PersonDetail, PersonInput, PersonQuery, SortKey};
use crate::features::regions::selection::RegionSelection;
use crate::shared::dates::age_on;
use crate::shared::validation::{NIK_REGEX, PHONE_REGEX};

/// Query parameters for listing (and exporting) people
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PersonListQuery {
    /// Case-insensitive substring over name, address, region names, phone and email
    #[param(example = "jakarta")]
    pub search: Option<String>,

    /// One of name-asc (default), name-desc, age-asc, age-desc, income-asc, income-desc
    #[param(example = "name-asc")]
    pub sort: Option<String>,

    pub province_code: Option<String>,
    pub regency_code: Option<String>,
    pub district_code: Option<String>,
}

impl PersonListQuery {
    pub fn to_query(&self) -> Result<PersonQuery> {
        let sort = SortKey::parse_optional(self.sort.as_deref()).map_err(AppError::BadRequest)?;
        let region = RegionSelection::from_codes(
            self.province_code.as_deref(),
            self.regency_code.as_deref(),
            self.district_code.as_deref(),
        )
        .filter();
        Ok(PersonQuery::new(self.search.as_deref(), sort, region))
    }
}

/// Create or update request. Present `id` means update.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavePersonDto {
    /// Existing record to replace; omit to create a new one
    pub id: Option<Uuid>,

    #[validate(regex(path = *NIK_REGEX, message = "NIK harus 16 digit angka"))]
    #[schema(example = "3171012345678901")]
    pub nik: String,

    #[validate(length(min = 2, message = "Nama minimal 2 karakter"))]
    pub name: String,

    #[validate(length(min = 1, message = "Provinsi harus dipilih"))]
    pub province_code: String,

    #[validate(length(min = 1, message = "Kabupaten harus dipilih"))]
    pub regency_code: String,

    #[validate(length(min = 1, message = "Kecamatan harus dipilih"))]
    pub district_code: String,

    #[validate(length(min = 5, message = "Alamat minimal 5 karakter"))]
    pub address: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Nomor telepon harus 8-14 digit angka"))]
    pub phone: String,

    #[validate(email(message = "Format email tidak valid"))]
    pub email: String,

    pub birth_date: NaiveDate,

    #[validate(range(min = 0, message = "Pendapatan tidak boleh negatif"))]
    pub income: i64,

    pub education: Education,

    #[validate(length(min = 2, message = "Pekerjaan minimal 2 karakter"))]
    pub occupation: String,

    pub notes: Option<String>,
}

impl SavePersonDto {
    /// Strip surrounding whitespace so length rules see the stored value
    pub fn trimmed(self) -> Self {
        let trim = |value: String| value.trim().to_string();
        Self {
            nik: trim(self.nik),
            name: trim(self.name),
            province_code: trim(self.province_code),
            regency_code: trim(self.regency_code),
            district_code: trim(self.district_code),
            address: trim(self.address),
            phone: trim(self.phone),
            email: trim(self.email),
            occupation: trim(self.occupation),
            ..self
        }
    }
}

impl From<SavePersonDto> for PersonInput {
    fn from(dto: SavePersonDto) -> Self {
        Self {
            nik: dto.nik,
            name: dto.name,
            province_code: dto.province_code,
            regency_code: dto.regency_code,
            district_code: dto.district_code,
            address: dto.address,
            phone: dto.phone,
            email: dto.email,
            birth_date: dto.birth_date,
            income: dto.income,
            education: dto.education,
            occupation: dto.occupation,
            notes: dto.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Response DTO for a person, denormalized with region names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponseDto {
    pub id: Uuid,
    pub nik: String,
    pub name: String,
    pub province_code: String,
    pub province_name: Option<String>,
    pub regency_code: String,
    pub regency_name: Option<String>,
    pub district_code: String,
    pub district_name: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    /// Age in whole years as of today
    pub age: i32,
    pub income: i64,
    pub education: String,
    pub occupation: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonResponseDto {
    pub fn from_detail(detail: PersonDetail, today: NaiveDate) -> Self {
        let p = detail.person;
        Self {
            age: age_on(p.birth_date, today),
            id: p.id,
            nik: p.nik,
            name: p.name,
            province_code: p.province_code,
            province_name: detail.province_name,
            regency_code: p.regency_code,
            regency_name: detail.regency_name,
            district_code: p.district_code,
            district_name: detail.district_name,
            address: p.address,
            phone: p.phone,
            email: p.email,
            birth_date: p.birth_date,
            income: p.income,
            education: p.education,
            occupation: p.occupation,
            notes: p.notes,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
