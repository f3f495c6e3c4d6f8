use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::error::Result;
use crate::features::people::models::{PersonDetail, PersonQuery};
use crate::features::people::services::PersonService;
use crate::features::recap::models::{RecapBucket, RecapType};
use crate::features::recap::services::RecapService;
use crate::features::regions::selection::RegionFilter;
use crate::shared::constants::{
    PERSON_EXPORT_FILENAME, PERSON_EXPORT_HEADERS, UNKNOWN_REGION_NAME,
};
use crate::shared::csv::{to_csv, Column};
use crate::shared::dates::{age_on, format_long_id, today};

/// A rendered CSV document and its download name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub filename: String,
    pub content: String,
}

/// Renders the people list and recaps as downloadable CSV
pub struct ExportService {
    people: Arc<PersonService>,
    recap: Arc<RecapService>,
}

struct PersonRow<'a> {
    no: usize,
    age: i32,
    detail: &'a PersonDetail,
}

fn region(code: &str, name: Option<&str>) -> String {
    format!("{} - {}", code, name.unwrap_or(UNKNOWN_REGION_NAME))
}

fn person_columns<'r>() -> Vec<Column<'r, PersonRow<'r>>> {
    let [
        no,
        nik,
        name,
        province,
        regency,
        district,
        address,
        phone,
        email,
        birth_date,
        age,
        income,
        education,
        occupation,
        notes,
    ] = PERSON_EXPORT_HEADERS;
    vec![
        Column::new(no, |r: &PersonRow<'r>| r.no.to_string()),
        Column::new(nik, |r: &PersonRow<'r>| r.detail.person.nik.clone()),
        Column::new(name, |r: &PersonRow<'r>| r.detail.person.name.clone()),
        Column::new(province, |r: &PersonRow<'r>| {
            region(&r.detail.person.province_code, r.detail.province_name.as_deref())
        }),
        Column::new(regency, |r: &PersonRow<'r>| {
            region(&r.detail.person.regency_code, r.detail.regency_name.as_deref())
        }),
        Column::new(district, |r: &PersonRow<'r>| {
            region(&r.detail.person.district_code, r.detail.district_name.as_deref())
        }),
        Column::new(address, |r: &PersonRow<'r>| r.detail.person.address.clone()),
        Column::new(phone, |r: &PersonRow<'r>| r.detail.person.phone.clone()),
        Column::new(email, |r: &PersonRow<'r>| r.detail.person.email.clone()),
        Column::new(birth_date, |r: &PersonRow<'r>| {
            format_long_id(r.detail.person.birth_date)
        }),
        Column::new(age, |r: &PersonRow<'r>| r.age.to_string()),
        Column::new(income, |r: &PersonRow<'r>| r.detail.person.income.to_string()),
        Column::new(education, |r: &PersonRow<'r>| r.detail.person.education.clone()),
        Column::new(occupation, |r: &PersonRow<'r>| r.detail.person.occupation.clone()),
        Column::new(notes, |r: &PersonRow<'r>| {
            r.detail.person.notes.clone().unwrap_or_default()
        }),
    ]
}

/// Render the people list; `No` is the 1-based position in `people`
pub fn people_to_csv(people: &[PersonDetail], today: NaiveDate) -> String {
    let rows: Vec<PersonRow> = people
        .iter()
        .enumerate()
        .map(|(i, detail)| PersonRow {
            no: i + 1,
            age: age_on(detail.person.birth_date, today),
            detail,
        })
        .collect();
    to_csv(&rows, &person_columns())
}

/// Render recap buckets with the header set of `recap_type`
pub fn recap_to_csv(recap_type: RecapType, buckets: &[RecapBucket]) -> String {
    let first: Column<RecapBucket> = match recap_type {
        RecapType::Age => Column::new("Range Usia", |b: &RecapBucket| b.label.clone()),
        RecapType::Income => Column::new("Range Pendapatan", |b: &RecapBucket| b.label.clone()),
        RecapType::Education => {
            Column::new("Tingkat Pendidikan", |b: &RecapBucket| b.label.clone())
        }
        RecapType::Region => Column::new("Wilayah", |b: &RecapBucket| {
            format!("{} - {}", b.key, b.label)
        }),
    };
    let columns = vec![
        first,
        Column::new("Jumlah", |b: &RecapBucket| b.count.to_string()),
        Column::new("Persentase", |b: &RecapBucket| format!("{:.2}%", b.percentage)),
    ];
    to_csv(buckets, &columns)
}

/// Download name for a recap export, keeping only filename-safe characters of the type
pub fn recap_filename(raw_type: &str) -> String {
    let recap_type: String = raw_type
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    format!("rekap-{}.csv", recap_type)
}

impl ExportService {
    pub fn new(people: Arc<PersonService>, recap: Arc<RecapService>) -> Self {
        Self { people, recap }
    }

    /// Every person matching `query`, in list order
    pub async fn people_csv(&self, query: &PersonQuery) -> Result<CsvFile> {
        let people = self.people.list(query).await?;
        tracing::info!(rows = people.len(), "Exporting people list");
        Ok(CsvFile {
            filename: PERSON_EXPORT_FILENAME.to_string(),
            content: people_to_csv(&people, today()),
        })
    }

    /// A recap as CSV; an unknown type produces an empty document
    pub async fn recap_csv(&self, raw_type: &str, filter: &RegionFilter) -> Result<CsvFile> {
        let filename = recap_filename(raw_type);
        let Some(recap_type) = RecapType::parse(raw_type) else {
            return Ok(CsvFile {
                filename,
                content: String::new(),
            });
        };
        let buckets = self.recap.compute(Some(recap_type), filter).await?;
        tracing::info!(recap_type = %recap_type, rows = buckets.len(), "Exporting recap");
        Ok(CsvFile {
            filename,
            content: recap_to_csv(recap_type, &buckets),
        })
    }
}
