//! In-memory storage double shared by service and route tests.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fake::faker::address::en::StreetName;
use fake::faker::job::en::Title;
use fake::Fake;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::people::models::{
    Education, Person, PersonDetail, PersonInput, PersonQuery, SortKey,
};
use crate::features::people::repositories::PersonRepository;
use crate::features::recap::models::RecapRow;
use crate::features::recap::repositories::RecapRepository;
use crate::features::regions::models::{District, Province, Regency};
use crate::features::regions::repositories::RegionRepository;
use crate::features::regions::selection::RegionFilter;

#[derive(Default)]
pub struct InMemoryStore {
    provinces: Mutex<Vec<Province>>,
    regencies: Mutex<Vec<Regency>>,
    districts: Mutex<Vec<District>>,
    people: Mutex<Vec<Person>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same reference regions as the seed migration
    pub fn seeded() -> Self {
        let store = Self::new();
        store.add_province("31", "DKI JAKARTA");
        store.add_province("32", "JAWA BARAT");
        store.add_province("33", "JAWA TENGAH");
        store.add_regency("3171", "KOTA JAKARTA PUSAT", "31");
        store.add_regency("3172", "KOTA JAKARTA UTARA", "31");
        store.add_regency("3201", "KABUPATEN BOGOR", "32");
        store.add_regency("3273", "KOTA BANDUNG", "32");
        store.add_regency("3301", "KABUPATEN CILACAP", "33");
        store.add_regency("3302", "KABUPATEN BANYUMAS", "33");
        store.add_district("317101", "TANAH ABANG", "3171");
        store.add_district("317102", "MENTENG", "3171");
        store.add_district("317201", "PENJARINGAN", "3172");
        store.add_district("317202", "PADEMANGAN", "3172");
        store.add_district("320101", "BOGOR SELATAN", "3201");
        store.add_district("320102", "BOGOR TIMUR", "3201");
        store
    }

    pub fn add_province(&self, code: &str, name: &str) {
        self.provinces.lock().unwrap().push(Province {
            code: code.to_string(),
            name: name.to_string(),
        });
    }

    pub fn add_regency(&self, code: &str, name: &str, province_code: &str) {
        self.regencies.lock().unwrap().push(Regency {
            code: code.to_string(),
            name: name.to_string(),
            province_code: province_code.to_string(),
        });
    }

    pub fn add_district(&self, code: &str, name: &str, regency_code: &str) {
        self.districts.lock().unwrap().push(District {
            code: code.to_string(),
            name: name.to_string(),
            regency_code: regency_code.to_string(),
        });
    }

    /// Store a raw record, bypassing validation (e.g. legacy education values)
    pub fn insert_raw(&self, person: Person) {
        self.people.lock().unwrap().push(person);
    }

    fn detail(&self, person: &Person) -> PersonDetail {
        let province_name = self
            .provinces
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.code == person.province_code)
            .map(|p| p.name.clone());
        let regency_name = self
            .regencies
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.code == person.regency_code)
            .map(|r| r.name.clone());
        let district_name = self
            .districts
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.code == person.district_code)
            .map(|d| d.name.clone());
        PersonDetail {
            person: person.clone(),
            province_name,
            regency_name,
            district_name,
        }
    }
}

fn matches_search(detail: &PersonDetail, term: &str) -> bool {
    let term = term.to_lowercase();
    let p = &detail.person;
    [
        Some(p.name.as_str()),
        Some(p.address.as_str()),
        detail.province_name.as_deref(),
        detail.regency_name.as_deref(),
        detail.district_name.as_deref(),
        Some(p.phone.as_str()),
        Some(p.email.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

/// Mirrors `ORDER BY LOWER(p.name)`
fn name_order(a: &Person, b: &Person) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare(sort: SortKey, a: &Person, b: &Person) -> Ordering {
    let primary = match sort {
        SortKey::NameAsc => name_order(a, b),
        SortKey::NameDesc => name_order(b, a),
        SortKey::AgeAsc => b.birth_date.cmp(&a.birth_date),
        SortKey::AgeDesc => a.birth_date.cmp(&b.birth_date),
        SortKey::IncomeAsc => a.income.cmp(&b.income),
        SortKey::IncomeDesc => b.income.cmp(&a.income),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

fn apply(person: &mut Person, input: &PersonInput) {
    person.nik = input.nik.clone();
    person.name = input.name.clone();
    person.province_code = input.province_code.clone();
    person.regency_code = input.regency_code.clone();
    person.district_code = input.district_code.clone();
    person.address = input.address.clone();
    person.phone = input.phone.clone();
    person.email = input.email.clone();
    person.birth_date = input.birth_date;
    person.income = input.income;
    person.education = input.education.as_str().to_string();
    person.occupation = input.occupation.clone();
    person.notes = input.notes.clone();
    person.updated_at = Utc::now();
}

#[async_trait]
impl RegionRepository for InMemoryStore {
    async fn list_provinces(&self) -> Result<Vec<Province>> {
        let mut provinces = self.provinces.lock().unwrap().clone();
        provinces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(provinces)
    }

    async fn list_regencies(&self, province_code: &str) -> Result<Vec<Regency>> {
        let mut regencies: Vec<Regency> = self
            .regencies
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.province_code == province_code)
            .cloned()
            .collect();
        regencies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(regencies)
    }

    async fn list_districts(&self, regency_code: &str) -> Result<Vec<District>> {
        let mut districts: Vec<District> = self
            .districts
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.regency_code == regency_code)
            .cloned()
            .collect();
        districts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(districts)
    }

    async fn find_district(&self, code: &str) -> Result<Option<District>> {
        Ok(self
            .districts
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.code == code)
            .cloned())
    }
}

#[async_trait]
impl PersonRepository for InMemoryStore {
    async fn list(&self, query: &PersonQuery) -> Result<Vec<PersonDetail>> {
        let mut people = self.people.lock().unwrap().clone();
        people.sort_by(|a, b| compare(query.sort, a, b));

        let region = &query.region;
        Ok(people
            .iter()
            .filter(|p| {
                region
                    .province_code
                    .as_ref()
                    .map_or(true, |c| *c == p.province_code)
                    && region
                        .regency_code
                        .as_ref()
                        .map_or(true, |c| *c == p.regency_code)
                    && region
                        .district_code
                        .as_ref()
                        .map_or(true, |c| *c == p.district_code)
            })
            .map(|p| self.detail(p))
            .filter(|d| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |term| matches_search(d, term))
            })
            .collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<PersonDetail>> {
        let person = self
            .people
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned();
        Ok(person.map(|p| self.detail(&p)))
    }

    async fn insert(&self, input: &PersonInput) -> Result<PersonDetail> {
        let now = Utc::now();
        let mut person = Person {
            id: Uuid::now_v7(),
            nik: String::new(),
            name: String::new(),
            province_code: String::new(),
            regency_code: String::new(),
            district_code: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            birth_date: input.birth_date,
            income: 0,
            education: String::new(),
            occupation: String::new(),
            notes: None,
            created_at: now,
            updated_at: now,
        };
        apply(&mut person, input);
        self.people.lock().unwrap().push(person.clone());
        Ok(self.detail(&person))
    }

    async fn update(&self, id: Uuid, input: &PersonInput) -> Result<Option<PersonDetail>> {
        let updated = {
            let mut people = self.people.lock().unwrap();
            people.iter_mut().find(|p| p.id == id).map(|person| {
                apply(person, input);
                person.clone()
            })
        };
        Ok(updated.map(|p| self.detail(&p)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut people = self.people.lock().unwrap();
        let before = people.len();
        people.retain(|p| p.id != id);
        Ok(people.len() < before)
    }
}

#[async_trait]
impl RecapRepository for InMemoryStore {
    async fn rows(&self, filter: &RegionFilter) -> Result<Vec<RecapRow>> {
        let people = self.list(&PersonQuery::new(None, SortKey::default(), filter.clone())).await?;
        Ok(people
            .into_iter()
            .map(|d| RecapRow {
                birth_date: d.person.birth_date,
                income: d.person.income,
                education: d.person.education,
                province_code: d.person.province_code,
                regency_code: d.person.regency_code,
                district_code: d.person.district_code,
                province_name: d.province_name,
                regency_name: d.regency_name,
                district_name: d.district_name,
            })
            .collect())
    }
}

/// A valid record located in Tanah Abang, Jakarta Pusat
pub fn person_input(nik: &str, name: &str) -> PersonInput {
    let street: String = StreetName().fake();
    let occupation: String = Title().fake();
    PersonInput {
        nik: nik.to_string(),
        name: name.to_string(),
        province_code: "31".to_string(),
        regency_code: "3171".to_string(),
        district_code: "317101".to_string(),
        address: format!("Jl. {} No. 5", street),
        phone: "081234567890".to_string(),
        email: format!("{}@mail.test", nik),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        income: 2_000_000,
        education: Education::S1,
        occupation,
        notes: Some("Warga tetap".to_string()),
    }
}
