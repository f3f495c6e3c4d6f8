use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::error::Result;
use crate::features::people::models::Education;
use crate::features::recap::models::{
    age_bracket, income_bracket, percentage, RecapBucket, RecapRow, RecapType, AGE_BRACKETS,
    INCOME_BRACKETS,
};
use crate::features::recap::repositories::RecapRepository;
use crate::features::regions::selection::RegionFilter;
use crate::features::regions::services::RegionService;
use crate::shared::constants::UNKNOWN_REGION_NAME;
use crate::shared::dates::{age_on, today};

/// Grouped counts and percentages over the region-filtered population.
///
/// Percentages are relative to the filtered population and recomputed per call.
pub struct RecapService {
    repo: Arc<dyn RecapRepository>,
    regions: Arc<RegionService>,
}

impl RecapService {
    pub fn new(repo: Arc<dyn RecapRepository>, regions: Arc<RegionService>) -> Self {
        Self { repo, regions }
    }

    /// Compute a recap. An unknown type yields no buckets.
    pub async fn compute(
        &self,
        recap_type: Option<RecapType>,
        filter: &RegionFilter,
    ) -> Result<Vec<RecapBucket>> {
        let Some(recap_type) = recap_type else {
            return Ok(Vec::new());
        };

        let rows = self.repo.rows(filter).await?;

        let district_name = match (recap_type, filter.district_code.as_deref()) {
            (RecapType::Region, Some(code)) => self.regions.district_name(code).await?,
            _ => None,
        };

        let buckets = aggregate(recap_type, &rows, filter, today(), district_name);
        tracing::debug!(
            recap_type = %recap_type,
            population = rows.len(),
            buckets = buckets.len(),
            "Recap computed"
        );
        Ok(buckets)
    }
}

/// Group already-filtered rows by `recap_type`.
///
/// `district_name` is only consulted for a region recap narrowed to one district.
pub fn aggregate(
    recap_type: RecapType,
    rows: &[RecapRow],
    filter: &RegionFilter,
    today: NaiveDate,
    district_name: Option<String>,
) -> Vec<RecapBucket> {
    let total = rows.len() as i64;
    match recap_type {
        RecapType::Age => {
            let mut counts = [0i64; AGE_BRACKETS.len()];
            for row in rows {
                counts[age_bracket(age_on(row.birth_date, today))] += 1;
            }
            AGE_BRACKETS
                .iter()
                .zip(counts)
                .filter(|(_, count)| *count > 0)
                .map(|(bracket, count)| range_bucket(bracket.key, bracket.label, count, total))
                .collect()
        }
        RecapType::Income => {
            let mut counts = [0i64; INCOME_BRACKETS.len()];
            for row in rows {
                counts[income_bracket(row.income)] += 1;
            }
            INCOME_BRACKETS
                .iter()
                .zip(counts)
                .filter(|(_, count)| *count > 0)
                .map(|(bracket, count)| range_bucket(bracket.key, bracket.label, count, total))
                .collect()
        }
        RecapType::Education => {
            let mut counts: BTreeMap<(usize, &str), i64> = BTreeMap::new();
            for row in rows {
                let value = row.education.as_str();
                *counts.entry((Education::rank_of(value), value)).or_default() += 1;
            }
            counts
                .into_iter()
                .map(|((_, value), count)| range_bucket(value, value, count, total))
                .collect()
        }
        RecapType::Region => region_buckets(rows, filter, district_name),
    }
}

fn range_bucket(key: &str, label: &str, count: i64, total: i64) -> RecapBucket {
    RecapBucket {
        key: key.to_string(),
        label: label.to_string(),
        code: None,
        name: None,
        count,
        percentage: percentage(count, total),
    }
}

fn region_bucket(code: String, name: String, count: i64, percentage: Decimal) -> RecapBucket {
    RecapBucket {
        key: code.clone(),
        label: name.clone(),
        code: Some(code),
        name: Some(name),
        count,
        percentage,
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Province,
    Regency,
    District,
}

impl Level {
    fn code_and_name(self, row: &RecapRow) -> (&str, Option<&str>) {
        match self {
            Level::Province => (row.province_code.as_str(), row.province_name.as_deref()),
            Level::Regency => (row.regency_code.as_str(), row.regency_name.as_deref()),
            Level::District => (row.district_code.as_str(), row.district_name.as_deref()),
        }
    }
}

/// Group by the level just below the deepest selected region
fn region_buckets(
    rows: &[RecapRow],
    filter: &RegionFilter,
    district_name: Option<String>,
) -> Vec<RecapBucket> {
    if let Some(code) = &filter.district_code {
        let name = district_name.unwrap_or_else(|| UNKNOWN_REGION_NAME.to_string());
        return vec![region_bucket(
            code.clone(),
            name,
            rows.len() as i64,
            Decimal::ONE_HUNDRED,
        )];
    }

    let level = if filter.regency_code.is_some() {
        Level::District
    } else if filter.province_code.is_some() {
        Level::Regency
    } else {
        Level::Province
    };

    let mut groups: HashMap<&str, (&str, i64)> = HashMap::new();
    for row in rows {
        let (code, name) = level.code_and_name(row);
        groups
            .entry(code)
            .or_insert((name.unwrap_or(UNKNOWN_REGION_NAME), 0))
            .1 += 1;
    }

    let total = rows.len() as i64;
    let mut groups: Vec<(&str, &str, i64)> = groups
        .into_iter()
        .map(|(code, (name, count))| (code, name, count))
        .collect();
    groups.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    groups
        .into_iter()
        .map(|(code, name, count)| {
            region_bucket(
                code.to_string(),
                name.to_string(),
                count,
                percentage(count, total),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::people::models::Person;
    use crate::features::people::services::PersonService;
    use crate::shared::test_helpers::{person_input, InMemoryStore};
    use chrono::{Datelike, Utc};
    use uuid::Uuid;

    struct Fixture {
        store: Arc<InMemoryStore>,
        people: PersonService,
        recap: RecapService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::seeded());
        let regions = Arc::new(RegionService::new(store.clone()));
        Fixture {
            people: PersonService::new(store.clone()),
            recap: RecapService::new(store.clone(), regions),
            store,
        }
    }

    fn years_ago(today: NaiveDate, years: i32) -> NaiveDate {
        today
            .with_year(today.year() - years)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year() - years, 2, 28).unwrap())
    }

    fn nik(n: usize) -> String {
        format!("31710101019{:05}", n)
    }

    fn keys(buckets: &[RecapBucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.key.as_str()).collect()
    }

    fn percentage_sum(buckets: &[RecapBucket]) -> Decimal {
        buckets.iter().map(|b| b.percentage).sum()
    }

    fn assert_sums_to_hundred(buckets: &[RecapBucket]) {
        let diff = (percentage_sum(buckets) - Decimal::ONE_HUNDRED).abs();
        let tolerance = Decimal::new(1, 2) * Decimal::from(buckets.len() as i64);
        assert!(diff <= tolerance, "sum off by {diff}");
    }

    #[tokio::test]
    async fn test_income_scenario_two_people_split_evenly() {
        let f = fixture();
        for (i, income) in [2_000_000, 12_000_000].into_iter().enumerate() {
            let mut input = person_input(&nik(i), "Warga");
            input.income = income;
            f.people.save(None, input).await.unwrap();
        }

        let buckets = f
            .recap
            .compute(Some(RecapType::Income), &RegionFilter::default())
            .await
            .unwrap();

        assert_eq!(keys(&buckets), vec!["1000000-3000000", "10000000-999999999"]);
        for bucket in &buckets {
            assert_eq!(bucket.count, 1);
            assert_eq!(bucket.percentage, Decimal::from(50));
        }
    }

    #[tokio::test]
    async fn test_income_of_exactly_one_million_is_second_bracket() {
        let f = fixture();
        let mut input = person_input(&nik(1), "Warga");
        input.income = 1_000_000;
        f.people.save(None, input).await.unwrap();

        let buckets = f
            .recap
            .compute(Some(RecapType::Income), &RegionFilter::default())
            .await
            .unwrap();
        assert_eq!(keys(&buckets), vec!["1000000-3000000"]);
    }

    #[tokio::test]
    async fn test_age_boundaries_on_exact_birthdays() {
        let f = fixture();
        let today = today();
        for (i, years) in [17, 7, 40, 3].into_iter().enumerate() {
            let mut input = person_input(&nik(i), "Warga");
            input.birth_date = years_ago(today, years);
            f.people.save(None, input).await.unwrap();
        }

        let buckets = f
            .recap
            .compute(Some(RecapType::Age), &RegionFilter::default())
            .await
            .unwrap();

        assert_eq!(keys(&buckets), vec!["0-6", "7-16", "17-35", "36-99"]);
        assert_eq!(buckets[1].label, "7-16 tahun");
        assert_eq!(buckets[3].label, "36+ tahun");
        assert!(buckets.iter().all(|b| b.count == 1));
        assert_sums_to_hundred(&buckets);
    }

    #[test]
    fn test_empty_age_brackets_are_omitted() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let rows: Vec<RecapRow> = [1990, 1985]
            .into_iter()
            .map(|year| raw_row(NaiveDate::from_ymd_opt(year, 1, 1).unwrap(), "S1"))
            .collect();

        let buckets = aggregate(RecapType::Age, &rows, &RegionFilter::default(), today, None);
        assert_eq!(keys(&buckets), vec!["36-99"]);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].percentage, Decimal::ONE_HUNDRED);
    }

    #[tokio::test]
    async fn test_education_follows_enumeration_with_unknown_last() {
        let f = fixture();
        f.store
            .insert_raw(raw_person(NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(), "Paket C"));
        for (i, education) in [Education::S2, Education::Sd, Education::SmaSmk, Education::Sd]
            .into_iter()
            .enumerate()
        {
            let mut input = person_input(&nik(i), "Warga");
            input.education = education;
            f.people.save(None, input).await.unwrap();
        }

        let buckets = f
            .recap
            .compute(Some(RecapType::Education), &RegionFilter::default())
            .await
            .unwrap();

        assert_eq!(keys(&buckets), vec!["SD", "SMA/SMK", "S2", "Paket C"]);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].percentage, Decimal::from(40));
        assert_sums_to_hundred(&buckets);
    }

    async fn seed_regions(f: &Fixture) {
        let placements = [
            ("31", "3171", "317101"),
            ("31", "3171", "317102"),
            ("31", "3172", "317201"),
            ("32", "3201", "320101"),
        ];
        for (i, (province, regency, district)) in placements.into_iter().enumerate() {
            let mut input = person_input(&nik(i), "Warga");
            input.province_code = province.to_string();
            input.regency_code = regency.to_string();
            input.district_code = district.to_string();
            f.people.save(None, input).await.unwrap();
        }
    }

    fn names(buckets: &[RecapBucket]) -> Vec<&str> {
        buckets.iter().filter_map(|b| b.name.as_deref()).collect()
    }

    #[tokio::test]
    async fn test_region_groups_by_province_without_filter() {
        let f = fixture();
        seed_regions(&f).await;

        let buckets = f
            .recap
            .compute(Some(RecapType::Region), &RegionFilter::default())
            .await
            .unwrap();

        assert_eq!(names(&buckets), vec!["DKI JAKARTA", "JAWA BARAT"]);
        assert_eq!(buckets[0].code.as_deref(), Some("31"));
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets[0].percentage, Decimal::from(75));
        assert_sums_to_hundred(&buckets);
    }

    #[tokio::test]
    async fn test_region_groups_by_regency_within_province() {
        let f = fixture();
        seed_regions(&f).await;

        let filter = RegionFilter {
            province_code: Some("31".to_string()),
            ..Default::default()
        };
        let buckets = f
            .recap
            .compute(Some(RecapType::Region), &filter)
            .await
            .unwrap();

        assert_eq!(
            names(&buckets),
            vec!["KOTA JAKARTA PUSAT", "KOTA JAKARTA UTARA"]
        );
        assert_eq!(buckets[0].percentage.to_string(), "66.67");
        assert_eq!(buckets[1].percentage.to_string(), "33.33");
    }

    #[tokio::test]
    async fn test_region_groups_by_district_within_regency() {
        let f = fixture();
        seed_regions(&f).await;

        let filter = RegionFilter {
            province_code: Some("31".to_string()),
            regency_code: Some("3171".to_string()),
            district_code: None,
        };
        let buckets = f
            .recap
            .compute(Some(RecapType::Region), &filter)
            .await
            .unwrap();

        assert_eq!(names(&buckets), vec!["MENTENG", "TANAH ABANG"]);
        assert_eq!(buckets[0].percentage, Decimal::from(50));
    }

    #[tokio::test]
    async fn test_region_with_district_filter_is_single_full_bucket() {
        let f = fixture();
        seed_regions(&f).await;

        let filter = RegionFilter {
            province_code: Some("31".to_string()),
            regency_code: Some("3171".to_string()),
            district_code: Some("317101".to_string()),
        };
        let buckets = f
            .recap
            .compute(Some(RecapType::Region), &filter)
            .await
            .unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].name.as_deref(), Some("TANAH ABANG"));
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].percentage, Decimal::ONE_HUNDRED);
    }

    #[tokio::test]
    async fn test_unresolved_region_code_is_grouped_as_unknown() {
        let f = fixture();
        let mut person = raw_person(NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(), "S1");
        person.province_code = "99".to_string();
        f.store.insert_raw(person);
        f.people.save(None, person_input(&nik(1), "Warga")).await.unwrap();

        let buckets = f
            .recap
            .compute(Some(RecapType::Region), &RegionFilter::default())
            .await
            .unwrap();

        assert_eq!(names(&buckets), vec!["DKI JAKARTA", "Unknown"]);
        assert_sums_to_hundred(&buckets);
    }

    #[tokio::test]
    async fn test_filter_narrows_population_before_percentages() {
        let f = fixture();
        seed_regions(&f).await;

        let filter = RegionFilter {
            province_code: Some("32".to_string()),
            ..Default::default()
        };
        let buckets = f
            .recap
            .compute(Some(RecapType::Income), &filter)
            .await
            .unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].percentage, Decimal::ONE_HUNDRED);
    }

    #[tokio::test]
    async fn test_unknown_type_is_empty() {
        let f = fixture();
        seed_regions(&f).await;
        let buckets = f
            .recap
            .compute(None, &RegionFilter::default())
            .await
            .unwrap();
        assert!(buckets.is_empty());
    }

    #[tokio::test]
    async fn test_empty_population_has_no_buckets() {
        let f = fixture();
        for recap_type in [RecapType::Age, RecapType::Income, RecapType::Education, RecapType::Region] {
            let buckets = f
                .recap
                .compute(Some(recap_type), &RegionFilter::default())
                .await
                .unwrap();
            assert!(buckets.is_empty(), "{recap_type} should be empty");
        }
    }

    fn raw_person(birth_date: NaiveDate, education: &str) -> Person {
        let now = Utc::now();
        Person {
            id: Uuid::new_v4(),
            nik: "3171019999999999".to_string(),
            name: "Data Lama".to_string(),
            province_code: "31".to_string(),
            regency_code: "3171".to_string(),
            district_code: "317101".to_string(),
            address: "Jl. Lama No. 1".to_string(),
            phone: "0211234567".to_string(),
            email: "lama@mail.test".to_string(),
            birth_date,
            income: 500_000,
            education: education.to_string(),
            occupation: "Petani".to_string(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn raw_row(birth_date: NaiveDate, education: &str) -> RecapRow {
        RecapRow {
            birth_date,
            income: 500_000,
            education: education.to_string(),
            province_code: "31".to_string(),
            regency_code: "3171".to_string(),
            district_code: "317101".to_string(),
            province_name: Some("DKI JAKARTA".to_string()),
            regency_name: Some("KOTA JAKARTA PUSAT".to_string()),
            district_name: Some("TANAH ABANG".to_string()),
        }
    }
}
