use chrono::{Datelike, Local, NaiveDate};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Server-local calendar date, used as "now" for age computations
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years between `birth_date` and `today`.
///
/// Birthdays not yet reached this year do not count.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Indonesian long date, e.g. `17 Agustus 1945`
pub fn format_long_id(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}
