use rust_decimal::{Decimal, RoundingStrategy};

/// One row of a recap: a group, how many people fall in it, and their share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecapBucket {
    /// Range identifier, education value or region code
    pub key: String,
    pub label: String,
    /// Region code (region recap only)
    pub code: Option<String>,
    /// Region name (region recap only)
    pub name: Option<String>,
    pub count: i64,
    pub percentage: Decimal,
}

/// Age bracket, matched when `age >= min_age` and below the next bracket
#[derive(Debug, Clone, Copy)]
pub struct AgeBracket {
    pub key: &'static str,
    pub label: &'static str,
    pub min_age: i32,
}

/// Income bracket with an inclusive upper bound
#[derive(Debug, Clone, Copy)]
pub struct IncomeBracket {
    pub key: &'static str,
    pub label: &'static str,
    pub max_income: i64,
}

pub const AGE_BRACKETS: [AgeBracket; 4] = [
    AgeBracket {
        key: "0-6",
        label: "0-6 tahun",
        min_age: i32::MIN,
    },
    AgeBracket {
        key: "7-16",
        label: "7-16 tahun",
        min_age: 7,
    },
    AgeBracket {
        key: "17-35",
        label: "17-35 tahun",
        min_age: 17,
    },
    AgeBracket {
        key: "36-99",
        label: "36+ tahun",
        min_age: 36,
    },
];

// 1,000,000 belongs to the second bracket
pub const INCOME_BRACKETS: [IncomeBracket; 5] = [
    IncomeBracket {
        key: "0-1000000",
        label: "< Rp 1.000.000",
        max_income: 999_999,
    },
    IncomeBracket {
        key: "1000000-3000000",
        label: "Rp 1.000.000 - Rp 3.000.000",
        max_income: 3_000_000,
    },
    IncomeBracket {
        key: "3000000-5000000",
        label: "Rp 3.000.000 - Rp 5.000.000",
        max_income: 5_000_000,
    },
    IncomeBracket {
        key: "5000000-10000000",
        label: "Rp 5.000.000 - Rp 10.000.000",
        max_income: 10_000_000,
    },
    IncomeBracket {
        key: "10000000-999999999",
        label: "> Rp 10.000.000",
        max_income: i64::MAX,
    },
];

/// Index into [`AGE_BRACKETS`]
pub fn age_bracket(age: i32) -> usize {
    AGE_BRACKETS
        .iter()
        .rposition(|b| age >= b.min_age)
        .unwrap_or(0)
}

/// Index into [`INCOME_BRACKETS`]
pub fn income_bracket(income: i64) -> usize {
    INCOME_BRACKETS
        .iter()
        .position(|b| income <= b.max_income)
        .unwrap_or(INCOME_BRACKETS.len() - 1)
}

/// `count * 100 / total`, rounded half away from zero to two places
pub fn percentage(count: i64, total: i64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
