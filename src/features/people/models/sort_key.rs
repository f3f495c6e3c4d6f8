use std::fmt;
use std::str::FromStr;

/// Ordering of the people list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    /// Youngest first (most recent birth date first)
    AgeAsc,
    /// Oldest first (earliest birth date first)
    AgeDesc,
    IncomeAsc,
    IncomeDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::AgeAsc,
        SortKey::AgeDesc,
        SortKey::IncomeAsc,
        SortKey::IncomeDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::AgeAsc => "age-asc",
            SortKey::AgeDesc => "age-desc",
            SortKey::IncomeAsc => "income-asc",
            SortKey::IncomeDesc => "income-desc",
        }
    }

    /// ORDER BY body over the `people p` alias; ties fall back to the identifier
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "LOWER(p.name) ASC, p.id ASC",
            SortKey::NameDesc => "LOWER(p.name) DESC, p.id ASC",
            SortKey::AgeAsc => "p.birth_date DESC, p.id ASC",
            SortKey::AgeDesc => "p.birth_date ASC, p.id ASC",
            SortKey::IncomeAsc => "p.income ASC, p.id ASC",
            SortKey::IncomeDesc => "p.income DESC, p.id ASC",
        }
    }

    /// Parse an optional query value; absent or blank means the default
    pub fn parse_optional(value: Option<&str>) -> Result<Self, String> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!(
                    "Unknown sort key '{}'. Allowed: {}",
                    s,
                    allowed.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_name_asc() {
        assert_eq!(SortKey::parse_optional(None), Ok(SortKey::NameAsc));
        assert_eq!(SortKey::parse_optional(Some("")), Ok(SortKey::NameAsc));
    }

    #[test]
    fn test_parse_known_keys() {
        assert_eq!("age-asc".parse::<SortKey>(), Ok(SortKey::AgeAsc));
        assert_eq!("income-desc".parse::<SortKey>(), Ok(SortKey::IncomeDesc));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = SortKey::parse_optional(Some("salary-asc")).unwrap_err();
        assert!(err.contains("salary-asc"));
        assert!(err.contains("name-asc"));
    }

    #[test]
    fn test_age_sorts_by_birth_date_inverted() {
        assert!(SortKey::AgeAsc.as_sql().starts_with("p.birth_date DESC"));
        assert!(SortKey::AgeDesc.as_sql().starts_with("p.birth_date ASC"));
    }

    #[test]
    fn test_name_order_is_case_insensitive_in_sql() {
        assert!(SortKey::NameAsc.as_sql().starts_with("LOWER(p.name) ASC"));
        assert!(SortKey::NameDesc.as_sql().starts_with("LOWER(p.name) DESC"));
    }
}
