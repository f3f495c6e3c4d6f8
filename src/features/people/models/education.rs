use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Highest completed education level, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Education {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "SMP")]
    Smp,
    #[serde(rename = "SMA/SMK")]
    SmaSmk,
    #[serde(rename = "D1")]
    D1,
    #[serde(rename = "D2")]
    D2,
    #[serde(rename = "D3")]
    D3,
    #[serde(rename = "S1")]
    S1,
    #[serde(rename = "S2")]
    S2,
    #[serde(rename = "S3")]
    S3,
}

impl Education {
    pub const ALL: [Education; 9] = [
        Education::Sd,
        Education::Smp,
        Education::SmaSmk,
        Education::D1,
        Education::D2,
        Education::D3,
        Education::S1,
        Education::S2,
        Education::S3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Sd => "SD",
            Education::Smp => "SMP",
            Education::SmaSmk => "SMA/SMK",
            Education::D1 => "D1",
            Education::D2 => "D2",
            Education::D3 => "D3",
            Education::S1 => "S1",
            Education::S2 => "S2",
            Education::S3 => "S3",
        }
    }

    /// Position in the fixed ordering; values outside the enumeration sort after every level
    pub fn rank_of(value: &str) -> usize {
        value
            .parse::<Education>()
            .map(|e| e as usize)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Education {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("Unknown education level '{}'", s))
    }
}
