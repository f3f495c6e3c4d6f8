use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Grouping dimension of a recap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecapType {
    Age,
    Income,
    Education,
    Region,
}

impl RecapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecapType::Age => "age",
            RecapType::Income => "income",
            RecapType::Education => "education",
            RecapType::Region => "region",
        }
    }

    /// `None` for anything outside the four known types
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "age" => Some(RecapType::Age),
            "income" => Some(RecapType::Income),
            "education" => Some(RecapType::Education),
            "region" => Some(RecapType::Region),
            _ => None,
        }
    }
}

impl fmt::Display for RecapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
