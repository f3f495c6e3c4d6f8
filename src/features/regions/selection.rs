//! Cascading province → regency → district selection.
//!
//! A selection only ever holds a consistent prefix of the hierarchy: choosing a
//! different ancestor drops every descendant, and a child cannot be chosen
//! before its parent.

/// Optional region codes narrowing a person query or recap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    pub province_code: Option<String>,
    pub regency_code: Option<String>,
    pub district_code: Option<String>,
}

impl RegionFilter {
    /// Keep every non-blank code as given, without enforcing the hierarchy
    pub fn from_codes(
        province: Option<&str>,
        regency: Option<&str>,
        district: Option<&str>,
    ) -> Self {
        Self {
            province_code: non_blank(province).map(str::to_string),
            regency_code: non_blank(regency).map(str::to_string),
            district_code: non_blank(district).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionSelection {
    #[default]
    NoneSelected,
    ProvinceSelected {
        province: String,
    },
    RegencySelected {
        province: String,
        regency: String,
    },
    DistrictSelected {
        province: String,
        regency: String,
        district: String,
    },
}

fn non_blank(code: Option<&str>) -> Option<&str> {
    code.map(str::trim).filter(|c| !c.is_empty())
}

impl RegionSelection {
    /// Apply province, regency and district selections in that order
    pub fn from_codes(
        province: Option<&str>,
        regency: Option<&str>,
        district: Option<&str>,
    ) -> Self {
        let mut selection = Self::NoneSelected;
        if let Some(code) = non_blank(province) {
            selection = selection.select_province(code);
        }
        if let Some(code) = non_blank(regency) {
            selection = selection.select_regency(code);
        }
        if let Some(code) = non_blank(district) {
            selection = selection.select_district(code);
        }
        selection
    }

    pub fn province(&self) -> Option<&str> {
        match self {
            Self::NoneSelected => None,
            Self::ProvinceSelected { province }
            | Self::RegencySelected { province, .. }
            | Self::DistrictSelected { province, .. } => Some(province),
        }
    }

    pub fn regency(&self) -> Option<&str> {
        match self {
            Self::RegencySelected { regency, .. } | Self::DistrictSelected { regency, .. } => {
                Some(regency)
            }
            _ => None,
        }
    }

    pub fn district(&self) -> Option<&str> {
        match self {
            Self::DistrictSelected { district, .. } => Some(district),
            _ => None,
        }
    }

    /// Choose a province. A different code clears regency and district.
    pub fn select_province(self, code: &str) -> Self {
        if code.is_empty() {
            return Self::NoneSelected;
        }
        if self.province() == Some(code) {
            return self;
        }
        Self::ProvinceSelected {
            province: code.to_string(),
        }
    }

    /// Choose a regency. Ignored while no province is selected; a different code clears the district.
    pub fn select_regency(self, code: &str) -> Self {
        let Some(province) = self.province().map(str::to_string) else {
            return self;
        };
        if code.is_empty() {
            return Self::ProvinceSelected { province };
        }
        if self.regency() == Some(code) {
            return self;
        }
        Self::RegencySelected {
            province,
            regency: code.to_string(),
        }
    }

    /// Choose a district. Ignored while no regency is selected.
    pub fn select_district(self, code: &str) -> Self {
        let (Some(province), Some(regency)) = (
            self.province().map(str::to_string),
            self.regency().map(str::to_string),
        ) else {
            return self;
        };
        if code.is_empty() {
            return Self::RegencySelected { province, regency };
        }
        Self::DistrictSelected {
            province,
            regency,
            district: code.to_string(),
        }
    }

    pub fn filter(&self) -> RegionFilter {
        RegionFilter {
            province_code: self.province().map(str::to_string),
            regency_code: self.regency().map(str::to_string),
            district_code: self.district().map(str::to_string),
        }
    }
}
