//! Jurisdiction codes for per-state compliance rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// A jurisdiction code identifying one legal regime, normally a two-letter
/// US state abbreviation. Codes are normalized to uppercase so lookups are
/// case-insensitive. Unknown codes are valid values; they simply resolve to
/// an empty ruleset at analysis time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jurisdiction(String);

impl Jurisdiction {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_ascii_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Full state name for known US jurisdiction codes.
    pub fn full_name(&self) -> Option<&'static str> {
        let name = match self.0.as_str() {
            "AL" => "Alabama",
            "AK" => "Alaska",
            "AZ" => "Arizona",
            "AR" => "Arkansas",
            "CA" => "California",
            "CO" => "Colorado",
            "CT" => "Connecticut",
            "DE" => "Delaware",
            "FL" => "Florida",
            "GA" => "Georgia",
            "HI" => "Hawaii",
            "ID" => "Idaho",
            "IL" => "Illinois",
            "IN" => "Indiana",
            "IA" => "Iowa",
            "KS" => "Kansas",
            "KY" => "Kentucky",
            "LA" => "Louisiana",
            "ME" => "Maine",
            "MD" => "Maryland",
            "MA" => "Massachusetts",
            "MI" => "Michigan",
            "MN" => "Minnesota",
            "MS" => "Mississippi",
            "MO" => "Missouri",
            "MT" => "Montana",
            "NE" => "Nebraska",
            "NV" => "Nevada",
            "NH" => "New Hampshire",
            "NJ" => "New Jersey",
            "NM" => "New Mexico",
            "NY" => "New York",
            "NC" => "North Carolina",
            "ND" => "North Dakota",
            "OH" => "Ohio",
            "OK" => "Oklahoma",
            "OR" => "Oregon",
            "PA" => "Pennsylvania",
            "RI" => "Rhode Island",
            "SC" => "South Carolina",
            "SD" => "South Dakota",
            "TN" => "Tennessee",
            "TX" => "Texas",
            "UT" => "Utah",
            "VT" => "Vermont",
            "VA" => "Virginia",
            "WA" => "Washington",
            "WV" => "West Virginia",
            "WI" => "Wisconsin",
            "WY" => "Wyoming",
            "DC" => "District of Columbia",
            _ => return None,
        };
        Some(name)
    }

    /// Display name used when a ruleset is created for this jurisdiction:
    /// the full state name when known, otherwise the raw code.
    pub fn display_name(&self) -> &str {
        self.full_name().unwrap_or(&self.0)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Jurisdiction {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_normalized_to_uppercase() {
        assert_eq!(Jurisdiction::new("ca"), Jurisdiction::new("CA"));
        assert_eq!(Jurisdiction::new(" tx ").code(), "TX");
    }

    #[test]
    fn test_known_codes_have_full_names() {
        assert_eq!(Jurisdiction::new("CA").full_name(), Some("California"));
        assert_eq!(Jurisdiction::new("dc").full_name(), Some("District of Columbia"));
    }

    #[test]
    fn test_unknown_codes_fall_back_to_raw_code() {
        let zz = Jurisdiction::new("ZZ");
        assert_eq!(zz.full_name(), None);
        assert_eq!(zz.display_name(), "ZZ");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Jurisdiction::new("NY")).unwrap();
        assert_eq!(json, "\"NY\"");
    }
}
