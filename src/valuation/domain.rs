use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Listing attributes collected from the valuation form.
///
/// Field defaults mirror the form widget defaults so a submission may omit
/// any subset of fields; categorical fields default to their first option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDetails {
    pub bedrooms: u8,
    pub bathrooms: f64,
    pub floors: f64,
    pub flat_area: f64,
    pub lot_area: f64,
    pub basement_area: f64,
    pub area_from_basement: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub age_of_house: u32,
    pub renovated_year: u32,
    pub living_area_renov: f64,
    pub lot_area_renov: f64,
    pub overall_grade: u8,
    pub waterfront: Waterfront,
    pub condition: Condition,
    pub visited: VisitCount,
}

impl Default for PropertyDetails {
    fn default() -> Self {
        Self {
            bedrooms: 3,
            bathrooms: 2.0,
            floors: 1.0,
            flat_area: 1500.0,
            lot_area: 5000.0,
            basement_area: 0.0,
            area_from_basement: 1500.0,
            latitude: 47.5112,
            longitude: -122.257,
            age_of_house: 30,
            renovated_year: 0,
            living_area_renov: 1500.0,
            lot_area_renov: 5000.0,
            overall_grade: 7,
            waterfront: Waterfront::No,
            condition: Condition::Bad,
            visited: VisitCount::None,
        }
    }
}

/// Whether the property fronts a body of water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Waterfront {
    #[default]
    No,
    Yes,
}

impl Waterfront {
    pub fn label(self) -> &'static str {
        match self {
            Waterfront::No => "No",
            Waterfront::Yes => "Yes",
        }
    }
}

impl FromStr for Waterfront {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "no" => Ok(Waterfront::No),
            "yes" => Ok(Waterfront::Yes),
            other => Err(format!("unknown waterfront value '{other}' (expected No or Yes)")),
        }
    }
}

/// Overall condition of the house as reported by the inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    Bad,
    Fair,
    Good,
    Excellent,
    Okay,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::Bad => "Bad",
            Condition::Fair => "Fair",
            Condition::Good => "Good",
            Condition::Excellent => "Excellent",
            Condition::Okay => "Okay",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bad" => Ok(Condition::Bad),
            "fair" => Ok(Condition::Fair),
            "good" => Ok(Condition::Good),
            "excellent" => Ok(Condition::Excellent),
            "okay" => Ok(Condition::Okay),
            other => Err(format!(
                "unknown condition '{other}' (expected Bad, Fair, Good, Excellent, or Okay)"
            )),
        }
    }
}

/// Number of times the property was visited prior to listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisitCount {
    #[default]
    None,
    Once,
    Twice,
    Thrice,
    Four,
}

impl VisitCount {
    pub fn label(self) -> &'static str {
        match self {
            VisitCount::None => "None",
            VisitCount::Once => "Once",
            VisitCount::Twice => "Twice",
            VisitCount::Thrice => "Thrice",
            VisitCount::Four => "Four",
        }
    }
}

impl FromStr for VisitCount {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(VisitCount::None),
            "once" => Ok(VisitCount::Once),
            "twice" => Ok(VisitCount::Twice),
            "thrice" => Ok(VisitCount::Thrice),
            "four" => Ok(VisitCount::Four),
            other => Err(format!(
                "unknown visit count '{other}' (expected None, Once, Twice, Thrice, or Four)"
            )),
        }
    }
}
