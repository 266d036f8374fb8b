use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A single destination record in the catalog
///
/// Records are compiled into the binary and never mutated, so the text
/// fields are static borrows rather than owned strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// City and country, e.g. "Kyoto, Japan"
    pub name: &'static str,
    /// One-line highlight shown under the name
    pub description: &'static str,
    pub activity: ActivityType,
    pub budget: BudgetCategory,
    pub season: Season,
    pub family_friendly: bool,
}

/// Category of traveler activity a destination caters to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Beach,
    Adventure,
    Cultural,
    Relaxation,
    UrbanExploration,
    Nature,
    WinterSports,
}

impl ActivityType {
    /// Every accepted value, in the order callers see them listed
    pub const ALL: [ActivityType; 7] = [
        ActivityType::Beach,
        ActivityType::Adventure,
        ActivityType::Cultural,
        ActivityType::Relaxation,
        ActivityType::UrbanExploration,
        ActivityType::Nature,
        ActivityType::WinterSports,
    ];

    /// Canonical upper-case name as it appears on the wire and in rendered blocks
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Beach => "BEACH",
            ActivityType::Adventure => "ADVENTURE",
            ActivityType::Cultural => "CULTURAL",
            ActivityType::Relaxation => "RELAXATION",
            ActivityType::UrbanExploration => "URBAN_EXPLORATION",
            ActivityType::Nature => "NATURE",
            ActivityType::WinterSports => "WINTER_SPORTS",
        }
    }

    pub(crate) fn allowed() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ValidationError;

    /// Case-insensitive: input is upper-cased before the membership check
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "BEACH" => Ok(ActivityType::Beach),
            "ADVENTURE" => Ok(ActivityType::Adventure),
            "CULTURAL" => Ok(ActivityType::Cultural),
            "RELAXATION" => Ok(ActivityType::Relaxation),
            "URBAN_EXPLORATION" => Ok(ActivityType::UrbanExploration),
            "NATURE" => Ok(ActivityType::Nature),
            "WINTER_SPORTS" => Ok(ActivityType::WinterSports),
            _ => Err(ValidationError::InvalidActivity),
        }
    }
}

/// Cost tier of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCategory {
    Budget,
    Moderate,
    Luxury,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 3] = [
        BudgetCategory::Budget,
        BudgetCategory::Moderate,
        BudgetCategory::Luxury,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetCategory::Budget => "BUDGET",
            BudgetCategory::Moderate => "MODERATE",
            BudgetCategory::Luxury => "LUXURY",
        }
    }

    pub(crate) fn allowed() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetCategory {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "BUDGET" => Ok(BudgetCategory::Budget),
            "MODERATE" => Ok(BudgetCategory::Moderate),
            "LUXURY" => Ok(BudgetCategory::Luxury),
            _ => Err(ValidationError::InvalidBudget),
        }
    }
}

/// Time of year a destination is best visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllYear,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::AllYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Autumn => "AUTUMN",
            Season::Winter => "WINTER",
            Season::AllYear => "ALL_YEAR",
        }
    }

    pub(crate) fn allowed() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "SPRING" => Ok(Season::Spring),
            "SUMMER" => Ok(Season::Summer),
            "AUTUMN" => Ok(Season::Autumn),
            "WINTER" => Ok(Season::Winter),
            "ALL_YEAR" => Ok(Season::AllYear),
            _ => Err(ValidationError::InvalidSeason),
        }
    }
}
