use crate::models::{ActivityType, BudgetCategory, Season};

/// Validation failures for filter criteria
///
/// The Display text is the caller-facing contract: tool operations surface
/// these messages verbatim as their result string instead of propagating a
/// structured error. The valid-value lists come from the enums themselves,
/// so the messages cannot drift from what the parsers accept.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid activity type. Please use one of: {}", ActivityType::allowed())]
    InvalidActivity,

    #[error("Invalid budget category. Please use one of: {}", BudgetCategory::allowed())]
    InvalidBudget,

    #[error("Invalid season. Please use one of: {}", Season::allowed())]
    InvalidSeason,

    /// Catch-all for requests that cannot be read at all (multi-criteria path)
    #[error(
        "Invalid input. Please check your parameters and try again.\nActivity types: {}\nBudget categories: {}\nSeasons: {}",
        ActivityType::allowed(),
        BudgetCategory::allowed(),
        Season::allowed()
    )]
    InvalidInput,
}
