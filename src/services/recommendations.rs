//! Destination matching: ordered first-match dispatch over fixed blocks.
//!
//! Matching is NOT a conjunctive filter. The guards below are evaluated in
//! order and the first one that holds picks the response block, so an
//! earlier criterion wins over any later one: BEACH activity beats LUXURY
//! budget, LUXURY budget beats WINTER season, and so on. Criteria that
//! match no guard fall through to the popular block, which makes
//! [`recommend`] total once its inputs are validated.

use crate::error::ValidationError;
use crate::models::{ActivityType, BudgetCategory, FilterCriteria, Season};
use crate::services::catalog::{self, Block};

/// Ordered (guard, block) pairs; first match wins
const DISPATCH: [(fn(&FilterCriteria) -> bool, Block); 5] = [
    (
        |criteria| criteria.activity == Some(ActivityType::Beach),
        catalog::BEACH,
    ),
    (
        |criteria| criteria.activity == Some(ActivityType::Cultural),
        catalog::CULTURAL,
    ),
    (
        |criteria| criteria.budget == Some(BudgetCategory::Luxury),
        catalog::LUXURY,
    ),
    (
        |criteria| criteria.season == Some(Season::Winter),
        catalog::WINTER,
    ),
    (
        |criteria| criteria.family_friendly == Some(true),
        catalog::FAMILY_FRIENDLY,
    ),
];

/// Selects the response block for the given criteria
pub fn recommend(criteria: &FilterCriteria) -> String {
    for (applies, block) in &DISPATCH {
        if applies(criteria) {
            return block.render();
        }
    }
    catalog::POPULAR.render()
}

/// Get travel destination recommendations based on preferred activity type
///
/// Returns a display string either way: the matched block on success, the
/// fixed activity error message on an unknown value.
pub fn get_destinations_by_activity(activity_type: &str) -> String {
    match activity_type.parse::<ActivityType>() {
        Ok(activity) => recommend(&FilterCriteria::for_activity(activity)),
        Err(err) => err.to_string(),
    }
}

/// Get travel destination recommendations based on budget category
pub fn get_destinations_by_budget(budget: &str) -> String {
    match budget.parse::<BudgetCategory>() {
        Ok(budget) => recommend(&FilterCriteria::for_budget(budget)),
        Err(err) => err.to_string(),
    }
}

/// Get travel destination recommendations based on preferred season
pub fn get_destinations_by_season(season: &str) -> String {
    match season.parse::<Season>() {
        Ok(season) => recommend(&FilterCriteria::for_season(season)),
        Err(err) => err.to_string(),
    }
}

/// Get travel destination recommendations based on multiple criteria
///
/// Absent or empty string fields are "no opinion" and skip validation. The
/// first invalid provided field short-circuits with its own error message,
/// checked in activity, budget, season order.
pub fn get_destinations_by_preferences(
    activity: Option<&str>,
    budget: Option<&str>,
    season: Option<&str>,
    family_friendly: Option<bool>,
) -> String {
    match parse_preferences(activity, budget, season, family_friendly) {
        Ok(criteria) => recommend(&criteria),
        Err(err) => err.to_string(),
    }
}

fn parse_preferences(
    activity: Option<&str>,
    budget: Option<&str>,
    season: Option<&str>,
    family_friendly: Option<bool>,
) -> Result<FilterCriteria, ValidationError> {
    let mut criteria = FilterCriteria {
        family_friendly,
        ..FilterCriteria::default()
    };
    if let Some(raw) = provided(activity) {
        criteria.activity = Some(raw.parse()?);
    }
    if let Some(raw) = provided(budget) {
        criteria.budget = Some(raw.parse()?);
    }
    if let Some(raw) = provided(season) {
        criteria.season = Some(raw.parse()?);
    }
    Ok(criteria)
}

/// Treats empty strings the same as absent fields
fn provided(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Get a list of all available travel destinations
///
/// Same fixed block as the no-criteria recommendation, produced without
/// going through `recommend`.
pub fn get_all_destinations() -> String {
    catalog::POPULAR.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_beats_budget() {
        let beach_only = recommend(&FilterCriteria::for_activity(ActivityType::Beach));
        let beach_and_luxury = recommend(&FilterCriteria {
            budget: Some(BudgetCategory::Luxury),
            ..FilterCriteria::for_activity(ActivityType::Beach)
        });
        assert_eq!(beach_only, beach_and_luxury);
        assert!(beach_only.starts_with("Here are some beach destinations for you:"));
    }

    #[test]
    fn test_budget_beats_season() {
        let result = recommend(&FilterCriteria {
            season: Some(Season::Winter),
            ..FilterCriteria::for_budget(BudgetCategory::Luxury)
        });
        assert!(result.starts_with("Here are some luxury destinations for you:"));
    }

    #[test]
    fn test_luxury_alone_is_not_the_default_block() {
        let result = recommend(&FilterCriteria::for_budget(BudgetCategory::Luxury));
        assert!(result.starts_with("Here are some luxury destinations for you:"));
        assert!(result.contains("Santorini, Greece"));
    }

    #[test]
    fn test_unmatched_activity_falls_through() {
        // ADVENTURE matches no guard, so the criteria resolve to the default.
        let result = recommend(&FilterCriteria::for_activity(ActivityType::Adventure));
        assert!(result.starts_with("Here are some popular travel destinations:"));
    }

    #[test]
    fn test_unmatched_activity_still_yields_later_match() {
        let result = recommend(&FilterCriteria {
            budget: Some(BudgetCategory::Luxury),
            ..FilterCriteria::for_activity(ActivityType::Adventure)
        });
        assert!(result.starts_with("Here are some luxury destinations for you:"));
    }

    #[test]
    fn test_family_friendly_flag() {
        let on = recommend(&FilterCriteria {
            family_friendly: Some(true),
            ..FilterCriteria::default()
        });
        assert!(on.starts_with("Here are some family-friendly destinations for you:"));

        let off = recommend(&FilterCriteria {
            family_friendly: Some(false),
            ..FilterCriteria::default()
        });
        assert!(off.starts_with("Here are some popular travel destinations:"));
    }

    #[test]
    fn test_no_criteria_equals_all_destinations() {
        assert_eq!(recommend(&FilterCriteria::default()), get_all_destinations());
    }

    #[test]
    fn test_winter_season_block() {
        let result = get_destinations_by_season("winter");
        assert!(result.starts_with("Here are some winter destinations for you:"));
        assert!(result.contains("Chamonix, France"));
    }

    #[test]
    fn test_every_valid_activity_is_accepted_any_case() {
        for activity in ActivityType::ALL {
            for raw in [
                activity.as_str().to_string(),
                activity.as_str().to_lowercase(),
            ] {
                let result = get_destinations_by_activity(&raw);
                assert!(
                    result.starts_with("Here are some"),
                    "{raw} was rejected: {result}"
                );
            }
        }
    }

    #[test]
    fn test_wrapper_case_insensitivity_is_exact() {
        assert_eq!(
            get_destinations_by_activity("beach"),
            get_destinations_by_activity("BEACH")
        );
    }

    #[test]
    fn test_invalid_wrapper_input_returns_error_message() {
        assert_eq!(
            get_destinations_by_activity("SKIING"),
            ValidationError::InvalidActivity.to_string()
        );
        assert_eq!(
            get_destinations_by_budget("FREE"),
            ValidationError::InvalidBudget.to_string()
        );
        assert_eq!(
            get_destinations_by_season("MONSOON"),
            ValidationError::InvalidSeason.to_string()
        );
    }

    #[test]
    fn test_preferences_empty_strings_are_skipped() {
        let result = get_destinations_by_preferences(Some(""), Some(""), Some(""), None);
        assert!(result.starts_with("Here are some popular travel destinations:"));
    }

    #[test]
    fn test_preferences_invalid_field_uses_field_error() {
        assert_eq!(
            get_destinations_by_preferences(Some("INVALID"), None, None, None),
            ValidationError::InvalidActivity.to_string()
        );
        // A later invalid field reports its own message even when earlier
        // fields are valid.
        assert_eq!(
            get_destinations_by_preferences(Some("adventure"), Some("FREE"), None, None),
            ValidationError::InvalidBudget.to_string()
        );
        assert_eq!(
            get_destinations_by_preferences(None, Some("moderate"), Some("MONSOON"), None),
            ValidationError::InvalidSeason.to_string()
        );
    }

    #[test]
    fn test_preferences_all_fields_follow_dispatch_order() {
        let result = get_destinations_by_preferences(
            Some("cultural"),
            Some("luxury"),
            Some("winter"),
            Some(true),
        );
        assert!(result.starts_with("Here are some cultural destinations for you:"));
    }

    #[test]
    fn test_operations_are_idempotent() {
        assert_eq!(
            get_destinations_by_preferences(None, Some("luxury"), None, Some(true)),
            get_destinations_by_preferences(None, Some("luxury"), None, Some(true))
        );
        assert_eq!(get_all_destinations(), get_all_destinations());
    }
}
