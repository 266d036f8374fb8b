use crate::models::{ActivityType, BudgetCategory, Season};

/// Filter values (possibly partial) supplied in one recommendation request
///
/// Unset fields mean "no opinion". Constructed per request and discarded
/// once the response string is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub activity: Option<ActivityType>,
    pub budget: Option<BudgetCategory>,
    pub season: Option<Season>,
    pub family_friendly: Option<bool>,
    /// Requested number of destinations. Response blocks are fixed at three
    /// entries today, so matching ignores this; kept for future use.
    pub count: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            activity: None,
            budget: None,
            season: None,
            family_friendly: None,
            count: 3,
        }
    }
}

impl FilterCriteria {
    /// Criteria with only the activity populated
    pub fn for_activity(activity: ActivityType) -> Self {
        Self {
            activity: Some(activity),
            ..Self::default()
        }
    }

    /// Criteria with only the budget populated
    pub fn for_budget(budget: BudgetCategory) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }

    /// Criteria with only the season populated
    pub fn for_season(season: Season) -> Self {
        Self {
            season: Some(season),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_opinion_and_three_results() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.activity, None);
        assert_eq!(criteria.budget, None);
        assert_eq!(criteria.season, None);
        assert_eq!(criteria.family_friendly, None);
        assert_eq!(criteria.count, 3);
    }

    #[test]
    fn test_single_field_constructors_leave_the_rest_unset() {
        let criteria = FilterCriteria::for_budget(BudgetCategory::Luxury);
        assert_eq!(criteria.budget, Some(BudgetCategory::Luxury));
        assert_eq!(criteria.activity, None);
        assert_eq!(criteria.season, None);
        assert_eq!(criteria.family_friendly, None);
    }
}
