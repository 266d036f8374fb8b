pub mod criteria;
pub mod destination;

pub use criteria::FilterCriteria;
pub use destination::{ActivityType, BudgetCategory, Destination, Season};
