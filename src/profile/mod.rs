//! Session input collected from the user and its validation

mod budget;
mod data;
pub mod loader;

pub use budget::{BudgetSummary, ExpenseShare};
pub use data::{
    breakdown_categories, education_category, BreakdownItem, Dependent, PersonalInfo, SessionInput,
    DEFAULT_EDUCATION_START_AGE, HOME_LOAN_EMIS, LIVING_EXPENSES, MAX_AGE, MAX_DEPENDENTS, MAX_DEPENDENT_AGE,
    MIN_CURRENT_AGE, OTHER_SAVINGS, RETIREMENT_SAVINGS, SAVINGS_CATEGORIES, SHORT_TERM_GOALS,
};
pub use loader::{load_session, load_session_from_reader, save_session, SessionFormat};
