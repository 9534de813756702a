//! Types that represent the core data model, such as `Expense` and `Amount`.
mod amount;
mod expense;

pub use amount::Amount;
pub use expense::{Expense, DATE_FORMAT};
