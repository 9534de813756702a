use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// The `strftime` format of the `date` field on an [`Expense`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single spending event.
///
/// Records are created only by [`crate::ExpenseStore::insert`], which assigns
/// the `id` and captures the `date`. In the data file an expense is an object
/// with exactly these five fields.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    id: u64,
    amount: Amount,
    category: String,
    description: String,
    date: String,
}

impl Expense {
    pub(crate) fn new(
        id: u64,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// The record id, assigned in insertion order starting at 1.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The amount spent.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The category, trimmed of surrounding whitespace but otherwise as entered.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The free-form description. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The local timestamp at which the record was created, in [`DATE_FORMAT`].
    pub fn date(&self) -> &str {
        &self.date
    }
}
