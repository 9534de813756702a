//! The expense store: owns the in-memory list of records and keeps it in sync
//! with the backing JSON data file.

use crate::fs;
use crate::model::{Amount, Expense, DATE_FORMAT};
use crate::Result;
use anyhow::{bail, Context};
use chrono::Local;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Owns the recorded expenses and the backing data file.
///
/// The full record list is rewritten to the data file after every successful
/// insert, so there is never unsaved state for a caller to flush. A store is
/// constructed explicitly and passed to whoever needs it; nothing here is
/// process-global.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    data_file: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Opens a store backed by `data_file`, loading any records already saved
    /// there.
    ///
    /// A missing file starts an empty ledger. A file that cannot be read, or
    /// whose content does not parse as a list of expenses, also starts an
    /// empty ledger; the unreadable content is overwritten by the next
    /// successful insert.
    pub fn open(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        let expenses = load_expenses(&data_file);
        Self {
            data_file,
            expenses,
        }
    }

    /// Records a new expense and rewrites the data file.
    ///
    /// The amount must not be negative and the category must contain at least
    /// one non-whitespace character. The category is stored trimmed; the
    /// description is stored as given. Returns the created record with its
    /// assigned id and timestamp.
    ///
    /// Validation failures leave the store untouched. A failure to write the
    /// data file is returned to the caller, but the record stays in memory;
    /// the next successful insert writes it out.
    pub fn insert(&mut self, amount: Amount, category: &str, description: &str) -> Result<Expense> {
        if amount.is_negative() {
            bail!("Invalid amount {amount}: an expense amount must not be negative");
        }
        let category = category.trim();
        if category.is_empty() {
            bail!("Invalid category: a category must contain at least one non-whitespace character");
        }
        let expense = Expense::new(
            self.expenses.len() as u64 + 1,
            amount,
            category,
            description,
            Local::now().format(DATE_FORMAT).to_string(),
        );
        self.expenses.push(expense.clone());
        self.save()?;
        Ok(expense)
    }

    /// Returns a copy of every recorded expense, in insertion order.
    ///
    /// The returned list is independent of the store; mutating it has no
    /// effect on later calls.
    pub fn list_all(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// The number of recorded expenses.
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    /// The sum of all recorded amounts. Zero when no records exist.
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// The sum of recorded amounts whose category matches `category`, compared
    /// case-insensitively. Zero when nothing matches.
    pub fn total_by_category(&self, category: &str) -> Amount {
        let wanted = category.trim().to_lowercase();
        self.expenses
            .iter()
            .filter(|expense| expense.category().to_lowercase() == wanted)
            .map(Expense::amount)
            .sum()
    }

    /// The distinct category values across all records, in no particular
    /// order. Display ordering is the caller's concern.
    pub fn categories(&self) -> HashSet<String> {
        self.expenses
            .iter()
            .map(|expense| expense.category().to_string())
            .collect()
    }

    /// The location of the backing data file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Writes the full expense list to the data file, creating the parent
    /// directory first if it does not exist.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.expenses)
            .context("Unable to serialize the expense list")?;
        fs::write_all(&self.data_file, data)
    }
}

fn load_expenses(path: &Path) -> Vec<Expense> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}
