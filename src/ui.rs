//! The interactive menu: collects user input, calls the expense store and
//! formats results for display.
//!
//! Input recovery happens here. A malformed amount never reaches the store,
//! and a rejected insert is reported without ending the menu loop. The loop
//! reads from any `BufRead` and writes to any `Write` so tests can drive it
//! with in-memory buffers.

use crate::model::Amount;
use crate::{ExpenseStore, Result};
use anyhow::{bail, Context};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU_WIDTH: usize = 50;
const TABLE_WIDTH: usize = 80;

/// Runs the menu loop over stdin/stdout until the user chooses to exit.
pub fn run(store: &mut ExpenseStore) -> Result<()> {
    let stdin = io::stdin();
    menu_loop(store, &mut stdin.lock(), &mut io::stdout())
}

fn menu_loop(
    store: &mut ExpenseStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    writeln!(output, "\nWelcome to Expense Tracker!")?;
    loop {
        write_menu(output)?;
        let choice = prompt(input, output, "Enter your choice (1-5): ")?;
        match choice.as_str() {
            "1" => add_expense(store, input, output)?,
            "2" => view_all(store, output)?,
            "3" => view_total(store, output)?,
            "4" => view_by_category(store, output)?,
            "5" => {
                writeln!(output, "\nGoodbye!")?;
                return Ok(());
            }
            other => writeln!(
                output,
                "\nInvalid choice '{other}'. Please enter a number from 1 to 5."
            )?,
        }
    }
}

fn write_menu(output: &mut impl Write) -> Result<()> {
    writeln!(output, "\n{}", "=".repeat(MENU_WIDTH))?;
    writeln!(output, "{:^width$}", "EXPENSE TRACKER", width = MENU_WIDTH)?;
    writeln!(output, "{}", "=".repeat(MENU_WIDTH))?;
    writeln!(output, "1. Add new expense")?;
    writeln!(output, "2. View all expenses")?;
    writeln!(output, "3. View total spending")?;
    writeln!(output, "4. View spending by category")?;
    writeln!(output, "5. Exit")?;
    writeln!(output, "{}", "=".repeat(MENU_WIDTH))?;
    Ok(())
}

fn add_expense(
    store: &mut ExpenseStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    writeln!(output, "\n--- Add New Expense ---")?;
    let amount_text = prompt(input, output, "Enter amount: $")?;
    let amount = match Amount::from_str(&amount_text) {
        Ok(amount) => amount,
        Err(_) => {
            writeln!(
                output,
                "\nError: Invalid amount '{amount_text}'. Please enter a number."
            )?;
            return Ok(());
        }
    };
    let category = prompt(
        input,
        output,
        "Enter category (e.g. food, transport, entertainment): ",
    )?;
    let description = prompt(input, output, "Enter description (optional): ")?;

    match store.insert(amount, &category, &description) {
        Ok(expense) => {
            writeln!(output, "\nExpense added successfully!")?;
            writeln!(output, "  ID: {}", expense.id())?;
            writeln!(output, "  Amount: {}", expense.amount())?;
            writeln!(output, "  Category: {}", expense.category())?;
            writeln!(output, "  Date: {}", expense.date())?;
        }
        Err(e) => writeln!(output, "\nError adding expense: {e:#}")?,
    }
    Ok(())
}

fn view_all(store: &ExpenseStore, output: &mut impl Write) -> Result<()> {
    let expenses = store.list_all();
    if expenses.is_empty() {
        writeln!(output, "\nNo expenses recorded yet.")?;
        return Ok(());
    }

    writeln!(output, "\n--- All Expenses ---")?;
    writeln!(
        output,
        "{:<5} {:<20} {:<15} {:<10} {}",
        "ID", "Date", "Category", "Amount", "Description"
    )?;
    writeln!(output, "{}", "-".repeat(TABLE_WIDTH))?;
    for expense in &expenses {
        writeln!(
            output,
            "{:<5} {:<20} {:<15} {:<10} {}",
            expense.id(),
            expense.date(),
            expense.category(),
            expense.amount().to_string(),
            expense.description()
        )?;
    }
    writeln!(output, "{}", "-".repeat(TABLE_WIDTH))?;
    writeln!(output, "Total expenses: {}", expenses.len())?;
    Ok(())
}

fn view_total(store: &ExpenseStore, output: &mut impl Write) -> Result<()> {
    let total = store.total();
    let count = store.count();
    writeln!(output, "\n--- Total Spending Summary ---")?;
    writeln!(output, "Total amount spent: {total}")?;
    writeln!(output, "Number of expenses: {count}")?;
    if count > 0 {
        writeln!(output, "Average expense: {}", average(total, count))?;
    }
    Ok(())
}

fn view_by_category(store: &ExpenseStore, output: &mut impl Write) -> Result<()> {
    let mut categories: Vec<String> = store.categories().into_iter().collect();
    if categories.is_empty() {
        writeln!(output, "\nNo expenses recorded yet.")?;
        return Ok(());
    }
    // The store's category set is unordered; sort it for display.
    categories.sort();

    writeln!(output, "\n--- Spending by Category ---")?;
    writeln!(
        output,
        "{:<20} {:<15} {}",
        "Category", "Amount", "Percentage"
    )?;
    writeln!(output, "{}", "-".repeat(MENU_WIDTH))?;

    let total = store.total();
    for category in categories {
        let category_total = store.total_by_category(&category);
        writeln!(
            output,
            "{:<20} {:<15} {:.1}%",
            category,
            category_total.to_string(),
            percentage(category_total, total)
        )?;
    }
    writeln!(output, "{}", "-".repeat(MENU_WIDTH))?;
    writeln!(output, "{:<20} {:<15} 100.0%", "Total", total.to_string())?;
    Ok(())
}

/// The mean expense amount, rounded to whole cents. Only meaningful when
/// `count` is nonzero.
fn average(total: Amount, count: usize) -> Amount {
    Amount::new((total.value() / Decimal::from(count as u64)).round_dp(2))
}

/// `part` as a percentage of `total`, or zero when `total` is zero.
fn percentage(part: Amount, total: Amount) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (part.value() / total.value() * Decimal::from(100u64))
        .to_f64()
        .unwrap_or_default()
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Unable to read input")?;
    if read == 0 {
        bail!("The input stream closed before the menu exited");
    }
    Ok(line.trim().to_string())
}
