//! These structs provide the CLI interface for the expenses CLI.

use clap::Parser;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: A command-line tool for tracking personal spending.
///
/// Records spending events to a local JSON file and reports aggregate views of
/// them through an interactive menu. Each expense has an amount, a category,
/// an optional description and the timestamp at which it was recorded. State
/// is saved after every insert, so exiting the menu never loses data.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The file where expense records are stored. Defaults to
    /// $HOME/expenses/expenses.json
    #[arg(long, env = "EXPENSES_FILE", default_value_t = default_data_file())]
    data_file: DisplayPath,
}

impl Args {
    pub fn new(log_level: LevelFilter, data_file: PathBuf) -> Self {
        Self {
            log_level,
            data_file: data_file.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data_file(&self) -> &DisplayPath {
        &self.data_file
    }
}

fn default_data_file() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses").join("expenses.json"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --data-file or EXPENSES_FILE instead of relying on the default \
                data file location. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("expenses.json")
        }
    })
}

/// A `PathBuf` wrapper that clap can display and parse.
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}
