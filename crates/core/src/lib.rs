mod check;
mod discover;
mod error;
mod measure;
mod report;
mod settings;
mod statement;

pub use check::{check_file, check_lines};
pub use discover::{discover, ScriptFile, SCRIPT_EXTENSION};
pub use error::{CheckError, CheckResult};
pub use measure::{exceeds, wrapped_rows};
pub use report::Violation;
pub use settings::Settings;
pub use statement::{Splitter, Statement, Statements};
