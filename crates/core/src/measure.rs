use crate::settings::Settings;
use crate::statement::Statement;

/// Number of on-screen rows `fragment` occupies when wrapped every
/// `max_row_length` characters. The empty fragment occupies no rows.
/// Characters are Unicode scalars, not bytes; `max_row_length` must be
/// positive.
pub fn wrapped_rows(fragment: &str, max_row_length: usize) -> usize {
    fragment.chars().count().div_ceil(max_row_length)
}

/// Whether a statement's fragments together wrap to more rows than the
/// configured budget allows.
pub fn exceeds(statement: &Statement, settings: &Settings) -> bool {
    let rows: usize = statement
        .fragments
        .iter()
        .map(|fragment| wrapped_rows(fragment, settings.max_row_length))
        .sum();
    rows > settings.line_count
}
