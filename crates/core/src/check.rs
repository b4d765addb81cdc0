use std::fs;

use crate::discover::ScriptFile;
use crate::error::{CheckError, CheckResult};
use crate::measure::exceeds;
use crate::report::Violation;
use crate::settings::Settings;
use crate::statement::Statements;

/// Checks one script file against the row budget. A read failure is fatal to
/// the whole run.
pub fn check_file(file: &ScriptFile, settings: &Settings) -> CheckResult<Vec<Violation>> {
    let text = fs::read_to_string(&file.path).map_err(|source| CheckError::Io {
        path: file.path.clone(),
        source,
    })?;
    Ok(check_lines(text.lines(), &file.display_path, settings))
}

/// Runs the row-budget check over raw script lines. One violation is emitted
/// per offending statement, so a single line can report more than once.
pub fn check_lines<'a>(
    lines: impl Iterator<Item = &'a str>,
    display_path: &str,
    settings: &Settings,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (line, statements) in Statements::new(lines, settings) {
        for statement in &statements {
            if exceeds(statement, settings) {
                violations.push(Violation {
                    display_path: display_path.to_string(),
                    line,
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(line_count: usize, max_row_length: usize) -> Settings {
        Settings {
            line_count,
            max_row_length,
            ..Settings::default()
        }
    }

    fn check(lines: &[&str], settings: &Settings) -> Vec<Violation> {
        check_lines(lines.iter().copied(), "first.ks", settings)
    }

    #[test]
    fn test_long_statement_is_reported() {
        // 36 characters wrap to 4 rows against a budget of 2.
        let violations = check(&["This is a very long line of text[p]"], &config(2, 10));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[0].display_path, "first.ks");
    }

    #[test]
    fn test_short_statement_passes() {
        let violations = check(&["Short[p]"], &config(2, 10));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_linefeed_rows_fit_the_budget_together() {
        // Two full rows of ten, one per linefeed fragment: 2 <= 2.
        let violations = check(&["AAAAAAAAAA[r]BBBBBBBBBB[p]"], &config(2, 10));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_carried_statement_is_reported_on_its_final_line() {
        let violations = check(&["AAA", "BBB[p]"], &config(0, 100));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 2);
    }

    #[test]
    fn test_multiple_offenders_on_one_line_report_each() {
        let line = format!("{}[p]{}[p]", "a".repeat(25), "b".repeat(25));
        let violations = check(&[line.as_str()], &config(2, 10));
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.line == 1));
    }

    #[test]
    fn test_open_tail_is_never_reported() {
        // No page break: the statement stays open until the file ends.
        let violations = check(&["a very very long unterminated statement"], &config(1, 5));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_stripped_tags_do_not_count() {
        // 10 visible characters plus markup that renders to nothing.
        let violations = check(
            &["[wait time=200]AAAAAAAAAA[delay speed=10][p]"],
            &config(1, 10),
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_comment_between_continuation_lines() {
        let violations = check(&["AAA", "; note to self", "BBB[p]"], &config(0, 100));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 3);
    }
}
