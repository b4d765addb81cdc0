use std::fmt;

/// A statement that wraps to more rows than the configured budget allows.
/// Rendered exactly as the game authors expect to read it, one line per
/// offending statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub display_path: String,
    /// 1-based line the statement was completed on.
    pub line: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}行: 文章が長すぎます。", self.display_path, self.line)
    }
}
