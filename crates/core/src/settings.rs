use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{CheckError, CheckResult};

/// Tag vocabularies and the row budget, persisted as `settings.json` next to
/// the tool. Stored keys are camelCase so the file matches what authors
/// already hand-edit.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Tags that force a row break inside a statement, e.g. `[r]`.
    pub linefeed_tag: Vec<String>,
    /// Tags that terminate a statement, e.g. `[p]`.
    pub page_break_tag: Vec<String>,
    /// Maximum wrapped rows one statement may occupy.
    pub line_count: usize,
    /// Characters per display row. Must be positive.
    pub max_row_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            linefeed_tag: vec!["[r]".to_string()],
            page_break_tag: vec!["[p]".to_string()],
            line_count: 2,
            max_row_length: 30,
        }
    }
}

impl Settings {
    /// Loads persisted settings, or writes the defaults and returns them when
    /// no settings file exists yet. Malformed settings are a fatal parse
    /// error, never repaired.
    pub fn load_or_create(path: &Path) -> CheckResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }
        let raw = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|err| settings_parse_error(&raw, &err))
    }

    /// Persists the settings with 4-space indentation, non-ASCII left
    /// unescaped, so the file stays hand-editable.
    pub fn save_to(&self, path: &Path) -> CheckResult<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(|err| CheckError::SettingsWrite {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        fs::write(path, buf).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cold]
#[inline(never)]
fn settings_parse_error(input: &str, err: &serde_json::Error) -> CheckError {
    let offset = byte_offset(input, err.line(), err.column());
    CheckError::SettingsParse {
        message: err.to_string(),
        src: input.to_string(),
        span: (offset, 1).into(),
    }
}

/// Converts serde_json's 1-based line/column into a byte offset into `input`.
fn byte_offset(input: &str, line: usize, column: usize) -> usize {
    if line == 0 || column == 0 {
        return 0;
    }
    let mut offset = 0usize;
    for (current, chunk) in input.split_inclusive('\n').enumerate() {
        if current + 1 == line {
            let byte_index = chunk
                .char_indices()
                .nth(column - 1)
                .map(|(idx, _)| idx)
                .unwrap_or(chunk.len().saturating_sub(1));
            return offset + byte_index;
        }
        offset += chunk.len();
    }
    input.len().saturating_sub(1)
}
