use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Debug, Error, Diagnostic)]
pub enum CheckError {
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code("kscheck.io"))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scenario walk failed: {0}")]
    #[diagnostic(code("kscheck.walk"))]
    Walk(#[from] walkdir::Error),
    #[error("settings file is malformed: {message}")]
    #[diagnostic(code("kscheck.settings_parse"))]
    SettingsParse {
        message: String,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
    #[error("failed to write settings to {}: {message}", path.display())]
    #[diagnostic(code("kscheck.settings_write"))]
    SettingsWrite { path: PathBuf, message: String },
}
