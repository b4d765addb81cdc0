use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CheckResult;

/// The extension marking scenario script files.
pub const SCRIPT_EXTENSION: &str = "ks";

/// A script file found under the scenario root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptFile {
    pub path: PathBuf,
    /// Path relative to the scenario root, only used to label diagnostics.
    pub display_path: String,
}

/// Recursively collects every script file under `root`. Walk errors abort
/// the run; partial results would be misleading.
pub fn discover(root: &Path) -> CheckResult<Vec<ScriptFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() || path.extension().and_then(|ext| ext.to_str()) != Some(SCRIPT_EXTENSION)
        {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        files.push(ScriptFile {
            path: path.to_path_buf(),
            display_path: rel.to_string_lossy().replace('\\', "/"),
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_finds_only_script_files_recursively() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("chapter1");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::write(dir.path().join("first.ks"), "").expect("write");
        fs::write(nested.join("second.ks"), "").expect("write");
        fs::write(nested.join("notes.txt"), "").expect("write");

        let mut found = discover(dir.path()).expect("discover");
        found.sort_by(|a, b| a.display_path.cmp(&b.display_path));

        let names: Vec<&str> = found.iter().map(|f| f.display_path.as_str()).collect();
        assert_eq!(names, ["chapter1/second.ks", "first.ks"]);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let dir = tempdir().expect("tempdir");
        assert!(discover(dir.path()).expect("discover").is_empty());
    }
}
