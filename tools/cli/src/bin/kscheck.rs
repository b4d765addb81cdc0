use std::env::current_dir;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use scenario_checker::{check_file, discover, Settings};

/// Checks that .ks scenario text fits the configured on-screen row budget.
///
/// Runs from `<game>/others/<tool>` and reads `<game>/scenario`. Behavior is
/// driven entirely by `settings.json` next to the binary; there are no
/// operational flags.
#[derive(Parser)]
#[command(version, about = "Scenario text length checker for .ks scripts")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    let scenario_dir = locate_scenario_dir()?;

    let settings = Settings::load_or_create(Path::new("settings.json"))?;

    for file in discover(&scenario_dir)? {
        for violation in check_file(&file, &settings)? {
            println!("{violation}");
        }
    }
    Ok(())
}

/// Resolves `../../scenario` after confirming the tool sits inside an
/// `others` directory. Either precondition failing aborts before any file is
/// touched.
fn locate_scenario_dir() -> Result<PathBuf> {
    let cwd = current_dir().context("resolve working directory")?;
    let parent = cwd
        .parent()
        .filter(|dir| dir.file_name() == Some(OsStr::new("others")));
    let Some(parent) = parent else {
        bail!("このアプリケーションはothersディレクトリに配置してください。");
    };
    let Some(game_root) = parent.parent() else {
        bail!("このアプリケーションはothersディレクトリに配置してください。");
    };
    let scenario_dir = game_root.join("scenario");
    if !scenario_dir.is_dir() {
        bail!("scenarioディレクトリが存在しません。");
    }
    Ok(scenario_dir)
}
