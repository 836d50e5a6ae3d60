//! List the games already present on a drive.
//!
//! The drive is scanned ad hoc with a declared type of Unknown, so the
//! path heuristics (`wbfs`/`games` directories) drive classification — the
//! same way the original tool inspected a freshly plugged USB stick.

use std::path::Path;

use anyhow::Result;
use rvlman_core::{Config, ConsoleType, Error, GameFolder, export, group, scan};

pub fn run(config: &Config, drive: &Path, json: bool) -> Result<()> {
    if !drive.is_dir() {
        return Err(Error::DriveNotFound(drive.display().to_string()).into());
    }

    let folders = [GameFolder::new(drive, ConsoleType::Unknown)];
    let outcome = scan(&folders);
    let titles = group(&outcome.records, &config.exclusion_set());

    if json {
        println!("{}", serde_json::to_string_pretty(&titles)?);
        return Ok(());
    }

    println!("{}", export::format_title_table(&titles));
    println!();
    println!("{}", export::format_scan_summary(&outcome));
    Ok(())
}
