//! Remove command: delete a title from a drive.

use std::path::Path;

use anyhow::{Result, bail};
use rvlman_core::{Config, ConsoleType, GameFolder, delete_title, group, scan};

pub fn run(config: &Config, drive: &Path, id: &str) -> Result<()> {
    if !drive.is_dir() {
        bail!("Drive not found: {}", drive.display());
    }

    // Find the title on the drive itself so the delete knows its console
    // type and layout.
    let folders = [GameFolder::new(drive, ConsoleType::Unknown)];
    let outcome = scan(&folders);
    let titles = group(&outcome.records, &config.exclusion_set());

    let Some(title) = titles.iter().find(|t| t.title_id == id) else {
        bail!("No title with ID {} on {}", id, drive.display());
    };

    let result = delete_title(drive, title);
    println!("{}", result.summary());
    Ok(())
}
