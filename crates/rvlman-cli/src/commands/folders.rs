//! Folder configuration maintenance.

use std::path::Path;

use anyhow::Result;
use rvlman_core::{Config, ConsoleType};

pub fn add(mut config: Config, config_path: &Path, folder: &Path, console: ConsoleType) -> Result<()> {
    if config.add_folder(folder, console) {
        config.save(config_path)?;
        println!("Added {} ({})", folder.display(), console);
    } else {
        println!("{} is already configured", folder.display());
    }
    Ok(())
}

pub fn remove(mut config: Config, config_path: &Path, folder: &Path) -> Result<()> {
    if config.remove_folder(folder) {
        config.save(config_path)?;
        println!("Removed {}", folder.display());
    } else {
        println!("{} is not configured", folder.display());
    }
    Ok(())
}

pub fn list(config: &Config) -> Result<()> {
    if config.folders().is_empty() {
        println!("No folders configured.");
        return Ok(());
    }

    for folder in config.folders() {
        println!("{:<10} {}", folder.console_type, folder.path.display());
    }
    Ok(())
}
