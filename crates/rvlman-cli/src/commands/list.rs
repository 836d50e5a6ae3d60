//! List command: scan the configured folders and print the catalog.

use anyhow::Result;
use rvlman_core::{Config, export, group, scan};

pub fn run(config: &Config, json: bool) -> Result<()> {
    if config.folders().is_empty() {
        println!("No folders configured. Add one with: rvlman folders add <path> --console <type>");
        return Ok(());
    }

    let outcome = scan(config.folders());
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
