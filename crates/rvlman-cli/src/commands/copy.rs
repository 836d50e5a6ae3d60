//! Copy command: transfer titles from the library to a drive.
//!
//! The copy itself runs on this thread; a small consumer thread drains the
//! progress channel and prints one line per completed file, the same
//! producer/consumer split an interactive frontend would use to keep its
//! update loop responsive.

use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use rvlman_core::{Config, Title, TransferEvent, copy_titles, group, scan};
use tracing::warn;

pub fn run(
    config: &Config,
    covers_dir: &Path,
    drive: &Path,
    ids: &[String],
    no_covers: bool,
) -> Result<()> {
    let outcome = scan(config.folders());
    let titles = group(&outcome.records, &config.exclusion_set());

    let selected = select(titles, ids);
    if selected.is_empty() {
        println!("Nothing to copy.");
        return Ok(());
    }

    println!("Copying {} title(s) to {}...", selected.len(), drive.display());

    let (tx, rx) = mpsc::channel::<TransferEvent>();
    let printer = thread::spawn(move || {
        for event in rx {
            println!(
                "  [{}/{}] {}",
                event.completed,
                event.total,
                event.file.display()
            );
        }
    });

    let cover_dir = (!no_covers).then_some(covers_dir);
    let outcomes = copy_titles(drive, &selected, cover_dir, Some(&tx))?;
    drop(tx);
    let _ = printer.join();

    println!();
    println!("=== Copy Results ===");
    for outcome in &outcomes {
        println!("{}", outcome.summary());
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        println!("{} of {} item(s) failed", failed, outcomes.len());
    }
    Ok(())
}

/// Pick the titles to copy. With no explicit IDs, everything transferable
/// goes; with IDs, unknown ones are warned about and the rest keep catalog
/// order.
fn select(titles: Vec<Title>, ids: &[String]) -> Vec<Title> {
    if ids.is_empty() {
        return titles
            .into_iter()
            .filter(|t| t.console_type.is_transferable())
            .collect();
    }

    for id in ids {
        if !titles.iter().any(|t| &t.title_id == id) {
            warn!("No title with ID {} in the library", id);
        }
    }

    titles
        .into_iter()
        .filter(|t| ids.contains(&t.title_id))
        .collect()
}
