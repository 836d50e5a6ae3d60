//! Transfers to a loader-formatted drive.
//!
//! Destination layout follows the USB loader conventions:
//! - Wii images go into a fixed `wbfs/` directory, named `<TITLE_ID>.<ext>`;
//! - GameCube titles go into `games/<TITLE_ID>/`, the first disc as
//!   `game.iso` and further discs as `disc<N>.iso`;
//! - cover art, when cached locally, is mirrored into `covers/`.
//!
//! Copy and delete are per-item operations that report a human-readable
//! outcome instead of failing the batch: one broken image must not stop the
//! rest of a selection. Progress is reported per completed file over an
//! optional channel sender, so an interactive caller can forward events to
//! its own update loop.

mod drives;

pub use drives::available_drives;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::console::ConsoleType;
use crate::error::{Error, Result};
use crate::library::Title;

pub const WBFS_DIR: &str = "wbfs";
pub const GAMES_DIR: &str = "games";
pub const COVERS_DIR: &str = "covers";

/// Emitted after each completed file of a title transfer.
#[derive(Debug, Clone)]
pub struct TransferEvent {
    pub title_id: String,
    pub file: PathBuf,
    /// Files finished so far for this title.
    pub completed: usize,
    /// Total files this title will copy.
    pub total: usize,
}

/// Per-item result of a copy or delete.
#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcome {
    pub title_id: String,
    pub display_name: String,
    pub success: bool,
    pub detail: String,
    pub finished_at: DateTime<Local>,
}

impl TransferOutcome {
    fn new(title: &Title, success: bool, detail: impl Into<String>) -> Self {
        Self {
            title_id: title.title_id.clone(),
            display_name: title.display_name.clone(),
            success,
            detail: detail.into(),
            finished_at: Local::now(),
        }
    }

    /// `"<name>: <detail>"`, the one-line form shown to the user.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.display_name, self.detail)
    }
}

/// Destination directory for a title on `drive`, or `None` for the
/// non-transferable `Unknown` classification.
pub fn destination_dir(drive: &Path, title: &Title) -> Option<PathBuf> {
    match title.console_type {
        ConsoleType::Wii => Some(drive.join(WBFS_DIR)),
        ConsoleType::Gamecube => Some(drive.join(GAMES_DIR).join(&title.title_id)),
        ConsoleType::Unknown => None,
    }
}

/// GameCube disc file name by position in the sorted disc list.
fn gamecube_disc_name(index: usize) -> String {
    if index == 0 {
        "game.iso".to_string()
    } else {
        format!("disc{}.iso", index + 1)
    }
}

fn wii_image_name(title_id: &str, source: &Path) -> String {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("wbfs");
    format!("{}.{}", title_id, ext.to_lowercase())
}

/// Copy a batch of titles, never stopping at a failed item.
///
/// The only hard error is a missing drive; everything per-item lands in the
/// returned outcome list.
pub fn copy_titles(
    drive: &Path,
    titles: &[Title],
    cover_dir: Option<&Path>,
    progress: Option<&Sender<TransferEvent>>,
) -> Result<Vec<TransferOutcome>> {
    if !drive.is_dir() {
        return Err(Error::DriveNotFound(drive.display().to_string()));
    }

    Ok(titles
        .iter()
        .map(|title| copy_title(drive, title, cover_dir, progress))
        .collect())
}

/// Copy one title into the drive's layout.
pub fn copy_title(
    drive: &Path,
    title: &Title,
    cover_dir: Option<&Path>,
    progress: Option<&Sender<TransferEvent>>,
) -> TransferOutcome {
    if !is_safe_title_id(&title.title_id) {
        return TransferOutcome::new(title, false, "Invalid title ID");
    }

    let Some(dest_dir) = destination_dir(drive, title) else {
        return TransferOutcome::new(title, false, "Unknown console type");
    };

    match try_copy_discs(title, &dest_dir, progress) {
        Ok(copied) => {
            copy_cover_if_cached(drive, &title.title_id, cover_dir);
            info!(
                "Copied {} ({} file{}) to {}",
                title.display_name,
                copied,
                if copied == 1 { "" } else { "s" },
                dest_dir.display()
            );
            TransferOutcome::new(title, true, "Copied successfully")
        }
        Err(err) => TransferOutcome::new(title, false, format!("Copy error ({})", err)),
    }
}

fn try_copy_discs(
    title: &Title,
    dest_dir: &Path,
    progress: Option<&Sender<TransferEvent>>,
) -> Result<usize> {
    fs::create_dir_all(dest_dir)?;

    let total = title.discs.len();
    for (index, disc) in title.discs.iter().enumerate() {
        let dest = match title.console_type {
            ConsoleType::Gamecube => dest_dir.join(gamecube_disc_name(index)),
            _ => dest_dir.join(wii_image_name(&title.title_id, &disc.path)),
        };
        fs::copy(&disc.path, &dest)?;

        if let Some(sender) = progress {
            // A dropped receiver just means nobody is watching anymore.
            let _ = sender.send(TransferEvent {
                title_id: title.title_id.clone(),
                file: dest,
                completed: index + 1,
                total,
            });
        }
    }
    Ok(total)
}

/// Cover transfer is best-effort: a missing or uncopyable cover never fails
/// the title.
fn copy_cover_if_cached(drive: &Path, title_id: &str, cover_dir: Option<&Path>) {
    let Some(cover_dir) = cover_dir else {
        return;
    };

    let source = cover_dir.join(format!("{}.png", title_id));
    if !source.is_file() {
        debug!("No cached cover for {}", title_id);
        return;
    }

    let dest_dir = drive.join(COVERS_DIR);
    let result = fs::create_dir_all(&dest_dir)
        .and_then(|_| fs::copy(&source, dest_dir.join(format!("{}.png", title_id))));
    if let Err(err) = result {
        warn!("Could not copy cover for {}: {}", title_id, err);
    }
}

/// Remove a title from the drive. Cover art is left in place.
pub fn delete_title(drive: &Path, title: &Title) -> TransferOutcome {
    if !is_safe_title_id(&title.title_id) {
        return TransferOutcome::new(title, false, "Invalid title ID");
    }

    match title.console_type {
        ConsoleType::Wii => delete_wii_images(drive, title),
        ConsoleType::Gamecube => delete_gamecube_dir(drive, title),
        ConsoleType::Unknown => TransferOutcome::new(title, false, "Unknown console type"),
    }
}

fn delete_wii_images(drive: &Path, title: &Title) -> TransferOutcome {
    let wbfs_dir = drive.join(WBFS_DIR);
    let entries = match fs::read_dir(&wbfs_dir) {
        Ok(entries) => entries,
        Err(_) => return TransferOutcome::new(title, false, "Not found on USB"),
    };

    let mut removed = 0usize;
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        let is_this_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem == title.title_id);
        if is_this_title && path.is_file() {
            if let Err(err) = fs::remove_file(&path) {
                return TransferOutcome::new(title, false, format!("Delete error ({})", err));
            }
            removed += 1;
        }
    }

    if removed == 0 {
        TransferOutcome::new(title, false, "Not found on USB")
    } else {
        TransferOutcome::new(title, true, "Deleted successfully")
    }
}

fn delete_gamecube_dir(drive: &Path, title: &Title) -> TransferOutcome {
    let dir = drive.join(GAMES_DIR).join(&title.title_id);
    if !dir.exists() {
        return TransferOutcome::new(title, false, "Not found on USB");
    }

    match fs::remove_dir_all(&dir) {
        Ok(()) => TransferOutcome::new(title, true, "Deleted successfully"),
        Err(err) => TransferOutcome::new(title, false, format!("Delete error ({})", err)),
    }
}

/// Title IDs become path components on the drive; refuse anything that is
/// not plain ASCII alphanumerics.
fn is_safe_title_id(title_id: &str) -> bool {
    !title_id.is_empty() && title_id.chars().all(|c| c.is_ascii_alphanumeric())
}
