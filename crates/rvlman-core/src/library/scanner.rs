use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::console::ConsoleType;
use crate::disc::DiscHeader;
use crate::library::classify::classify;
use crate::library::folder::{GameFolder, normalize_path};

/// Extensions recognized as disc images, compared case-insensitively.
pub const RECOGNIZED_EXTENSIONS: [&str; 2] = ["iso", "wbfs"];

/// One physical disc image file found during a scan. Rebuilt from scratch on
/// every rescan; there is no persisted identity across scans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiscImageRecord {
    pub title_id: String,
    pub internal_name: String,
    pub path: PathBuf,
    pub console_type: ConsoleType,
    /// 1-based; always 1 for anything not classified as Gamecube.
    pub disc_number: u8,
}

/// A file or directory the scan could not read and stepped over.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one scan pass. Records follow filesystem traversal order,
/// which is platform-dependent and not guaranteed stable.
#[derive(Debug, Default, Serialize)]
pub struct ScanOutcome {
    pub records: Vec<DiscImageRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan the given folders for disc images with the default extension set.
pub fn scan(folders: &[GameFolder]) -> ScanOutcome {
    scan_with_extensions(folders, &RECOGNIZED_EXTENSIONS)
}

/// Scan with a custom extension set.
///
/// An unreadable file or directory never aborts the scan: it is recorded in
/// [`ScanOutcome::skipped`] and traversal continues, so one locked or
/// corrupt image cannot block the whole catalog.
pub fn scan_with_extensions(folders: &[GameFolder], extensions: &[&str]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for folder in folders {
        let root = normalize_path(&folder.path);
        debug!(
            "Scanning {} (declared type: {})",
            root.display(),
            folder.console_type
        );

        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.clone());
                    warn!("Skipping unreadable entry {}: {}", path.display(), err);
                    outcome.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() || !matches_extension(entry.path(), extensions) {
                continue;
            }

            let path = normalize_path(entry.path());
            let file_name = entry.file_name().to_string_lossy();
            let containing_dir = path.parent().unwrap_or(&root);
            let console_type = classify(&root, containing_dir, &file_name, folder.console_type);

            match DiscHeader::read_from_path(&path) {
                Ok(header) => {
                    let disc_number = if console_type == ConsoleType::Gamecube {
                        header.disc_number
                    } else {
                        1
                    };
                    outcome.records.push(DiscImageRecord {
                        title_id: header.title_id,
                        internal_name: header.internal_name,
                        path,
                        console_type,
                        disc_number,
                    });
                }
                Err(err) => {
                    warn!("Skipping unreadable image {}: {}", path.display(), err);
                    outcome.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    debug!(
        "Scan finished: {} records, {} skipped",
        outcome.records.len(),
        outcome.skipped.len()
    );
    outcome
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
}
