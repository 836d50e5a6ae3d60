//! Candidate drive enumeration.
//!
//! Windows probes drive letters and keeps removable and fixed media; other
//! platforms list the conventional mount bases. No attempt is made to tell
//! a loader-formatted drive from any other volume: the scan itself decides
//! whether anything of interest is on it.

use std::path::PathBuf;

#[cfg(not(target_os = "windows"))]
use std::fs;

#[cfg(target_os = "windows")]
pub fn available_drives() -> Vec<PathBuf> {
    use windows::Win32::Storage::FileSystem::{DRIVE_FIXED, DRIVE_REMOVABLE, GetDriveTypeW};
    use windows::core::HSTRING;

    let mut drives = Vec::new();
    for letter in b'A'..=b'Z' {
        let root = format!("{}:\\", letter as char);

        // SAFETY: GetDriveTypeW only inspects the NUL-terminated root path
        // string; an unknown or unavailable root simply reports
        // DRIVE_UNKNOWN / DRIVE_NO_ROOT_DIR.
        let drive_type = unsafe { GetDriveTypeW(&HSTRING::from(root.as_str())) };
        if drive_type == DRIVE_REMOVABLE || drive_type == DRIVE_FIXED {
            drives.push(PathBuf::from(root));
        }
    }
    drives
}

#[cfg(not(target_os = "windows"))]
pub fn available_drives() -> Vec<PathBuf> {
    let mut drives = Vec::new();

    // Direct mounts: /media/<name>
    drives.extend(directories_under(&PathBuf::from("/media")));

    // Per-user mounts: /run/media/<user>/<name>
    for user_dir in directories_under(&PathBuf::from("/run/media")) {
        drives.extend(directories_under(&user_dir));
    }

    drives
}

#[cfg(not(target_os = "windows"))]
fn directories_under(base: &PathBuf) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(base) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect()
}
