use std::path::Path;

use crate::console::ConsoleType;

/// Decide the console type of a discovered file.
///
/// Decision order, first match wins:
/// 1. a `.wbfs` file name is always Wii;
/// 2. a declared folder type of Wii or Gamecube is taken at face value;
/// 3. otherwise the containing directory's path is inspected: `wbfs`
///    anywhere in it means Wii, `games` means Gamecube;
/// 4. everything else is Unknown.
///
/// Step 3 only fires for ad-hoc scans (e.g. a removable drive scanned with a
/// declared type of Unknown). The substrings collide with ordinary folder
/// names like `games`; that ambiguity is accepted, the declared type wins
/// whenever one is known. Classification keys off the file's immediate
/// containing directory; the declared scan root is not consulted.
pub fn classify(
    _root_folder: &Path,
    containing_dir: &Path,
    file_name: &str,
    default: ConsoleType,
) -> ConsoleType {
    if has_wbfs_extension(file_name) {
        return ConsoleType::Wii;
    }

    if matches!(default, ConsoleType::Wii | ConsoleType::Gamecube) {
        return default;
    }

    let dir = containing_dir.to_string_lossy().to_lowercase();
    if dir.contains("wbfs") {
        ConsoleType::Wii
    } else if dir.contains("games") {
        ConsoleType::Gamecube
    } else {
        ConsoleType::Unknown
    }
}

fn has_wbfs_extension(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".wbfs")
}
