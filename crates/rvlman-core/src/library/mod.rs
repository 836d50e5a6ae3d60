//! Library scanning and cataloging.
//!
//! A scan walks the configured [`GameFolder`] roots, classifies every
//! matching disc image and reads its header into a [`DiscImageRecord`].
//! Grouping then folds multi-disc GameCube records into logical [`Title`]s.

mod classify;
mod folder;
mod group;
mod scanner;

pub use classify::classify;
pub use folder::{GameFolder, normalize_path};
pub use group::{Title, TitleDisc, default_excluded_ids, group};
pub use scanner::{
    DiscImageRecord, RECOGNIZED_EXTENSIONS, ScanOutcome, SkippedFile, scan, scan_with_extensions,
};
