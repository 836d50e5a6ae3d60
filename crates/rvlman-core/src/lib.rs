pub mod config;
pub mod console;
pub mod covers;
pub mod disc;
pub mod error;
pub mod export;
pub mod library;
pub mod transfer;

pub use config::Config;
pub use console::{ConsoleType, Region};
pub use covers::CoverClient;
pub use disc::DiscHeader;
pub use error::{Error, Result};
pub use library::{
    DiscImageRecord, GameFolder, ScanOutcome, SkippedFile, Title, TitleDisc, classify,
    default_excluded_ids, group, scan,
};
pub use transfer::{
    TransferEvent, TransferOutcome, available_drives, copy_title, copy_titles, delete_title,
};
