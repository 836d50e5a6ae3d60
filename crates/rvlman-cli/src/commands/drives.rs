//! Drive enumeration command.

use anyhow::Result;
use rvlman_core::available_drives;

pub fn run() -> Result<()> {
    let drives = available_drives();
    if drives.is_empty() {
        println!("No drives found.");
        return Ok(());
    }

    for drive in drives {
        println!("{}", drive.display());
    }
    Ok(())
}
