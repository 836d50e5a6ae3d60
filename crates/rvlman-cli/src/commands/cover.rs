//! Cover command: fetch and cache cover art for a title ID.

use std::path::Path;

use anyhow::Result;
use rvlman_core::CoverClient;

pub fn run(covers_dir: &Path, id: &str) -> Result<()> {
    let client = CoverClient::new(covers_dir);

    match client.fetch(id)? {
        Some(path) => println!("{}", path.display()),
        None => println!("No cover found for {}", id),
    }
    Ok(())
}
