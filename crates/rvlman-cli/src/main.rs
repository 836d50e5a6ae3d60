use anyhow::Result;
use clap::{Parser, Subcommand};
use rvlman_core::{Config, ConsoleType};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rvlman")]
#[command(about = "Wii/GameCube disc image library manager", version)]
struct Cli {
    /// Path to the folder configuration file
    #[arg(short, long, default_value = "game_paths.json")]
    config: PathBuf,

    /// Cover art cache directory
    #[arg(long, default_value = "assets/covers")]
    covers_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the configured folders and print the catalog
    List {
        /// Print grouped titles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the configured game folders
    Folders {
        #[command(subcommand)]
        action: FoldersAction,
    },
    /// List candidate drives
    Drives,
    /// List the games already on a drive
    Usb {
        drive: PathBuf,
        /// Print grouped titles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy titles from the library to a drive
    Copy {
        drive: PathBuf,
        /// Title IDs to copy; default is every transferable title
        #[arg(long = "id")]
        ids: Vec<String>,
        /// Do not mirror cached cover art onto the drive
        #[arg(long)]
        no_covers: bool,
    },
    /// Delete a title from a drive
    Remove {
        drive: PathBuf,
        /// Title ID to delete
        #[arg(long)]
        id: String,
    },
    /// Fetch and cache cover art for a title
    Cover {
        /// Title ID to fetch
        id: String,
    },
}

#[derive(Subcommand)]
enum FoldersAction {
    /// Register a folder to scan
    Add {
        path: PathBuf,
        /// Declared console type for images in this folder
        #[arg(long, default_value = "Unknown")]
        console: ConsoleType,
    },
    /// Unregister a folder
    Remove { path: PathBuf },
    /// Show the configured folders
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("rvlman=info".parse()?)
                .add_directive("rvlman_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to load config: {}, starting empty", e);
            Config::default()
        }
    };

    match cli.command {
        Command::List { json } => commands::list::run(&config, json),
        Command::Folders { action } => match action {
            FoldersAction::Add { path, console } => {
                commands::folders::add(config, &cli.config, &path, console)
            }
            FoldersAction::Remove { path } => {
                commands::folders::remove(config, &cli.config, &path)
            }
            FoldersAction::List => commands::folders::list(&config),
        },
        Command::Drives => commands::drives::run(),
        Command::Usb { drive, json } => commands::usb::run(&config, &drive, json),
        Command::Copy {
            drive,
            ids,
            no_covers,
        } => commands::copy::run(&config, &cli.covers_dir, &drive, &ids, no_covers),
        Command::Remove { drive, id } => commands::remove::run(&config, &drive, &id),
        Command::Cover { id } => commands::cover::run(&cli.covers_dir, &id),
    }
}
