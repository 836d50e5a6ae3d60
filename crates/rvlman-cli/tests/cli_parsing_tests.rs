//! CLI argument parsing tests.
//!
//! These verify argument shapes without executing commands (which would
//! touch the filesystem or the network).

use std::path::PathBuf;

use clap::Parser;
use rvlman_core::ConsoleType;

// Re-create the CLI structure for testing since the binary does not export it.
#[derive(Parser)]
#[command(name = "rvlman")]
struct Cli {
    #[arg(short, long, default_value = "game_paths.json")]
    config: PathBuf,

    #[arg(long, default_value = "assets/covers")]
    covers_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    List {
        #[arg(long)]
        json: bool,
    },
    Folders {
        #[command(subcommand)]
        action: FoldersAction,
    },
    Drives,
    Usb {
        drive: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Copy {
        drive: PathBuf,
        #[arg(long = "id")]
        ids: Vec<String>,
        #[arg(long)]
        no_covers: bool,
    },
    Remove {
        drive: PathBuf,
        #[arg(long)]
        id: String,
    },
    Cover {
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum FoldersAction {
    Add {
        path: PathBuf,
        #[arg(long, default_value = "Unknown")]
        console: ConsoleType,
    },
    Remove {
        path: PathBuf,
    },
    List,
}

#[test]
fn test_parse_list_defaults() {
    let cli = Cli::try_parse_from(["rvlman", "list"]).unwrap();
    assert_eq!(cli.config, PathBuf::from("game_paths.json"));
    assert_eq!(cli.covers_dir, PathBuf::from("assets/covers"));
    match cli.command {
        Command::List { json } => assert!(!json),
        _ => panic!("expected list command"),
    }
}

#[test]
fn test_parse_list_json_flag() {
    let cli = Cli::try_parse_from(["rvlman", "list", "--json"]).unwrap();
    match cli.command {
        Command::List { json } => assert!(json),
        _ => panic!("expected list command"),
    }
}

#[test]
fn test_parse_folders_add_with_console() {
    let cli = Cli::try_parse_from([
        "rvlman",
        "folders",
        "add",
        "/library/gc",
        "--console",
        "gamecube",
    ])
    .unwrap();

    match cli.command {
        Command::Folders {
            action: FoldersAction::Add { path, console },
        } => {
            assert_eq!(path, PathBuf::from("/library/gc"));
            assert_eq!(console, ConsoleType::Gamecube);
        }
        _ => panic!("expected folders add command"),
    }
}

#[test]
fn test_parse_folders_add_defaults_to_unknown() {
    let cli = Cli::try_parse_from(["rvlman", "folders", "add", "/stuff"]).unwrap();
    match cli.command {
        Command::Folders {
            action: FoldersAction::Add { console, .. },
        } => assert_eq!(console, ConsoleType::Unknown),
        _ => panic!("expected folders add command"),
    }
}

#[test]
fn test_parse_copy_with_repeated_ids() {
    let cli = Cli::try_parse_from([
        "rvlman", "copy", "/mnt/usb", "--id", "GAFE01", "--id", "RSBE01",
    ])
    .unwrap();

    match cli.command {
        Command::Copy {
            drive,
            ids,
            no_covers,
        } => {
            assert_eq!(drive, PathBuf::from("/mnt/usb"));
            assert_eq!(ids, vec!["GAFE01".to_string(), "RSBE01".to_string()]);
            assert!(!no_covers);
        }
        _ => panic!("expected copy command"),
    }
}

#[test]
fn test_parse_remove_requires_id() {
    assert!(Cli::try_parse_from(["rvlman", "remove", "/mnt/usb"]).is_err());

    let cli = Cli::try_parse_from(["rvlman", "remove", "/mnt/usb", "--id", "GAFE01"]).unwrap();
    match cli.command {
        Command::Remove { id, .. } => assert_eq!(id, "GAFE01"),
        _ => panic!("expected remove command"),
    }
}

#[test]
fn test_parse_custom_config_path() {
    let cli = Cli::try_parse_from(["rvlman", "--config", "/tmp/paths.json", "drives"]).unwrap();
    assert_eq!(cli.config, PathBuf::from("/tmp/paths.json"));
    assert!(matches!(cli.command, Command::Drives));
}
