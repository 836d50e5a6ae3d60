//! Console output formatting for the catalog.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::console::ConsoleType;
use crate::library::{ScanOutcome, Title};

/// Format titles as an aligned, colored table.
pub fn format_title_table(titles: &[Title]) -> String {
    format_table(titles, true)
}

/// Same table without ANSI colors, for logs and piped output.
pub fn format_title_table_plain(titles: &[Title]) -> String {
    format_table(titles, false)
}

fn format_table(titles: &[Title], colored: bool) -> String {
    let mut output = String::new();

    if titles.is_empty() {
        let _ = write!(output, "No games found.");
        return output;
    }

    let name_width = titles
        .iter()
        .map(|t| t.display_name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let header = format!(
        "{:<6}  {:<8}  {:>5}  {:<name_width$}",
        "ID", "Console", "Discs", "Name"
    );
    if colored {
        let _ = writeln!(output, "{}", header.bold());
    } else {
        let _ = writeln!(output, "{}", header);
    }

    for (i, title) in titles.iter().enumerate() {
        let console = if colored {
            format_colored_console(title.console_type)
        } else {
            title.console_type.short_name().to_string()
        };
        let _ = write!(
            output,
            "{:<6}  {}{}  {:>5}  {:<name_width$}",
            title.title_id,
            console,
            // Pad manually: ANSI codes break format-width alignment.
            " ".repeat(8usize.saturating_sub(title.console_type.short_name().len())),
            title.discs.len(),
            title.display_name,
        );
        if i + 1 < titles.len() {
            let _ = writeln!(output);
        }
    }

    output
}

fn format_colored_console(console: ConsoleType) -> String {
    let name = console.short_name();
    match console {
        ConsoleType::Wii => name.cyan().to_string(),
        ConsoleType::Gamecube => name.purple().to_string(),
        ConsoleType::Unknown => name.dimmed().to_string(),
    }
}

/// One-line scan summary, with skip diagnostics when any file was stepped
/// over.
pub fn format_scan_summary(outcome: &ScanOutcome) -> String {
    if outcome.skipped.is_empty() {
        format!("{} disc image(s) found", outcome.records.len())
    } else {
        let mut output = format!(
            "{} disc image(s) found, {} skipped:",
            outcome.records.len(),
            outcome.skipped.len()
        );
        for skip in &outcome.skipped {
            let _ = write!(output, "\n  {} ({})", skip.path.display(), skip.reason);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{SkippedFile, TitleDisc};
    use std::path::PathBuf;

    fn sample_titles() -> Vec<Title> {
        vec![
            Title {
                title_id: "GAFE01".to_string(),
                console_type: ConsoleType::Gamecube,
                display_name: "Animal Crossing (2 discs)".to_string(),
                discs: vec![
                    TitleDisc {
                        path: PathBuf::from("a.iso"),
                        disc_number: 1,
                    },
                    TitleDisc {
                        path: PathBuf::from("b.iso"),
                        disc_number: 2,
                    },
                ],
            },
            Title {
                title_id: "RSBE01".to_string(),
                console_type: ConsoleType::Wii,
                display_name: "Super Smash Bros Brawl".to_string(),
                discs: vec![TitleDisc {
                    path: PathBuf::from("brawl.wbfs"),
                    disc_number: 1,
                }],
            },
        ]
    }

    #[test]
    fn test_plain_table_contains_all_fields() {
        let table = format_title_table_plain(&sample_titles());

        assert!(table.contains("GAFE01"));
        assert!(table.contains("Gamecube"));
        assert!(table.contains("Animal Crossing (2 discs)"));
        assert!(table.contains("RSBE01"));
        assert!(table.contains("Wii"));
        assert_eq!(table.lines().count(), 3); // header + 2 rows
    }

    #[test]
    fn test_empty_catalog_message() {
        assert_eq!(format_title_table_plain(&[]), "No games found.");
    }

    #[test]
    fn test_scan_summary_lists_skips() {
        let outcome = ScanOutcome {
            records: Vec::new(),
            skipped: vec![SkippedFile {
                path: PathBuf::from("/library/broken.iso"),
                reason: "permission denied".to_string(),
            }],
        };

        let summary = format_scan_summary(&outcome);
        assert!(summary.contains("1 skipped"));
        assert!(summary.contains("broken.iso"));
    }
}
