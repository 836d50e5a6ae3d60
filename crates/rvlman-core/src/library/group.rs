use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::Serialize;

use crate::console::ConsoleType;
use crate::library::scanner::DiscImageRecord;

/// One disc of a logical title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleDisc {
    pub path: PathBuf,
    pub disc_number: u8,
}

/// A presentation-ready catalog entry: one game, one or more discs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub title_id: String,
    pub console_type: ConsoleType,
    pub display_name: String,
    /// Sorted ascending by disc number.
    pub discs: Vec<TitleDisc>,
}

impl Title {
    pub fn is_multi_disc(&self) -> bool {
        self.discs.len() > 1
    }
}

/// Title IDs that must never be merged even when several images share them.
/// Known single-disc releases that reuse one ID across distinct images.
pub fn default_excluded_ids() -> HashSet<String> {
    HashSet::from(["GALE01".to_string()])
}

/// Fold a flat record list into logical titles.
///
/// Records whose ID is in `excluded_ids` become their own singleton title
/// immediately, regardless of console type or siblings. Everything else is
/// bucketed by title ID alone; the bucket's console type is taken from the
/// first record seen for that ID. Output order is encounter order of first
/// occurrence.
pub fn group(records: &[DiscImageRecord], excluded_ids: &HashSet<String>) -> Vec<Title> {
    enum Slot<'a> {
        Singleton(&'a DiscImageRecord),
        Bucket(Vec<&'a DiscImageRecord>),
    }

    let mut slots: Vec<Slot> = Vec::new();
    let mut bucket_index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if excluded_ids.contains(&record.title_id) {
            slots.push(Slot::Singleton(record));
        } else if let Some(&index) = bucket_index.get(record.title_id.as_str()) {
            match &mut slots[index] {
                Slot::Bucket(members) => members.push(record),
                Slot::Singleton(_) => unreachable!("excluded records never enter the index"),
            }
        } else {
            bucket_index.insert(record.title_id.as_str(), slots.len());
            slots.push(Slot::Bucket(vec![record]));
        }
    }

    slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Singleton(record) => singleton_title(record),
            Slot::Bucket(mut members) => {
                // Stable sort: equal disc numbers keep traversal order.
                members.sort_by_key(|r| r.disc_number);
                bucket_title(&members)
            }
        })
        .collect()
}

fn singleton_title(record: &DiscImageRecord) -> Title {
    Title {
        title_id: record.title_id.clone(),
        console_type: record.console_type,
        display_name: record.internal_name.clone(),
        discs: vec![disc_of(record)],
    }
}

fn bucket_title(members: &[&DiscImageRecord]) -> Title {
    let first = members[0];
    let display_name = if first.console_type == ConsoleType::Gamecube && members.len() >= 2 {
        format!("{} ({} discs)", first.internal_name, members.len())
    } else {
        first.internal_name.clone()
    };

    Title {
        title_id: first.title_id.clone(),
        console_type: first.console_type,
        display_name,
        discs: members.iter().map(|r| disc_of(r)).collect(),
    }
}

fn disc_of(record: &DiscImageRecord) -> TitleDisc {
    TitleDisc {
        path: record.path.clone(),
        disc_number: record.disc_number,
    }
}
