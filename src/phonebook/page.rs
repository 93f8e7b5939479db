//! # Display Positions and Pages
//!
//! Records are addressed by their **position**: the 1-based ordinal of a record in the
//! current Record Set. Positions are what the user types when editing or deleting.
//!
//! Positions are not ids. An id is assigned once (`max + 1`) and stays with its record,
//! while positions are recomputed from the current order. After a delete the two diverge:
//!
//! ```text
//! before delete(2):  pos 1 → id 1   pos 2 → id 2   pos 3 → id 3
//! after:             pos 1 → id 1   pos 2 → id 3
//! ```
//!
//! Listings therefore always show positions, never ids.
//!
//! ## Pages
//!
//! A [`Pages`] value groups the Record Set into fixed-size chunks keyed by a 1-based
//! page number. It is derived data: built fresh on every listing, never cached or
//! persisted. Inside a page each entry carries its position *within the page*
//! (1..=page_size), which is what the page view prints.

use crate::model::{Record, RecordFields};
use std::collections::BTreeMap;

/// The Record Set grouped into pages. Page numbers start at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pages {
    pages: BTreeMap<usize, Vec<Record>>,
}

impl Pages {
    pub(crate) fn from_map(pages: BTreeMap<usize, Vec<Record>>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, page: usize) -> Option<&[Record]> {
        self.pages.get(&page).map(Vec::as_slice)
    }

    /// Pages in page-number order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Record])> {
        self.pages.iter().map(|(n, records)| (*n, records.as_slice()))
    }

    /// All records, page after page.
    pub fn flatten(&self) -> Vec<Record> {
        self.pages.values().flatten().cloned().collect()
    }
}

/// One line of a rendered page: where the record sits and its text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub page: usize,
    /// 1-based position within the page.
    pub position: usize,
    pub fields: RecordFields,
}

/// Result of asking for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// Page number 0: the user is done paging.
    Stop,
    Page {
        number: usize,
        page_count: usize,
        entries: Vec<PageEntry>,
    },
}

/// A record together with its position in the whole Record Set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub position: usize,
    pub record: Record,
}

/// Pairs every record with its 1-based position.
pub fn positioned(records: &[Record]) -> Vec<ListedRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| ListedRecord {
            position: i + 1,
            record: record.clone(),
        })
        .collect()
}
