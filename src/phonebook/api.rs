//! # API Facade
//!
//! [`DirectoryApi`] is the session object: it owns the Record Set for the lifetime of
//! one session and is the single entry point every UI goes through.
//!
//! ## Session Lifecycle
//!
//! ```text
//! open()  ── load the store once (missing/malformed → empty set + warning)
//!   │
//!   ├── list / render_page / search          read the in-memory set
//!   ├── add_record / update_record / delete_record   mutate it in place
//!   │
//! close() ── write the full set back once
//! ```
//!
//! Mutations are never written through to the store individually. Nothing here prints
//! or exits; every call returns a `Result<CmdResult>` for the UI to present.
//!
//! ## Generic Over DataStore
//!
//! - Production: `DirectoryApi<FileStore>`
//! - Testing: `DirectoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Record, RecordFields, Scope, SearchCriteria};
use crate::page::{PageView, Pages};
use crate::store::DataStore;
use tracing::debug;

pub struct DirectoryApi<S: DataStore> {
    store: S,
    paths: commands::DirectoryPaths,
    records: Vec<Record>,
    page_size: usize,
    dirty: bool,
}

impl<S: DataStore> DirectoryApi<S> {
    /// Loads the store and starts a session. Load warnings are in the returned result.
    pub fn open(
        store: S,
        paths: commands::DirectoryPaths,
        page_size: usize,
    ) -> Result<(Self, commands::CmdResult)> {
        let (records, result) = commands::persist::load(&store)?;
        debug!(count = records.len(), location = %store.location(), "session opened");
        let api = Self {
            store,
            paths,
            records,
            page_size,
            dirty: false,
        };
        Ok((api, result))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// True once any mutation happened since `open`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pages(&self) -> Pages {
        commands::list::paginate(&self.records, self.page_size)
    }

    pub fn page_count(&self) -> usize {
        commands::list::page_count(self.records.len(), self.page_size)
    }

    pub fn render_page(&self, page_number: usize) -> Result<PageView> {
        commands::list::render_page(page_number, &self.pages())
    }

    pub fn list(&self, page: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::run(&self.records, self.page_size, page)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Result<commands::CmdResult> {
        commands::search::run(&self.records, criteria)
    }

    pub fn record_at(&self, position: usize) -> Result<&Record> {
        commands::helpers::record_at(&self.records, position)
    }

    pub fn add_record(&mut self, fields: RecordFields) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.records, fields)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn update_record(
        &mut self,
        position: usize,
        fields: RecordFields,
    ) -> Result<commands::CmdResult> {
        let result = commands::edit::update(&mut self.records, position, fields)?;
        self.dirty = true;
        Ok(result)
    }

    pub fn delete_record(&mut self, position: usize) -> Result<commands::CmdResult> {
        let result = commands::edit::delete(&mut self.records, position)?;
        self.dirty = true;
        Ok(result)
    }

    /// Writes the Record Set back to the store.
    pub fn close(&mut self) -> Result<commands::CmdResult> {
        let result = commands::persist::save(&mut self.store, &self.records)?;
        self.dirty = false;
        debug!(count = self.records.len(), "session closed");
        Ok(result)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DirectoryPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::DirectoryError;
    use crate::model::Field;
    use crate::store::memory::fixtures::{person, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn paths() -> DirectoryPaths {
        DirectoryPaths {
            project: Some(PathBuf::from(".")),
            global: PathBuf::from("global"),
        }
    }

    fn open(store: InMemoryStore) -> (DirectoryApi<InMemoryStore>, CmdResult) {
        DirectoryApi::open(store, paths(), 4).unwrap()
    }

    #[test]
    fn open_missing_store_starts_empty_and_warns() {
        let (api, result) = open(InMemoryStore::new());
        assert!(api.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn add_on_empty_store_gets_id_one() {
        let (mut api, _) = open(InMemoryStore::new());
        api.add_record(person("Иванов", "Иван")).unwrap();
        assert_eq!(api.records()[0].id, 1);
    }

    #[test]
    fn mutations_are_not_written_until_close() {
        let (mut api, _) = open(StoreFixture::new().with_records(2).store);
        api.add_record(person("A", "B")).unwrap();
        api.delete_record(1).unwrap();
        api.update_record(1, person("C", "D")).unwrap();

        assert!(api.is_dirty());
        assert_eq!(api.store().save_count(), 0);
        assert_eq!(api.store().records().map(|r| r.len()), Some(2));

        api.close().unwrap();
        assert!(!api.is_dirty());
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().records(), Some(api.records()));
    }

    #[test]
    fn failed_mutation_keeps_session_clean() {
        let (mut api, _) = open(StoreFixture::new().with_records(2).store);
        let err = api.delete_record(3).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidPosition { .. }));
        assert!(!api.is_dirty());
        assert_eq!(api.len(), 2);
    }

    #[test]
    fn reads_keep_session_clean() {
        let (api, _) = open(StoreFixture::new().with_records(5).store);
        api.list(None).unwrap();
        api.list(Some(2)).unwrap();
        api.search(&SearchCriteria::new().with(Field::Surname, "Surname 1"))
            .unwrap();
        api.record_at(1).unwrap();
        assert!(!api.is_dirty());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn render_page_uses_session_page_size() {
        let (api, _) = open(StoreFixture::new().with_records(5).store);
        assert_eq!(api.page_count(), 2);
        match api.render_page(2).unwrap() {
            PageView::Page { entries, .. } => assert_eq!(entries.len(), 1),
            PageView::Stop => panic!("expected page 2"),
        }
        assert!(api.render_page(3).is_err());
    }

    #[test]
    fn search_runs_against_session_state() {
        let (mut api, _) = open(
            StoreFixture::new()
                .with_person("Иванов", "Иван")
                .with_person("Петров", "Пётр")
                .store,
        );
        api.add_record(person("Иванов", "Сергей")).unwrap();

        let criteria = SearchCriteria::new().with(Field::Surname, "Иванов");
        let result = api.search(&criteria).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[1].record.id, 3);
    }
}
