use super::DataStore;
use crate::error::{DirectoryError, Result};
use crate::model::Record;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Option<Vec<Record>>,
    save_count: usize,
}

impl InMemoryStore {
    /// A store that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Some(records),
            save_count: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn records(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        self.records
            .clone()
            .ok_or_else(|| DirectoryError::StoreNotFound(PathBuf::from(self.location())))
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = Some(records.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.records.is_some()
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Field, RecordFields};

    /// Fields for a person with only the surname and first name filled in.
    pub fn person(surname: &str, first_name: &str) -> RecordFields {
        RecordFields::default()
            .with(Field::Surname, surname)
            .with(Field::FirstName, first_name)
    }

    /// `count` records with ids `1..=count` and surnames `Surname 1`, `Surname 2`, ...
    pub fn numbered_records(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                Record::new(
                    i as u64,
                    person(&format!("Surname {}", i), &format!("Name {}", i))
                        .with(Field::MobilePhone, format!("+7 900 000-00-{:02}", i)),
                )
            })
            .collect()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_records(Vec::new()),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            let mut records = self.store.records.take().unwrap_or_default();
            let start = records.iter().map(|r| r.id).max().unwrap_or(0);
            records.extend(numbered_records(count).into_iter().map(|mut r| {
                r.id += start;
                r
            }));
            self.store.records = Some(records);
            self
        }

        pub fn with_person(mut self, surname: &str, first_name: &str) -> Self {
            let mut records = self.store.records.take().unwrap_or_default();
            let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            records.push(Record::new(id, person(surname, first_name)));
            self.store.records = Some(records);
            self
        }
    }
}
