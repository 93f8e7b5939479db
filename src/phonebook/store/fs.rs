use super::DataStore;
use crate::error::{DirectoryError, Result};
use crate::model::Record;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "data.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `file_name` inside `dir`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(DirectoryError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DirectoryError::StoreNotFound(self.path.clone()));
            }
            Err(e) => return Err(DirectoryError::Io(e)),
        };

        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|source| DirectoryError::StoreMalformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = records.len(), "loaded store");
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        // to_string_pretty indents by two spaces and leaves non-ASCII unescaped.
        let content = serde_json::to_string_pretty(records).map_err(DirectoryError::Serialization)?;
        fs::write(&self.path, content).map_err(DirectoryError::Io)?;

        debug!(path = %self.path.display(), count = records.len(), "saved store");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, RecordFields};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::in_dir(dir.path(), DEFAULT_DATA_FILE)
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new(
                1,
                RecordFields::default()
                    .with(Field::Surname, "Иванов")
                    .with(Field::FirstName, "Иван")
                    .with(Field::Patronym, "Иванович")
                    .with(Field::Organization, "ООО Ромашка")
                    .with(Field::WorkPhone, "+7 495 000-00-01")
                    .with(Field::MobilePhone, "+7 900 000-00-01"),
            ),
            Record::new(3, RecordFields::default().with(Field::Surname, "Петров")),
        ]
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, DirectoryError::StoreNotFound(_)));
    }

    #[test]
    fn invalid_json_is_reported_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_DATA_FILE), "[{\"id\": 1,").unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, DirectoryError::StoreMalformed { .. }));
    }

    #[test]
    fn wrong_shape_is_reported_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_DATA_FILE), "{\"id\": 1}").unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, DirectoryError::StoreMalformed { .. }));
    }

    #[test]
    fn empty_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_DATA_FILE), "").unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, DirectoryError::StoreMalformed { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_keeps_cyrillic_literal_and_indents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&sample()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"Фамилия\": \"Иванов\""));
        assert!(!raw.contains("\\u"));
        assert!(raw.contains("\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save(&sample()).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("data.json"));
        assert!(!store.exists());
        store.save(&sample()).unwrap();
        assert!(store.exists());
    }
}
