use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use table_tennis_score::error::StoreError;
use table_tennis_score::kv_store::KeyValueStore;


// Key-value store kept in a JSON file: one object mapping keys to string values. The whole file
// is rewritten on every `set`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    // `None` if the file does not exist yet.
    fn read_contents(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::ReadFailed(self.describe(&err))),
        }
    }

    fn parse_entries(&self, contents: &str) -> Result<BTreeMap<String, String>, StoreError> {
        serde_json::from_str(contents).map_err(|err| StoreError::ReadFailed(self.describe(&err)))
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_contents()? {
            Some(contents) => self.parse_entries(&contents),
            None => Ok(BTreeMap::new()),
        }
    }

    fn describe(&self, err: &dyn std::error::Error) -> String {
        format!("{}: {}", self.path.display(), err)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A file that cannot be parsed is replaced. I/O errors are reported as is.
        let mut entries = match self.read_contents()? {
            Some(contents) => self.parse_entries(&contents).unwrap_or_else(|err| {
                log::warn!("Overwriting malformed storage file. {err}");
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        entries.insert(key.to_owned(), value.to_owned());
        let contents = serde_json::to_string_pretty(&entries)
            .map_err(|err| StoreError::WriteFailed(self.describe(&err)))?;
        std::fs::write(&self.path, contents)
            .map_err(|err| StoreError::WriteFailed(self.describe(&err)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(test_name: &str) -> JsonFileStore {
        let path = std::env::temp_dir()
            .join(format!("table_tennis_{}_{}.json", test_name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    #[test]
    fn missing_file_is_empty() {
        let store = temp_store("missing_file_is_empty");
        assert_eq!(store.get("tableTennisSettings").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let mut store = temp_store("set_then_get");
        store.set("a", "1").unwrap();
        store.set("b", "{\"x\":2}").unwrap();
        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("{\"x\":2}"));
        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("{\"x\":2}"));
        std::fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn garbage_file_fails_reads_and_is_replaced_on_write() {
        let mut store = temp_store("garbage_file");
        std::fs::write(store.path(), "garbage").unwrap();
        assert!(matches!(store.get("a"), Err(StoreError::ReadFailed(_))));
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        std::fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn io_error_is_not_overwritten() {
        let mut store = temp_store("io_error");
        let _ = std::fs::remove_dir(store.path());
        std::fs::create_dir(store.path()).unwrap();
        assert!(matches!(store.get("a"), Err(StoreError::ReadFailed(_))));
        assert!(matches!(store.set("a", "1"), Err(StoreError::ReadFailed(_))));
        assert!(store.path().is_dir());
        std::fs::remove_dir(store.path()).unwrap();
    }
}
