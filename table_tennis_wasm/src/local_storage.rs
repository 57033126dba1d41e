use table_tennis_score::error::StoreError;
use table_tennis_score::kv_store::KeyValueStore;


// Browser `localStorage`. May be missing (e.g. storage disabled by the user), in which case reads
// and writes fail with `StoreError::Unavailable`.
pub struct LocalStorage(Option<web_sys::Storage>);

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is not available, settings will not persist");
        }
        LocalStorage(storage)
    }

    pub fn is_available(&self) -> bool { self.0.is_some() }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.0
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_owned()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StoreError::ReadFailed(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::WriteFailed(format!("{err:?}")))
    }
}
