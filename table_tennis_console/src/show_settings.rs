use std::path::Path;

use table_tennis_score::kv_store::KeyValueStore;

use crate::file_store::JsonFileStore;
use crate::table_tennis_prelude::*;
use crate::tui;


pub fn run(storage_path: &Path) -> anyhow::Result<()> {
    let store = JsonFileStore::new(storage_path);
    let mut holder = SettingsHolder::new();
    if holder.restore(&store)? {
        println!("Saved settings in {}:", storage_path.display());
        println!("{}", tui::render_settings(holder.current()));
        Ok(())
    } else if store.get(SETTINGS_KEY)?.is_some() {
        anyhow::bail!("Saved settings in {} are malformed", storage_path.display())
    } else {
        println!("No saved settings in {}", storage_path.display());
        Ok(())
    }
}
