use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::table_tennis_prelude::*;


pub const DEFAULT_STORAGE_PATH: &str = "table_tennis_settings.json";

// Optional yaml file for the `play` subcommand. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub storage_path: PathBuf,
    pub game_type: GameType,
    // Names for the player slots in order. Extra names beyond the game type are ignored.
    pub players: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            game_type: GameType::Single,
            players: vec![],
        }
    }
}

impl ConsoleConfig {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'.", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file '{}'.", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> { Ok(serde_yaml::from_str(contents)?) }
}
