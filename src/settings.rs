use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{SettingError, StoreError};
use crate::kv_store::KeyValueStore;


pub const SETTINGS_KEY: &str = "tableTennisSettings";

// Match rules. Only `points_per_set` and `win_by_points` affect scoring. The rest is recorded
// for the players' benefit: neither match completion nor serve rotation is enforced.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub points_per_set: u32,
    pub win_by_points: u32,
    pub best_of_sets: u32,
    pub serves_per_rotation: u32,
    pub serves_after_deuce: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SettingName {
    PointsPerSet,
    WinByPoints,
    BestOfSets,
    ServesPerRotation,
    ServesAfterDeuce,
}

impl Default for Settings {
    fn default() -> Self { Self::ittf() }
}

impl Settings {
    // Current ITTF rules: sets to 11, two clear points, best of five, serve changes every two
    // points and after every point at deuce.
    pub fn ittf() -> Self {
        Self {
            points_per_set: 11,
            win_by_points: 2,
            best_of_sets: 5,
            serves_per_rotation: 2,
            serves_after_deuce: 1,
        }
    }

    // Pre-2001 rules.
    pub fn classic_21() -> Self {
        Self {
            points_per_set: 21,
            win_by_points: 2,
            best_of_sets: 3,
            serves_per_rotation: 5,
            serves_after_deuce: 1,
        }
    }

    pub fn get(&self, name: SettingName) -> u32 {
        match name {
            SettingName::PointsPerSet => self.points_per_set,
            SettingName::WinByPoints => self.win_by_points,
            SettingName::BestOfSets => self.best_of_sets,
            SettingName::ServesPerRotation => self.serves_per_rotation,
            SettingName::ServesAfterDeuce => self.serves_after_deuce,
        }
    }

    pub fn set(&mut self, name: SettingName, value: u32) {
        let field = match name {
            SettingName::PointsPerSet => &mut self.points_per_set,
            SettingName::WinByPoints => &mut self.win_by_points,
            SettingName::BestOfSets => &mut self.best_of_sets,
            SettingName::ServesPerRotation => &mut self.serves_per_rotation,
            SettingName::ServesAfterDeuce => &mut self.serves_after_deuce,
        };
        *field = value;
    }

    // Every value must pass the same checks as user input.
    pub fn validate(&self) -> Result<(), SettingError> {
        for name in SettingName::iter() {
            check_setting_value(name, self.get(name))?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
    pub fn from_json(s: &str) -> serde_json::Result<Self> { serde_json::from_str(s) }
}

impl SettingName {
    pub fn label(self) -> &'static str {
        match self {
            SettingName::PointsPerSet => "Set to",
            SettingName::WinByPoints => "Win by",
            SettingName::BestOfSets => "Match: best of",
            SettingName::ServesPerRotation => "Serve rotation after",
            SettingName::ServesAfterDeuce => "Serve rotation after deuce",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SettingName::PointsPerSet | SettingName::WinByPoints => "points",
            SettingName::BestOfSets => "sets",
            SettingName::ServesPerRotation => "serves",
            SettingName::ServesAfterDeuce => "points",
        }
    }
}

// Parses a value typed by the user. Non-numeric text and zero are rejected rather than stored.
pub fn parse_setting_input(name: SettingName, input: &str) -> Result<u32, SettingError> {
    let not_a_number = || SettingError::NotANumber { name, input: input.to_owned() };
    let value: i64 = input.trim().parse().map_err(|_| not_a_number())?;
    if value <= 0 {
        return Err(SettingError::NotPositive { name });
    }
    let value = u32::try_from(value).map_err(|_| not_a_number())?;
    check_setting_value(name, value)
}

pub fn check_setting_value(name: SettingName, value: u32) -> Result<u32, SettingError> {
    if value == 0 {
        return Err(SettingError::NotPositive { name });
    }
    if name == SettingName::BestOfSets && value % 2 == 0 {
        return Err(SettingError::EvenSetCount { value });
    }
    Ok(value)
}


// Current settings plus the last snapshot that went to the store.
#[derive(Clone, Debug, Default)]
pub struct SettingsHolder {
    current: Settings,
    saved: Option<Settings>,
}

impl SettingsHolder {
    pub fn new() -> Self { Self::default() }

    pub fn current(&self) -> &Settings { &self.current }
    pub fn saved(&self) -> Option<&Settings> { self.saved.as_ref() }

    pub fn update_setting(&mut self, name: SettingName, value: u32) {
        self.current.set(name, value);
    }

    pub fn update_setting_from_input(
        &mut self, name: SettingName, input: &str,
    ) -> Result<(), SettingError> {
        let value = parse_setting_input(name, input)?;
        self.update_setting(name, value);
        Ok(())
    }

    // The in-memory snapshot is only updated once the store accepted the value.
    pub fn save_settings(&mut self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let serialized =
            self.current.to_json().map_err(|err| StoreError::WriteFailed(err.to_string()))?;
        store.set(SETTINGS_KEY, &serialized)?;
        log::info!("Saved settings: {serialized}");
        self.saved = Some(self.current);
        Ok(())
    }

    // Returns whether there was a snapshot to apply.
    pub fn load_settings(&mut self) -> bool {
        match self.saved {
            Some(saved) => {
                self.current = saved;
                true
            }
            None => false,
        }
    }

    // Picks up settings saved in a previous session. A malformed or out-of-range value is
    // treated the same way as a missing one.
    pub fn restore(&mut self, store: &impl KeyValueStore) -> Result<bool, StoreError> {
        let Some(serialized) = store.get(SETTINGS_KEY)? else {
            return Ok(false);
        };
        let settings = match Settings::from_json(&serialized) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring malformed saved settings {serialized:?}: {err}");
                return Ok(false);
            }
        };
        if let Err(err) = settings.validate() {
            log::warn!("Ignoring invalid saved settings {serialized:?}: {err}");
            return Ok(false);
        }
        log::info!("Restored settings: {serialized}");
        self.saved = Some(settings);
        Ok(self.load_settings())
    }
}
