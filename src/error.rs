use std::{error, fmt};

use crate::settings::SettingName;


// Failure reported by a `KeyValueStore` backend. Backends are free-form (browser storage, files),
// so the details are kept as a message.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StoreError {
    Unavailable(String),
    ReadFailed(String),
    WriteFailed(String),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SettingError {
    NotANumber { name: SettingName, input: String },
    NotPositive { name: SettingName },
    EvenSetCount { value: u32 },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PlayerError {
    NoSuchSlot(usize),
    SlotDisabled(usize),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StoreError::ReadFailed(msg) => write!(f, "Cannot read from storage: {msg}"),
            StoreError::WriteFailed(msg) => write!(f, "Cannot write to storage: {msg}"),
        }
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::NotANumber { name, input } => {
                write!(f, "Invalid value for {name}: \"{input}\" is not a number")
            }
            SettingError::NotPositive { name } => write!(f, "{name} must be positive"),
            SettingError::EvenSetCount { value } => {
                write!(f, "Match must be best of an odd number of sets, got {value}")
            }
        }
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Slots are shown one-based, the way they are labelled in the UI.
        match self {
            PlayerError::NoSuchSlot(index) => write!(f, "There is no player {}", index + 1),
            PlayerError::SlotDisabled(index) => {
                write!(f, "Player {} is not used in singles", index + 1)
            }
        }
    }
}

impl error::Error for StoreError {}
impl error::Error for SettingError {}
impl error::Error for PlayerError {}
