use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::PlayerError;


pub const NUM_PLAYER_SLOTS: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum GameType {
    #[default]
    Single,
    Double,
}

// Team `First` is players 1 and 2 (player 1 alone in singles), team `Second` is players 3 and 4
// (player 2 alone in singles).
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Display, EnumString, Serialize,
    Deserialize,
)]
pub enum Team {
    #[strum(serialize = "player1-player2")]
    First,
    #[strum(serialize = "player3-player4")]
    Second,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::First => Team::Second,
            Team::Second => Team::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::First => 0,
            Team::Second => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Team::First),
            1 => Some(Team::Second),
            _ => None,
        }
    }
}

impl GameType {
    pub fn default_player_names(self) -> [&'static str; NUM_PLAYER_SLOTS] {
        match self {
            GameType::Single => ["Player 1", "Player 2", "", ""],
            GameType::Double => ["Player 1", "Player 2", "Player 3", "Player 4"],
        }
    }

    pub fn num_players(self) -> usize {
        match self {
            GameType::Single => 2,
            GameType::Double => 4,
        }
    }
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlayerRegistry {
    game_type: GameType,
    names: [String; NUM_PLAYER_SLOTS],
}

impl Default for PlayerRegistry {
    fn default() -> Self { Self::new(GameType::default()) }
}

impl PlayerRegistry {
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            names: game_type.default_player_names().map(str::to_owned),
        }
    }

    pub fn game_type(&self) -> GameType { self.game_type }
    pub fn names(&self) -> &[String; NUM_PLAYER_SLOTS] { &self.names }
    pub fn name(&self, index: usize) -> Option<&str> { self.names.get(index).map(String::as_str) }

    // Custom names are discarded even if the type does not change.
    pub fn set_game_type(&mut self, game_type: GameType) { *self = Self::new(game_type); }

    pub fn is_slot_enabled(&self, index: usize) -> bool { index < self.game_type.num_players() }

    // Names are taken verbatim: empty and duplicate names are fine.
    pub fn set_player_name(&mut self, index: usize, name: String) -> Result<(), PlayerError> {
        if index >= NUM_PLAYER_SLOTS {
            return Err(PlayerError::NoSuchSlot(index));
        }
        if !self.is_slot_enabled(index) {
            return Err(PlayerError::SlotDisabled(index));
        }
        self.names[index] = name;
        Ok(())
    }

    // Members of the team in doubles. Used for serve choices, so this ignores the game type.
    pub fn pair(&self, team: Team) -> [&str; 2] {
        match team {
            Team::First => [&self.names[0], &self.names[1]],
            Team::Second => [&self.names[2], &self.names[3]],
        }
    }

    pub fn team_name(&self, team: Team) -> String {
        match self.game_type {
            GameType::Single => self.names[team.index()].clone(),
            GameType::Double => self.pair(team).join("-"),
        }
    }
}
