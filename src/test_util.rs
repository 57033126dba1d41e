// Test utilities shared by unit tests and the integration tests in the "tests" folder.

use crate::kv_store::{KeyValueStore, MemoryStore};
use crate::player::{GameType, Team};
use crate::scorekeeper::ScoreKeeper;
use crate::scores::{PointDelta, SetWon};


pub fn sample_singles_names() -> [&'static str; 4] { ["Alice", "Bob", "", ""] }
pub fn sample_doubles_names() -> [&'static str; 4] { ["Alice", "Bob", "Charlie", "Dave"] }

pub fn keeper_with_players(game_type: GameType, names: [&str; 4]) -> ScoreKeeper<MemoryStore> {
    let mut keeper = ScoreKeeper::new(MemoryStore::new());
    keeper.set_game_type(game_type);
    for (index, name) in names.into_iter().enumerate().take(game_type.num_players()) {
        keeper.set_player_name(index, name.to_owned()).unwrap();
    }
    keeper
}

// Plays points in order given as a string of team numbers, e.g. "1121" is three points for the
// first team and one for the second. Returns all sets completed on the way.
pub fn play_rally_log<S: KeyValueStore>(
    keeper: &mut ScoreKeeper<S>, log: &str,
) -> Vec<SetWon> {
    log.chars()
        .filter(|ch| !ch.is_whitespace())
        .filter_map(|ch| {
            let team = match ch {
                '1' => Team::First,
                '2' => Team::Second,
                _ => panic!("Unexpected rally winner: {ch:?}"),
            };
            keeper.adjust_score(team, PointDelta::Increment)
        })
        .collect()
}

pub fn play_points<S: KeyValueStore>(
    keeper: &mut ScoreKeeper<S>, team: Team, points: u32,
) -> Vec<SetWon> {
    (0..points).filter_map(|_| keeper.adjust_score(team, PointDelta::Increment)).collect()
}
