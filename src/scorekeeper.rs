// The single owner of all scorekeeping state. Front ends forward user actions here and re-render
// when `take_dirt` says something changed.

use crate::dirty::Dirty;
use crate::error::{PlayerError, SettingError, StoreError};
use crate::kv_store::KeyValueStore;
use crate::player::{GameType, PlayerRegistry, Team};
use crate::scores::{PointDelta, ScoreBoard, SetWon};
use crate::serve::ServeAssignment;
use crate::settings::{SettingName, Settings, SettingsHolder};


#[derive(Clone, Debug, Default)]
pub struct MatchState {
    pub settings: SettingsHolder,
    pub players: PlayerRegistry,
    pub serve: ServeAssignment,
    pub score: ScoreBoard,
}

pub struct ScoreKeeper<S: KeyValueStore> {
    state: Dirty<MatchState>,
    store: S,
}

impl<S: KeyValueStore> ScoreKeeper<S> {
    // Restores previously saved settings, if any. A broken store is not fatal: the keeper
    // starts with default settings and the error is logged.
    pub fn new(store: S) -> Self {
        let mut state = MatchState::default();
        if let Err(err) = state.settings.restore(&store) {
            log::error!("Cannot restore settings: {err}");
        }
        Self { state: Dirty::new(state), store }
    }

    pub fn state(&self) -> &MatchState { &self.state }
    pub fn settings(&self) -> &Settings { self.state.settings.current() }
    pub fn players(&self) -> &PlayerRegistry { &self.state.players }
    pub fn serve(&self) -> &ServeAssignment { &self.state.serve }
    pub fn score(&self) -> &ScoreBoard { &self.state.score }
    pub fn store(&self) -> &S { &self.store }

    pub fn take_dirt(&self) -> bool { self.state.take_dirt() }

    pub fn adjust_score(&mut self, team: Team, delta: PointDelta) -> Option<SetWon> {
        let state = self.state.get_mut();
        let set_won = state.score.adjust(team, delta, state.settings.current());
        if let Some(SetWon { winner, final_score }) = set_won {
            log::info!(
                "Set won by {}: {}-{}",
                state.players.team_name(winner),
                final_score[winner],
                final_score[winner.opponent()]
            );
        }
        set_won
    }

    pub fn can_decrement(&self, team: Team) -> bool { self.state.score.can_decrement(team) }

    pub fn update_setting(&mut self, name: SettingName, value: u32) {
        self.state.get_mut().settings.update_setting(name, value);
    }

    pub fn update_setting_from_input(
        &mut self, name: SettingName, input: &str,
    ) -> Result<(), SettingError> {
        self.state.get_mut().settings.update_setting_from_input(name, input)
    }

    pub fn save_settings(&mut self) -> Result<(), StoreError> {
        self.state.get_mut().settings.save_settings(&mut self.store)
    }

    pub fn load_settings(&mut self) -> bool { self.state.get_mut().settings.load_settings() }

    pub fn set_game_type(&mut self, game_type: GameType) {
        self.state.get_mut().players.set_game_type(game_type);
    }

    pub fn set_player_name(&mut self, index: usize, name: String) -> Result<(), PlayerError> {
        self.state.get_mut().players.set_player_name(index, name)
    }

    pub fn team_name(&self, team: Team) -> String { self.state.players.team_name(team) }

    pub fn set_first_serve_team(&mut self, team: Option<Team>) {
        self.state.get_mut().serve.set_first_serve_team(team);
    }

    pub fn set_first_serve_player(&mut self, player: Option<String>) {
        self.state.get_mut().serve.set_first_serve_player(player);
    }

    pub fn set_first_receive_player(&mut self, player: Option<String>) {
        self.state.get_mut().serve.set_first_receive_player(player);
    }

    pub fn serve_candidates(&self) -> Vec<&str> {
        self.state.serve.serve_candidates(&self.state.players)
    }

    pub fn receive_candidates(&self) -> Vec<&str> {
        self.state.serve.receive_candidates(&self.state.players)
    }
}
