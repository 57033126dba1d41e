// The page owns a single `WebScoreKeeper`. Event handlers on the JS side (see `www/index.js`)
// forward user actions to it and then call `update_state`, which touches the DOM only if
// something has changed.
//
// Expected page layout (element ids, see `www/index.html`):
//   - `game-type-body`, `serve-body`, `settings-body`: containers filled from Rust;
//   - `player-name-{1..4}`: text inputs;
//   - `team-name-{1,2}`, `set-wins-name-{1,2}`, `score-{1,2}`, `set-wins-{1,2}`: text;
//   - `decrement-{1,2}`: buttons;
//   - `settings-status`, `info-string`: text.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod local_storage;
pub mod settings_ui;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;

mod table_tennis_prelude;

use std::str::FromStr;

use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use local_storage::LocalStorage;
use settings_ui::{SETTINGS_BODY, game_type_node, serve_html, setting_input_id, settings_html};
use table_tennis_prelude::*;
use web_document::web_document;
use web_element_ext::WebElementExt;
use web_error_handling::JsResult;


#[wasm_bindgen]
pub struct WebScoreKeeper {
    keeper: ScoreKeeper<LocalStorage>,
    // Shown under the score board until the next action.
    info: Option<String>,
}

#[wasm_bindgen]
impl WebScoreKeeper {
    pub fn new_keeper() -> WebScoreKeeper {
        WebScoreKeeper {
            keeper: ScoreKeeper::new(LocalStorage::open()),
            info: None,
        }
    }

    pub fn is_storage_available(&self) -> bool { self.keeper.store().is_available() }

    pub fn set_game_type(&mut self, game_type: &str) -> JsResult<()> {
        let game_type = GameType::from_str(game_type)
            .map_err(|_| rust_error!("Unexpected game type: {}", game_type))?;
        self.info = None;
        self.keeper.set_game_type(game_type);
        Ok(())
    }

    // `slot` is 1-based, matching the element ids.
    pub fn set_player_name(&mut self, slot: usize, name: String) -> JsResult<()> {
        let index = slot_index(slot).ok_or_else(|| rust_error!("Unexpected slot: {}", slot))?;
        self.info = self.keeper.set_player_name(index, name).err().map(|err| err.to_string());
        Ok(())
    }

    // `delta` is `1` or `-1`.
    pub fn adjust_score(&mut self, team: usize, delta: i32) -> JsResult<()> {
        let team =
            team_from_number(team).ok_or_else(|| rust_error!("Unexpected team: {}", team))?;
        let delta =
            score_delta(delta).ok_or_else(|| rust_error!("Unexpected score delta: {}", delta))?;
        self.info = self.keeper.adjust_score(team, delta).map(|set_won| {
            format!(
                "Set to {}, {}-{}",
                self.keeper.team_name(set_won.winner),
                set_won.final_score[set_won.winner],
                set_won.final_score[set_won.winner.opponent()]
            )
        });
        Ok(())
    }

    // Invalid input keeps the previous value and reports the problem in the info line.
    pub fn update_setting(&mut self, name: &str, input: &str) -> JsResult<()> {
        let name = SettingName::from_str(name)
            .map_err(|_| rust_error!("Unexpected setting: {}", name))?;
        self.info =
            self.keeper.update_setting_from_input(name, input).err().map(|err| err.to_string());
        if self.info.is_some() {
            // The input element still shows the rejected text.
            self.force_render()?;
        }
        Ok(())
    }

    pub fn save_settings(&mut self) {
        self.info = Some(match self.keeper.save_settings() {
            Ok(()) => "Settings saved".to_owned(),
            Err(err) => err.to_string(),
        });
    }

    pub fn load_settings(&mut self) {
        self.info = Some(if self.keeper.load_settings() {
            "Settings loaded".to_owned()
        } else {
            "No saved settings".to_owned()
        });
    }

    pub fn set_first_serve_team(&mut self, team: &str) -> JsResult<()> {
        let team =
            serve_team_choice(team).map_err(|_| rust_error!("Unexpected team: {}", team))?;
        self.info = None;
        self.keeper.set_first_serve_team(team);
        Ok(())
    }

    pub fn set_first_serve_player(&mut self, player: &str) {
        self.info = None;
        self.keeper.set_first_serve_player(non_empty(player));
    }

    pub fn set_first_receive_player(&mut self, player: &str) {
        self.info = None;
        self.keeper.set_first_receive_player(non_empty(player));
    }

    pub fn update_state(&self) -> JsResult<()> {
        if self.keeper.take_dirt() {
            render_match(self.keeper.state())?;
        }
        render_info(self.info.as_deref())
    }

    fn force_render(&self) -> JsResult<()> {
        self.keeper.take_dirt();
        render_match(self.keeper.state())
    }
}

#[wasm_bindgen]
pub fn init_page() -> JsResult<()> {
    web_error_handling::set_panic_hook();
    let settings_body = web_document()?.get_existing_element_by_id(SETTINGS_BODY)?;
    settings_body.set_inner_html(&settings_html(&Settings::default()));
    Ok(())
}

// Slots and teams are numbered from 1 on the page.
fn slot_index(slot: usize) -> Option<usize> { slot.checked_sub(1) }

fn team_from_number(team: usize) -> Option<Team> {
    team.checked_sub(1).and_then(Team::from_index)
}

fn score_delta(delta: i32) -> Option<PointDelta> {
    match delta {
        1 => Some(PointDelta::Increment),
        -1 => Some(PointDelta::Decrement),
        _ => None,
    }
}

// Empty string clears the choice.
fn serve_team_choice(team: &str) -> Result<Option<Team>, strum::ParseError> {
    match team {
        "" => Ok(None),
        _ => Team::from_str(team).map(Some),
    }
}

fn non_empty(s: &str) -> Option<String> { (!s.is_empty()).then(|| s.to_owned()) }

fn player_name_id(index: usize) -> String { format!("player-name-{}", index + 1) }

fn render_info(info: Option<&str>) -> JsResult<()> {
    let info_string = web_document()?.get_existing_element_by_id("info-string")?;
    info_string.set_text_content(info);
    Ok(())
}

fn render_players(players: &PlayerRegistry) -> JsResult<()> {
    let document = web_document()?;
    document
        .get_existing_element_by_id("game-type-body")?
        .set_inner_html(&game_type_node(players.game_type()).to_html());
    for (index, name) in players.names().iter().enumerate() {
        let input = document.get_existing_input_by_id(&player_name_id(index))?;
        let enabled = players.is_slot_enabled(index);
        input.set_value(name);
        input.set_disabled(!enabled);
    }
    Ok(())
}

fn render_scores(state: &MatchState) -> JsResult<()> {
    let document = web_document()?;
    for team in Team::iter() {
        let n = team.index() + 1;
        let team_name = state.players.team_name(team);
        for id in [format!("team-name-{n}"), format!("set-wins-name-{n}")] {
            document.get_existing_element_by_id(&id)?.set_text_content(Some(&team_name));
        }
        document
            .get_existing_element_by_id(&format!("score-{n}"))?
            .set_text_content(Some(&state.score.points(team).to_string()));
        document
            .get_existing_element_by_id(&format!("set-wins-{n}"))?
            .set_text_content(Some(&state.score.set_wins(team).to_string()));
        document
            .get_existing_element_by_id(&format!("decrement-{n}"))?
            .set_disabled(!state.score.can_decrement(team))?;
    }
    Ok(())
}

fn render_settings(settings: &SettingsHolder) -> JsResult<()> {
    let document = web_document()?;
    for name in SettingName::iter() {
        let input = document.get_existing_input_by_id(&setting_input_id(name))?;
        input.set_value(&settings.current().get(name).to_string());
    }
    let status = match settings.saved() {
        Some(saved) if saved == settings.current() => "Saved",
        Some(_) => "Modified since last save",
        None => "Not saved",
    };
    document.get_existing_element_by_id("settings-status")?.set_text_content(Some(status));
    Ok(())
}

fn render_match(state: &MatchState) -> JsResult<()> {
    render_players(&state.players)?;
    web_document()?
        .get_existing_element_by_id("serve-body")?
        .set_inner_html(&serve_html(&state.players, &state.serve));
    render_scores(state)?;
    render_settings(&state.settings)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_one_based() {
        assert_eq!(slot_index(1), Some(0));
        assert_eq!(slot_index(4), Some(3));
        assert_eq!(slot_index(0), None);
        assert_eq!(team_from_number(1), Some(Team::First));
        assert_eq!(team_from_number(2), Some(Team::Second));
        assert_eq!(team_from_number(0), None);
        assert_eq!(team_from_number(3), None);
    }

    #[test]
    fn score_buttons() {
        assert_eq!(score_delta(1), Some(PointDelta::Increment));
        assert_eq!(score_delta(-1), Some(PointDelta::Decrement));
        assert_eq!(score_delta(0), None);
        assert_eq!(score_delta(2), None);
    }

    #[test]
    fn serve_team_radio_values() {
        assert_eq!(serve_team_choice(""), Ok(None));
        assert_eq!(serve_team_choice("player1-player2"), Ok(Some(Team::First)));
        assert_eq!(serve_team_choice("player3-player4"), Ok(Some(Team::Second)));
        assert!(serve_team_choice("player5-player6").is_err());
    }

    #[test]
    fn empty_player_choice_clears() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("Alice").as_deref(), Some("Alice"));
    }
}
