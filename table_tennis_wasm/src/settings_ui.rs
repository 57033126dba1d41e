use std::fmt;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::table_tennis_prelude::*;


pub const SETTINGS_BODY: &str = "settings-body";

pub fn setting_input_id(name: SettingName) -> String { format!("setting-{name}") }

pub struct SettingNode {
    name: String,
    label: String,
    input: Option<String>,
    unit: Option<String>,
}

impl SettingNode {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input: None,
            unit: None,
        }
    }

    pub fn class(&self) -> String { format!("setting-{}", self.name) }

    pub fn with_input_number(
        mut self, min: u32, step: u32, value: impl fmt::Display,
    ) -> Self {
        let name = &self.name;
        let class = self.class();
        self.input = Some(format!(
            "<input type='number' id='{class}' name='{name}' class='{class}'
            min='{min}' step='{step}' value='{value}' required/>"
        ));
        self
    }

    pub fn with_input_radio<S1: fmt::Display, S2: fmt::Display>(
        mut self, options: impl IntoIterator<Item = (S1, S2, bool)>,
    ) -> Self {
        let name = &self.name;
        self.input = Some(
            options
                .into_iter()
                .map(|(value, label, checked)| {
                    let checked_attr = if checked { "checked" } else { "" };
                    format!(
                        "<label><input type='radio' name='{}' value='{}' {}/>{}</label>",
                        name,
                        html_escape::encode_single_quoted_attribute(&value.to_string()),
                        checked_attr,
                        html_escape::encode_text(&label.to_string()),
                    )
                })
                .join(""),
        );
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            "<label for='{}' class='{}'>{}</label>",
            self.class(),
            self.class(),
            html_escape::encode_text(&self.label)
        ));
        if let Some(input) = &self.input {
            html.push_str(input);
        }
        match &self.unit {
            Some(unit) => html.push_str(&format!(
                "<span class='{}'>{}</span>",
                self.class(),
                html_escape::encode_text(unit)
            )),
            None => html.push_str(&format!("<span class='{}'></span>", self.class())),
        }
        html
    }
}

pub fn setting_node(name: SettingName, settings: &Settings) -> SettingNode {
    // Only odd set counts make sense for "best of".
    let (min, step) = match name {
        SettingName::BestOfSets => (1, 2),
        _ => (1, 1),
    };
    SettingNode::new(name.to_string(), name.label())
        .with_input_number(min, step, settings.get(name))
        .with_unit(name.unit())
}

pub fn game_type_node(game_type: GameType) -> SettingNode {
    SettingNode::new("game-type", "Game type").with_input_radio([
        (GameType::Single, "Single", game_type == GameType::Single),
        (GameType::Double, "Double", game_type == GameType::Double),
    ])
}

pub fn settings_html(settings: &Settings) -> String {
    SettingName::iter().map(|name| setting_node(name, settings).to_html()).join("")
}

// Radio groups for choosing who serves and receives first. Only the choices that make sense for
// the current game type are shown.
fn player_options(candidates: Vec<&str>, chosen: Option<&str>) -> Vec<(String, String, bool)> {
    candidates
        .into_iter()
        .map(|name| (name.to_owned(), name.to_owned(), Some(name) == chosen))
        .collect()
}

pub fn serve_html(players: &PlayerRegistry, serve: &ServeAssignment) -> String {
    let mut html = String::new();
    if players.game_type() == GameType::Double {
        let team_options = Team::iter()
            .map(|team| (team, players.pair(team).join("-"), serve.first_serve_team == Some(team)));
        html.push_str(
            &SettingNode::new("serve-team", "Serving pair").with_input_radio(team_options).to_html(),
        );
    }
    html.push_str(
        &SettingNode::new("serve-player", "First server")
            .with_input_radio(player_options(
                serve.serve_candidates(players),
                serve.first_serve_player.as_deref(),
            ))
            .to_html(),
    );
    let receive_candidates = serve.receive_candidates(players);
    if !receive_candidates.is_empty() {
        html.push_str(
            &SettingNode::new("receive-player", "First receiver")
                .with_input_radio(player_options(
                    receive_candidates,
                    serve.first_receive_player.as_deref(),
                ))
                .to_html(),
        );
    }
    html
}
