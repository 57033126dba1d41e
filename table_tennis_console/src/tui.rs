use console::Style;
use enum_map::EnumMap;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::table_tennis_prelude::*;


const NAME_WIDTH: usize = 24;

fn render_optional(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_owned(),
        None => Style::new().dim().apply_to("-").to_string(),
    }
}

fn render_players(players: &PlayerRegistry) -> String {
    players
        .names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let label = format!("{}. {}", index + 1, name);
            if players.is_slot_enabled(index) {
                label
            } else {
                Style::new().dim().apply_to(label).to_string()
            }
        })
        .join("   ")
}

fn render_serve(players: &PlayerRegistry, serve: &ServeAssignment) -> String {
    let mut parts = vec![];
    if players.game_type() == GameType::Double {
        let team = serve.first_serve_team.map(|team| players.pair(team).join("-"));
        parts.push(format!("Serving pair: {}", render_optional(team.as_deref())));
    }
    parts.push(format!(
        "First server: {}",
        render_optional(serve.first_serve_player.as_deref())
    ));
    if players.game_type() == GameType::Double {
        parts.push(format!(
            "First receiver: {}",
            render_optional(serve.first_receive_player.as_deref())
        ));
    }
    parts.join("   ")
}

fn render_score_line(name: &str, points: u32, leading: bool) -> String {
    let points = format!("{points:>3}");
    let points = if leading {
        Style::new().bold().green().apply_to(points).to_string()
    } else {
        Style::new().bold().apply_to(points).to_string()
    };
    format!("  {name:<NAME_WIDTH$}{points}")
}

fn render_scores(state: &MatchState) -> String {
    let names: EnumMap<Team, String> =
        EnumMap::from_fn(|team| state.players.team_name(team));
    let score = &state.score;
    let mut lines = vec![Style::new().underlined().apply_to("Score").to_string()];
    for team in Team::iter() {
        let leading = score.points(team) > score.points(team.opponent());
        lines.push(render_score_line(&names[team], score.points(team), leading));
    }
    lines.push(Style::new().underlined().apply_to("Set wins").to_string());
    for team in Team::iter() {
        lines.push(format!("  {:<NAME_WIDTH$}{:>3}", names[team], score.set_wins(team)));
    }
    lines.join("\n")
}

pub fn render_settings(settings: &Settings) -> String {
    SettingName::iter()
        .map(|name| {
            format!("  {}: {} {} ({})", name.label(), settings.get(name), name.unit(), name)
        })
        .join("\n")
}

pub fn render_match(state: &MatchState) -> String {
    let game_type = match state.players.game_type() {
        GameType::Single => "Singles",
        GameType::Double => "Doubles",
    };
    let settings_header = match state.settings.saved() {
        Some(saved) if saved == state.settings.current() => "Settings (saved)",
        Some(_) => "Settings (modified)",
        None => "Settings",
    };
    [
        Style::new().bold().apply_to("Table Tennis Score Calculator").to_string(),
        format!("{}   {}", game_type, render_players(&state.players)),
        render_serve(&state.players, &state.serve),
        String::new(),
        render_scores(state),
        String::new(),
        Style::new().underlined().apply_to(settings_header).to_string(),
        render_settings(state.settings.current()),
    ]
    .join("\n")
}
