use std::io::{self, BufRead};
use std::path::PathBuf;

use console::{Style, Term};
use table_tennis_score::kv_store::KeyValueStore;

use crate::command::{self, Command};
use crate::console_config::ConsoleConfig;
use crate::file_store::JsonFileStore;
use crate::table_tennis_prelude::*;
use crate::tui;


pub struct PlayConfig {
    pub config_file: Option<PathBuf>,
    pub storage_path: Option<PathBuf>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Continue(Option<String>),
    Quit,
}

pub fn setup_keeper(config: &ConsoleConfig) -> ScoreKeeper<JsonFileStore> {
    let mut keeper = ScoreKeeper::new(JsonFileStore::new(config.storage_path.clone()));
    keeper.set_game_type(config.game_type);
    for (index, name) in config.players.iter().enumerate().take(config.game_type.num_players()) {
        if let Err(err) = keeper.set_player_name(index, name.clone()) {
            log::warn!("Ignoring configured player name \"{name}\": {err}");
        }
    }
    keeper
}

pub fn execute<S: KeyValueStore>(keeper: &mut ScoreKeeper<S>, command: Command) -> Outcome {
    let message = match command {
        Command::Score(team, delta) => keeper.adjust_score(team, delta).map(|set_won| {
            format!(
                "Set to {}, {}-{}",
                keeper.team_name(set_won.winner),
                set_won.final_score[set_won.winner],
                set_won.final_score[set_won.winner.opponent()]
            )
        }),
        Command::GameType(game_type) => {
            keeper.set_game_type(game_type);
            None
        }
        Command::PlayerName { index, name } => {
            keeper.set_player_name(index, name).err().map(|err| err.to_string())
        }
        Command::ServeTeam(team) => {
            if keeper.players().game_type() == GameType::Single {
                Some("Serving pair is only chosen in doubles".to_owned())
            } else {
                keeper.set_first_serve_team(Some(team));
                None
            }
        }
        Command::ServePlayer(player) => {
            let error = check_choice(&keeper.serve_candidates(), &player);
            if error.is_none() {
                keeper.set_first_serve_player(Some(player));
            }
            error
        }
        Command::ReceivePlayer(player) => {
            let error = check_choice(&keeper.receive_candidates(), &player);
            if error.is_none() {
                keeper.set_first_receive_player(Some(player));
            }
            error
        }
        Command::Setting { name, input } => {
            keeper.update_setting_from_input(name, &input).err().map(|err| err.to_string())
        }
        Command::Save => match keeper.save_settings() {
            Ok(()) => Some("Settings saved".to_owned()),
            Err(err) => Some(err.to_string()),
        },
        Command::Load => {
            if keeper.load_settings() {
                Some("Settings loaded".to_owned())
            } else {
                Some("No saved settings".to_owned())
            }
        }
        Command::Help => Some(command::HELP.to_owned()),
        Command::Quit => return Outcome::Quit,
    };
    Outcome::Continue(message)
}

// Only players currently offered by the UI can be picked.
fn check_choice(candidates: &[&str], player: &str) -> Option<String> {
    if candidates.is_empty() {
        Some("Nothing to choose in this game type".to_owned())
    } else if !candidates.contains(&player) {
        Some(format!("Choose one of: {}", candidates.join(", ")))
    } else {
        None
    }
}

pub fn run(config: PlayConfig) -> anyhow::Result<()> {
    let mut console_config = match &config.config_file {
        Some(path) => ConsoleConfig::read(path)?,
        None => ConsoleConfig::default(),
    };
    if let Some(storage_path) = config.storage_path {
        console_config.storage_path = storage_path;
    }
    let mut keeper = setup_keeper(&console_config);
    log::info!("Using settings storage {}", keeper.store().path().display());

    let term = Term::stdout();
    let mut message = Some("Type \"help\" for the list of commands".to_owned());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if keeper.take_dirt() || message.is_some() {
            term.clear_screen()?;
            term.write_line(&tui::render_match(keeper.state()))?;
            term.write_line("")?;
            if let Some(message) = message.take() {
                term.write_line(&Style::new().magenta().apply_to(message).to_string())?;
            }
        }
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        message = match command::parse_command(&line) {
            Ok(command) => match execute(&mut keeper, command) {
                Outcome::Continue(message) => message,
                Outcome::Quit => return Ok(()),
            },
            Err(err) => Some(err.to_string()),
        };
    }
}
