use std::fmt;

use crate::table_tennis_prelude::*;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Score(Team, PointDelta),
    GameType(GameType),
    PlayerName { index: usize, name: String },
    ServeTeam(Team),
    ServePlayer(String),
    ReceivePlayer(String),
    Setting { name: SettingName, input: String },
    Save,
    Load,
    Help,
    Quit,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CommandError(String);

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

macro_rules! command_error {
    ($($arg:tt)*) => {
        CommandError(format!($($arg)*))
    };
}

pub const HELP: &str = "\
Commands:
  +1, -1, +2, -2          add or take back a point for team 1 or 2
  mode single|double      switch game type (resets player names)
  name <1-4> <name>       rename a player
  serve-team 1|2          choose the pair that serves first (doubles)
  serve <player>          choose the first server
  receive <player>        choose the first receiver (doubles)
  set <setting> <value>   change a rule: points-per-set, win-by-points, best-of-sets,
                          serves-per-rotation, serves-after-deuce
  save, load              save rules for future sessions / restore saved rules
  help, quit";

fn parse_team(s: &str) -> Result<Team, CommandError> {
    match s {
        "1" => Ok(Team::First),
        "2" => Ok(Team::Second),
        _ => Err(command_error!("Expected team 1 or 2, got \"{}\"", s)),
    }
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let require_arg = |what: &str| {
        if rest.is_empty() {
            Err(command_error!("Missing {} for \"{}\"", what, verb))
        } else {
            Ok(rest)
        }
    };
    match verb {
        "+1" | "+2" | "-1" | "-2" => {
            let delta =
                if verb.starts_with('+') { PointDelta::Increment } else { PointDelta::Decrement };
            Ok(Command::Score(parse_team(&verb[1..])?, delta))
        }
        "mode" => {
            let game_type = require_arg("game type")?
                .parse::<GameType>()
                .map_err(|_| command_error!("Expected \"single\" or \"double\", got \"{}\"", rest))?;
            Ok(Command::GameType(game_type))
        }
        "name" => {
            let (slot, name) = require_arg("player number")?
                .split_once(char::is_whitespace)
                .map(|(slot, name)| (slot, name.trim()))
                .unwrap_or((rest, ""));
            let index = match slot.parse::<usize>() {
                Ok(n @ 1..=NUM_PLAYER_SLOTS) => n - 1,
                _ => return Err(command_error!("Expected player number 1-4, got \"{}\"", slot)),
            };
            Ok(Command::PlayerName { index, name: name.to_owned() })
        }
        "serve-team" => Ok(Command::ServeTeam(parse_team(require_arg("team")?)?)),
        "serve" => Ok(Command::ServePlayer(require_arg("player")?.to_owned())),
        "receive" => Ok(Command::ReceivePlayer(require_arg("player")?.to_owned())),
        "set" => {
            let (name, input) = require_arg("setting")?
                .split_once(char::is_whitespace)
                .ok_or_else(|| command_error!("Missing value for \"{}\"", rest))?;
            let name = name
                .parse::<SettingName>()
                .map_err(|_| command_error!("Unknown setting \"{}\"", name))?;
            Ok(Command::Setting { name, input: input.trim().to_owned() })
        }
        "save" => Ok(Command::Save),
        "load" => Ok(Command::Load),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(command_error!("Empty command, type \"help\" for the list")),
        _ => Err(command_error!("Unknown command \"{}\", type \"help\" for the list", verb)),
    }
}
