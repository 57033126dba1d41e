#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod command;
mod console_config;
mod file_store;
mod play_main;
mod show_settings;
mod table_tennis_prelude;
mod tui;

use std::path::PathBuf;

use clap::{Command, arg, value_parser};
use console_config::DEFAULT_STORAGE_PATH;


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Table tennis")
        .version(clap::crate_version!())
        .about("Table tennis scorekeeper console app")
        .subcommand_required(true)
        .subcommand(
            Command::new("play")
                .about("Keep score interactively; commands are read from stdin")
                .arg(
                    arg!(--"config" <config_file> "Path to yaml-serialized ConsoleConfig")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--"storage" <storage_file> "Where settings are saved (overrides config)")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("settings").about("Print saved settings").arg(
                arg!(--"storage" <storage_file> "Where settings are saved")
                    .value_parser(value_parser!(PathBuf))
                    .default_value(DEFAULT_STORAGE_PATH),
            ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("play", sub_matches)) => play_main::run(play_main::PlayConfig {
            config_file: sub_matches.get_one::<PathBuf>("config").cloned(),
            storage_path: sub_matches.get_one::<PathBuf>("storage").cloned(),
        }),
        Some(("settings", sub_matches)) => {
            show_settings::run(sub_matches.get_one::<PathBuf>("storage").unwrap())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
