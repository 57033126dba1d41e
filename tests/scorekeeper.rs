use enum_map::enum_map;
use pretty_assertions::assert_eq;

use table_tennis_score::kv_store::MemoryStore;
use table_tennis_score::player::{GameType, Team};
use table_tennis_score::scorekeeper::ScoreKeeper;
use table_tennis_score::scores::{PointDelta, SetWon};
use table_tennis_score::settings::SettingName;
use table_tennis_score::test_util::*;


fn singles() -> ScoreKeeper<MemoryStore> {
    keeper_with_players(GameType::Single, sample_singles_names())
}

#[test]
fn set_win_from_ten_nine() {
    let mut keeper = singles();
    play_points(&mut keeper, Team::First, 10);
    play_points(&mut keeper, Team::Second, 9);
    let set_won = keeper.adjust_score(Team::First, PointDelta::Increment);
    assert_eq!(
        set_won,
        Some(SetWon {
            winner: Team::First,
            final_score: enum_map! { Team::First => 11, Team::Second => 9 },
        })
    );
    assert_eq!(keeper.score().all_set_wins(), enum_map! { Team::First => 1, Team::Second => 0 });
    assert_eq!(keeper.score().all_points(), enum_map! { _ => 0 });
}

#[test]
fn deuce_needs_two_clear_points() {
    let mut keeper = singles();
    let sets = play_rally_log(&mut keeper, "1212121212 1212121212");
    assert!(sets.is_empty());
    assert_eq!(keeper.score().all_points(), enum_map! { _ => 10 });

    assert!(play_rally_log(&mut keeper, "1").is_empty());
    assert_eq!(keeper.score().all_points(), enum_map! { Team::First => 11, Team::Second => 10 });

    assert!(play_rally_log(&mut keeper, "22").is_empty());
    assert_eq!(keeper.score().all_points(), enum_map! { Team::First => 11, Team::Second => 12 });

    let sets = play_rally_log(&mut keeper, "2");
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].winner, Team::Second);
    assert_eq!(sets[0].final_score, enum_map! { Team::First => 11, Team::Second => 13 });
    assert_eq!(keeper.score().all_set_wins(), enum_map! { Team::First => 0, Team::Second => 1 });
}

#[test]
fn decrement_corrects_mistakes_without_ending_sets() {
    let mut keeper = singles();
    play_points(&mut keeper, Team::First, 10);
    keeper.adjust_score(Team::First, PointDelta::Decrement);
    keeper.adjust_score(Team::Second, PointDelta::Decrement);
    assert_eq!(keeper.score().all_points(), enum_map! { Team::First => 9, Team::Second => 0 });
    assert!(keeper.can_decrement(Team::First));
    assert!(!keeper.can_decrement(Team::Second));
}

#[test]
fn match_keeps_going_after_best_of() {
    let mut keeper = singles();
    keeper.update_setting(SettingName::BestOfSets, 3);
    for _ in 0..4 {
        let sets = play_points(&mut keeper, Team::Second, 11);
        assert_eq!(sets.len(), 1);
    }
    assert_eq!(keeper.score().set_wins(Team::Second), 4);
    assert_eq!(keeper.adjust_score(Team::First, PointDelta::Increment), None);
    assert_eq!(keeper.score().points(Team::First), 1);
}

#[test]
fn settings_change_mid_set_applies_to_next_point() {
    let mut keeper = singles();
    play_points(&mut keeper, Team::First, 6);
    keeper.update_setting(SettingName::PointsPerSet, 5);
    // 6:0 is already past the new target, but only a scored point checks for a set win.
    assert_eq!(keeper.score().points(Team::First), 6);
    let sets = play_points(&mut keeper, Team::First, 1);
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].final_score[Team::First], 7);
}

#[test]
fn team_names_by_game_type() {
    let keeper = singles();
    assert_eq!(keeper.team_name(Team::First), "Alice");
    assert_eq!(keeper.team_name(Team::Second), "Bob");

    let keeper = keeper_with_players(GameType::Double, ["A", "B", "C", "D"]);
    assert_eq!(keeper.team_name(Team::First), "A-B");
    assert_eq!(keeper.team_name(Team::Second), "C-D");
}

#[test]
fn switching_game_type_discards_names_but_not_score() {
    let mut keeper = keeper_with_players(GameType::Double, sample_doubles_names());
    play_points(&mut keeper, Team::First, 3);
    keeper.set_game_type(GameType::Single);
    assert_eq!(keeper.players().names(), &["Player 1", "Player 2", "", ""].map(str::to_owned));
    assert_eq!(keeper.score().points(Team::First), 3);
    assert_eq!(keeper.team_name(Team::Second), "Player 2");
}

#[test]
fn serve_choices_in_doubles() {
    let mut keeper = keeper_with_players(GameType::Double, sample_doubles_names());
    keeper.set_first_serve_team(Some(Team::First));
    assert_eq!(keeper.serve_candidates(), vec!["Alice", "Bob"]);
    assert_eq!(keeper.receive_candidates(), vec!["Charlie", "Dave"]);
    keeper.set_first_serve_player(Some("Bob".to_owned()));
    keeper.set_first_receive_player(Some("Dave".to_owned()));

    keeper.set_first_serve_team(Some(Team::Second));
    assert_eq!(keeper.serve_candidates(), vec!["Charlie", "Dave"]);
    assert_eq!(keeper.serve().first_serve_player.as_deref(), Some("Bob"));

    // Serve choices never influence scoring.
    let sets = play_points(&mut keeper, Team::First, 11);
    assert_eq!(sets.len(), 1);
}

#[test]
fn serve_choices_follow_renames() {
    let mut keeper = singles();
    keeper.set_player_name(1, "Robert".to_owned()).unwrap();
    assert_eq!(keeper.serve_candidates(), vec!["Alice", "Robert"]);
    assert!(keeper.receive_candidates().is_empty());
}
