use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::player::Team;
use crate::settings::Settings;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointDelta {
    Increment,
    Decrement,
}

// A set that has just been completed. `final_score` is the score at the moment of winning,
// before the reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SetWon {
    pub winner: Team,
    pub final_score: EnumMap<Team, u32>,
}

// Points in the current set and sets won so far. There is no terminal state: best-of-sets is
// not enforced and the board keeps counting sets indefinitely.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    points: EnumMap<Team, u32>,
    set_wins: EnumMap<Team, u32>,
}

impl ScoreBoard {
    pub fn new() -> Self { Self::default() }

    pub fn from_points(first: u32, second: u32) -> Self {
        let mut board = Self::new();
        board.points[Team::First] = first;
        board.points[Team::Second] = second;
        board
    }

    pub fn points(&self, team: Team) -> u32 { self.points[team] }
    pub fn set_wins(&self, team: Team) -> u32 { self.set_wins[team] }
    pub fn all_points(&self) -> EnumMap<Team, u32> { self.points }
    pub fn all_set_wins(&self) -> EnumMap<Team, u32> { self.set_wins }

    pub fn can_decrement(&self, team: Team) -> bool { self.points[team] > 0 }

    // Pure transition. The set-win rule is checked on increments only, so taking a point back
    // can never complete a set.
    pub fn adjusted(
        &self, team: Team, delta: PointDelta, settings: &Settings,
    ) -> (ScoreBoard, Option<SetWon>) {
        let mut next = *self;
        match delta {
            PointDelta::Decrement => {
                if let Some(points) = next.points[team].checked_sub(1) {
                    next.points[team] = points;
                }
                (next, None)
            }
            PointDelta::Increment => {
                next.points[team] += 1;
                let own = next.points[team];
                let other = next.points[team.opponent()];
                if own >= settings.points_per_set
                    && own >= other.saturating_add(settings.win_by_points)
                {
                    let set_won = SetWon { winner: team, final_score: next.points };
                    next.set_wins[team] += 1;
                    next.points = EnumMap::default();
                    (next, Some(set_won))
                } else {
                    (next, None)
                }
            }
        }
    }

    pub fn adjust(&mut self, team: Team, delta: PointDelta, settings: &Settings) -> Option<SetWon> {
        let (next, set_won) = self.adjusted(team, delta, settings);
        *self = next;
        set_won
    }
}


#[cfg(test)]
mod tests {
    use enum_map::enum_map;
    use strum::IntoEnumIterator;

    use super::PointDelta::*;
    use super::*;

    #[test]
    fn decrement_at_zero_is_noop() {
        let settings = Settings::default();
        for team in Team::iter() {
            let board = ScoreBoard::from_points(0, 0);
            assert!(!board.can_decrement(team));
            assert_eq!(board.adjusted(team, Decrement, &settings), (board, None));
        }
    }

    #[test]
    fn decrement_never_wins_set() {
        // Score above the target with a wide enough margin can only come from a settings change.
        let settings = Settings { points_per_set: 5, ..Settings::default() };
        let mut board = ScoreBoard::from_points(9, 1);
        assert_eq!(board.adjust(Team::Second, Decrement, &settings), None);
        assert_eq!(board.all_points(), enum_map! { Team::First => 9, Team::Second => 0 });
        assert_eq!(board.set_wins(Team::First), 0);
    }

    #[test]
    fn win_with_two_point_lead() {
        let settings = Settings::default();
        let mut board = ScoreBoard::from_points(10, 9);
        let set_won = board.adjust(Team::First, Increment, &settings);
        assert_eq!(
            set_won,
            Some(SetWon {
                winner: Team::First,
                final_score: enum_map! { Team::First => 11, Team::Second => 9 },
            })
        );
        assert_eq!(board.all_points(), enum_map! { _ => 0 });
        assert_eq!(board.all_set_wins(), enum_map! { Team::First => 1, Team::Second => 0 });
    }

    #[test]
    fn no_win_at_deuce() {
        let settings = Settings::default();
        let mut board = ScoreBoard::from_points(10, 10);
        assert_eq!(board.adjust(Team::First, Increment, &settings), None);
        assert_eq!(board.all_points(), enum_map! { Team::First => 11, Team::Second => 10 });
        assert_eq!(board.all_set_wins(), enum_map! { _ => 0 });
    }

    #[test]
    fn win_rule_matches_definition() {
        for points_per_set in [1, 3, 11] {
            for win_by_points in [1, 2, 3] {
                let settings = Settings { points_per_set, win_by_points, ..Settings::default() };
                for own in 0..15 {
                    for other in 0..15 {
                        let board = ScoreBoard::from_points(own, other);
                        let (next, set_won) = board.adjusted(Team::First, Increment, &settings);
                        let v = own + 1;
                        let expect_win = v >= points_per_set && v >= other + win_by_points;
                        assert_eq!(set_won.is_some(), expect_win, "{own}:{other} {settings:?}");
                        if expect_win {
                            assert_eq!(next, ScoreBoard {
                                points: enum_map! { _ => 0 },
                                set_wins: enum_map! { Team::First => 1, Team::Second => 0 },
                            });
                        } else {
                            assert_eq!(next, ScoreBoard::from_points(v, other));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn set_wins_accumulate_past_best_of() {
        let settings = Settings {
            points_per_set: 1,
            win_by_points: 1,
            best_of_sets: 3,
            ..Settings::default()
        };
        let mut board = ScoreBoard::new();
        for _ in 0..5 {
            assert!(board.adjust(Team::Second, Increment, &settings).is_some());
        }
        assert_eq!(board.set_wins(Team::Second), 5);
        assert_eq!(board.set_wins(Team::First), 0);
    }

    #[test]
    fn second_team_mirrors_first() {
        let settings = Settings::default();
        let mut board = ScoreBoard::from_points(9, 10);
        assert!(board.adjust(Team::Second, Increment, &settings).is_some());
        assert_eq!(board.all_set_wins(), enum_map! { Team::First => 0, Team::Second => 1 });
    }
}
