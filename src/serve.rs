use crate::player::{GameType, PlayerRegistry, Team};


// Who serves and receives first. Purely informational: the score engine never reads it.
//
// Selections are not validated against each other. Changing the serving team does not clear
// a previously chosen server, so a stale choice from the other team may remain selected.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ServeAssignment {
    pub first_serve_team: Option<Team>,
    pub first_serve_player: Option<String>,
    pub first_receive_player: Option<String>,
}

impl ServeAssignment {
    pub fn new() -> Self { Self::default() }

    pub fn set_first_serve_team(&mut self, team: Option<Team>) { self.first_serve_team = team; }
    pub fn set_first_serve_player(&mut self, player: Option<String>) {
        self.first_serve_player = player;
    }
    pub fn set_first_receive_player(&mut self, player: Option<String>) {
        self.first_receive_player = player;
    }

    // In doubles the server comes from the chosen serving pair. Until a pair is chosen the
    // second pair is offered.
    pub fn serve_candidates<'a>(&self, players: &'a PlayerRegistry) -> Vec<&'a str> {
        match players.game_type() {
            GameType::Single => vec![players.names()[0].as_str(), players.names()[1].as_str()],
            GameType::Double => {
                let team = match self.first_serve_team {
                    Some(Team::First) => Team::First,
                    Some(Team::Second) | None => Team::Second,
                };
                players.pair(team).to_vec()
            }
        }
    }

    // Singles offer no receiver choice: it is whoever does not serve.
    pub fn receive_candidates<'a>(&self, players: &'a PlayerRegistry) -> Vec<&'a str> {
        match players.game_type() {
            GameType::Single => vec![],
            GameType::Double => {
                let team = match self.first_serve_team {
                    Some(Team::First) => Team::Second,
                    Some(Team::Second) | None => Team::First,
                };
                players.pair(team).to_vec()
            }
        }
    }
}
