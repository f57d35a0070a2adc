use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::moves::{Move, Winner};

/// One of the two fixed player positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Player1,
    Player2,
}

impl Slot {
    pub const fn other(&self) -> Slot {
        match self {
            Slot::Player1 => Slot::Player2,
            Slot::Player2 => Slot::Player1,
        }
    }

    /// Human-facing label ("Player 1" / "Player 2").
    pub const fn label(&self) -> &'static str {
        match self {
            Slot::Player1 => "Player 1",
            Slot::Player2 => "Player 2",
        }
    }
}

/// Cumulative round wins per slot. Ties are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player1: u32,
    pub player2: u32,
}

impl Scores {
    pub fn credit(&mut self, winner: Winner) {
        match winner {
            Winner::Player1 => self.player1 += 1,
            Winner::Player2 => self.player2 += 1,
            Winner::Tie => {}
        }
    }
}

/// A resolved round, appended to the history and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player1: Move,
    pub player2: Move,
    pub winner: Winner,
}

/// The complete snapshot of the single game a store holds.
///
/// Field names match the persisted JSON document and the `/api/state` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Empty string means the slot is unassigned.
    pub player1: String,
    pub player2: String,
    pub scores: Scores,
    pub rounds: Vec<RoundResult>,
    /// Slot whose move is expected next.
    pub turn: Slot,
    /// Pending moves for the current round; at most player1's entry.
    pub choices: BTreeMap<Slot, Move>,
    #[serde(rename = "gameStarted")]
    pub game_started: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player1: String::new(),
            player2: String::new(),
            scores: Scores::default(),
            rounds: Vec::new(),
            turn: Slot::Player1,
            choices: BTreeMap::new(),
            game_started: false,
        }
    }
}

impl GameState {
    /// Stored name for `slot`.
    pub fn name_of(&self, slot: Slot) -> &str {
        match slot {
            Slot::Player1 => &self.player1,
            Slot::Player2 => &self.player2,
        }
    }

    /// Slots whose stored name equals `name`.
    ///
    /// Yields both slots when the two players registered under the same name.
    pub fn slots_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Slot> + 'a {
        [Slot::Player1, Slot::Player2]
            .into_iter()
            .filter(move |slot| self.name_of(*slot) == name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_state_serializes_to_persisted_layout() {
        let value = serde_json::to_value(GameState::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "player1": "",
                "player2": "",
                "scores": {"player1": 0, "player2": 0},
                "rounds": [],
                "turn": "player1",
                "choices": {},
                "gameStarted": false
            })
        );
    }

    #[test]
    fn pending_choice_and_history_round_trip_through_json() {
        let mut state = GameState {
            player1: "Alice".into(),
            player2: "Bob".into(),
            turn: Slot::Player2,
            game_started: true,
            ..GameState::default()
        };
        state.choices.insert(Slot::Player1, Move::Rock);
        state.rounds.push(RoundResult {
            player1: Move::Paper,
            player2: Move::Paper,
            winner: Winner::Tie,
        });

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["choices"], json!({"player1": "rock"}));
        assert_eq!(
            value["rounds"],
            json!([{"player1": "paper", "player2": "paper", "winner": "tie"}])
        );

        let back: GameState = serde_json::from_value(value).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn slots_named_reports_every_matching_slot() {
        let state = GameState {
            player1: "Sam".into(),
            player2: "Sam".into(),
            ..GameState::default()
        };
        let slots: Vec<_> = state.slots_named("Sam").collect();
        assert_eq!(slots, vec![Slot::Player1, Slot::Player2]);
        assert_eq!(state.slots_named("Kim").count(), 0);
    }

    #[test]
    fn scores_ignore_ties() {
        let mut scores = Scores::default();
        scores.credit(Winner::Player2);
        scores.credit(Winner::Tie);
        scores.credit(Winner::Player2);
        assert_eq!(scores, Scores { player1: 0, player2: 2 });
    }
}
