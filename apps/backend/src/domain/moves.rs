use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// A single player's choice within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move this one defeats.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(DomainError::invalid_input(
                "Invalid choice. Choose 'rock', 'paper', or 'scissors'.",
            )),
        }
    }
}

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}

impl Winner {
    /// Same outcome seen with the slots swapped.
    pub const fn swapped(&self) -> Winner {
        match self {
            Winner::Player1 => Winner::Player2,
            Winner::Player2 => Winner::Player1,
            Winner::Tie => Winner::Tie,
        }
    }
}

/// Decide a round from player1's move `a` and player2's move `b`.
pub fn determine_winner(a: Move, b: Move) -> Winner {
    if a == b {
        Winner::Tie
    } else if a.beats() == b {
        Winner::Player1
    } else {
        Winner::Player2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_lowercase_names() {
        assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("paper".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("scissors".parse::<Move>().unwrap(), Move::Scissors);

        for bad in ["Rock", "lizard", "", " rock"] {
            let err = bad.parse::<Move>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{bad:?}");
        }
    }

    #[test]
    fn known_outcomes() {
        assert_eq!(determine_winner(Move::Rock, Move::Scissors), Winner::Player1);
        assert_eq!(determine_winner(Move::Scissors, Move::Rock), Winner::Player2);
        assert_eq!(determine_winner(Move::Paper, Move::Rock), Winner::Player1);
        assert_eq!(determine_winner(Move::Scissors, Move::Paper), Winner::Player1);
        assert_eq!(determine_winner(Move::Paper, Move::Paper), Winner::Tie);
    }

    #[test]
    fn each_move_beats_exactly_one_other() {
        for a in Move::ALL {
            let wins = Move::ALL
                .iter()
                .filter(|b| determine_winner(a, **b) == Winner::Player1)
                .count();
            assert_eq!(wins, 1, "{a} should beat exactly one move");
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"tie\"");
        assert_eq!(
            serde_json::from_str::<Winner>("\"player2\"").unwrap(),
            Winner::Player2
        );
    }
}
