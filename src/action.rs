use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Color;

/// One of the two seats at the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Human, Player::Opponent];

    /// The other seat.
    #[inline]
    pub fn other(&self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Player::Human => 0,
            Player::Opponent => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => f.write_str("human"),
            Player::Opponent => f.write_str("opponent"),
        }
    }
}

/// Decision available to a player during their turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `hand_index`; wild cards carry the nominated color.
    Play {
        hand_index: usize,
        nominate: Option<Color>,
    },
    /// Take one card from the draw pile.
    Draw,
    /// End the turn after drawing, or when nothing can be drawn.
    Pass,
    /// Nominate the color for a wild card that nobody has named yet.
    ChooseColor(Color),
}

impl Action {
    /// Returns the hand index if the action is a play.
    pub fn hand_index(&self) -> Option<usize> {
        match self {
            Action::Play { hand_index, .. } => Some(*hand_index),
            _ => None,
        }
    }
}
