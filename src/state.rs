use serde::{Deserialize, Serialize};

use crate::action::Player;
use crate::card::{Card, Color, HAND_SIZE};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(hand_size: usize) -> Result<Self, GameError> {
        if hand_size == 0 {
            return Err(GameError::InvalidConfiguration("hand size must be positive"));
        }
        Ok(Self { hand_size })
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { hand_size: HAND_SIZE }
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: Player },
}

/// What the active player is expected to do next.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    /// A wild card is on top and nobody has named its color.
    ChooseColor,
    AwaitingAction,
    /// The player drew this turn and may only play that card or pass.
    DrewCard,
    GameOver,
}

/// Game state snapshot for one seat. The other hand is only visible by size.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_player: Player,
    pub current_player: Player,
    pub top_discard: Card,
    pub effective_color: Color,
    pub pending_skip: bool,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,
    pub turn_number: u64,
}

impl GameStateView {
    pub fn is_my_turn(&self) -> bool {
        self.current_player == self.self_player
    }
}
