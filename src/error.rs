use thiserror::Error;

use crate::action::Player;
use crate::card::{Card, Color, Rank};

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no cards left to draw in the draw pile or the discard pile")]
    DeckExhausted,
    #[error("discard pile is empty")]
    EmptyDiscard,
    #[error("no card has color {color} and rank {rank}")]
    InvalidCard { color: Color, rank: Rank },
    #[error("{0} cannot be played on the current card")]
    IllegalPlay(Card),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("wild is not a valid color choice")]
    InvalidColorChoice,
    #[error("not {0}'s turn")]
    NotPlayersTurn(Player),
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of invalid turn actions submitted by a player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("a wild card needs a color nomination")]
    MissingColor,
    #[error("only the card drawn this turn may be played")]
    MustPlayDrawnCard,
    #[error("player already drew this turn")]
    AlreadyDrew,
    #[error("player must play or draw before passing")]
    MustPlayOrDraw,
    #[error("no wild color is waiting to be chosen")]
    NoColorPending,
    #[error("a wild color must be chosen first")]
    ColorPending,
}
