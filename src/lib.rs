//! Two-player UNO game engine: deck lifecycle, turn and effect state machine,
//! and the deterministic automated opponent.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod rules;
pub mod session;
pub mod state;
pub mod strategy;
pub mod uno;
pub mod visualize;

pub use crate::action::{Action, Player};
pub use crate::bot::{Bot, HeuristicBot, HumanBot, RandomBot};
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::card::{Card, Color, Rank};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::session::{Session, StepReport};
pub use crate::state::{GameSettings, GameStateView, GameStatus, TurnPhase};
pub use crate::uno::UnoWatch;
pub use crate::visualize::{VisualOptions, describe_action, render_state};
