use crate::action::Action;
use crate::state::GameStateView;

pub use crate::bots::{HeuristicBot, HumanBot, RandomBot};

/// Interface for anything that can take a seat at the table.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;

    /// Asked once the bot is down to a single card.
    fn declare_uno(&mut self, _state: &GameStateView) -> bool {
        true
    }

    /// Asked when the other player holds one undeclared card.
    fn challenge(&mut self, _state: &GameStateView) -> bool {
        true
    }
}
