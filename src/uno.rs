//! The one-card declaration rule.
//!
//! A player whose hand drops to a single card must declare it. Until they do,
//! the other player may challenge them, and once `grace_turns` turns have gone
//! by the declaration window closes; either way the player draws
//! [`UNO_PENALTY`] cards. Time is measured in [`Game::turn_number`] only.

use crate::action::Player;
use crate::card::UNO_PENALTY;
use crate::error::GameError;
use crate::game::Game;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Declaration {
    Idle,
    Armed { since: u64 },
    Declared,
}

#[derive(Clone, Debug)]
pub struct UnoWatch {
    grace_turns: u64,
    seats: [Declaration; 2],
}

impl UnoWatch {
    pub fn new(grace_turns: u64) -> Self {
        Self {
            grace_turns,
            seats: [Declaration::Idle; 2],
        }
    }

    /// Arms players who just reached one card and resets those who left it.
    pub fn observe(&mut self, game: &Game) {
        for player in Player::ALL {
            let seat = &mut self.seats[player.index()];
            if game.hand_size(player) != 1 {
                *seat = Declaration::Idle;
            } else if *seat == Declaration::Idle {
                *seat = Declaration::Armed {
                    since: game.turn_number(),
                };
            }
        }
    }

    /// True while `player` holds one card and has not declared it.
    pub fn is_armed(&self, player: Player) -> bool {
        matches!(self.seats[player.index()], Declaration::Armed { .. })
    }

    /// Returns whether there was an open declaration to make.
    pub fn declare(&mut self, player: Player) -> bool {
        let seat = &mut self.seats[player.index()];
        if matches!(seat, Declaration::Armed { .. }) {
            *seat = Declaration::Declared;
            true
        } else {
            false
        }
    }

    /// Catches `accused` holding one undeclared card. Returns whether the
    /// penalty was applied.
    pub fn challenge(&mut self, game: &mut Game, accused: Player) -> Result<bool, GameError> {
        if !self.is_armed(accused) {
            return Ok(false);
        }
        self.penalize(game, accused)?;
        Ok(true)
    }

    /// Penalizes every player whose declaration window has closed.
    pub fn expire(&mut self, game: &mut Game) -> Result<Vec<Player>, GameError> {
        let mut penalized = Vec::new();
        for player in Player::ALL {
            if let Declaration::Armed { since } = self.seats[player.index()] {
                if game.turn_number() >= since + self.grace_turns {
                    self.penalize(game, player)?;
                    penalized.push(player);
                }
            }
        }
        Ok(penalized)
    }

    fn penalize(&mut self, game: &mut Game, player: Player) -> Result<(), GameError> {
        self.seats[player.index()] = Declaration::Idle;
        game.draw_cards(player, UNO_PENALTY)?;
        Ok(())
    }
}

impl Default for UnoWatch {
    fn default() -> Self {
        Self::new(1)
    }
}
