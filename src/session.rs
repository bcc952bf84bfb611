//! Match runner that seats two bots at a [`Game`] and funnels every mutating
//! call through [`Session::step`].

use crate::action::{Action, Player};
use crate::bot::Bot;
use crate::error::GameError;
use crate::game::Game;
use crate::uno::UnoWatch;

/// What happened during one [`Session::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub player: Player,
    pub action: Action,
    pub declared: bool,
    pub penalized: Vec<Player>,
    pub winner: Option<Player>,
}

pub struct Session {
    game: Game,
    watch: UnoWatch,
    seats: [Box<dyn Bot>; 2],
}

impl Session {
    pub fn new(game: Game, human: Box<dyn Bot>, opponent: Box<dyn Bot>, grace_turns: u64) -> Self {
        Self {
            game,
            watch: UnoWatch::new(grace_turns),
            seats: [human, opponent],
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn watch(&self) -> &UnoWatch {
        &self.watch
    }

    /// Lets the active player take one action, then settles one-card declarations.
    pub fn step(&mut self) -> Result<StepReport, GameError> {
        if self.game.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let player = self.game.player_to_act();
        let state = self.game.state_view(player);
        let legal = self.game.legal_actions(player)?;
        let action = self.seats[player.index()].select_action(&state, &legal);
        log::debug!("{player} chose {action:?} on {}", state.top_discard);

        match self.game.apply_action(player, action) {
            Ok(()) => {}
            // The play itself went through; only the penalty draw ran short.
            Err(GameError::DeckExhausted) => log::warn!("deck ran out during a penalty draw"),
            Err(err) => return Err(err),
        }

        let mut report = StepReport {
            player,
            action,
            declared: false,
            penalized: Vec::new(),
            winner: self.game.winner(),
        };
        if let Some(winner) = report.winner {
            log::info!("{winner} wins after {} turns", self.game.turn_number());
            return Ok(report);
        }

        self.watch.observe(&self.game);
        if self.watch.is_armed(player) {
            let view = self.game.state_view(player);
            if self.seats[player.index()].declare_uno(&view) {
                report.declared = self.watch.declare(player);
                log::info!("{player} declares UNO");
            }
        }
        let rival = player.other();
        if self.watch.is_armed(player) {
            let view = self.game.state_view(rival);
            if self.seats[rival.index()].challenge(&view) {
                if self.tolerate_exhaustion(|session| session.watch.challenge(&mut session.game, player))? {
                    log::info!("{rival} caught {player} holding one undeclared card");
                    report.penalized.push(player);
                }
            }
        }
        let expired = self.tolerate_exhaustion(|session| session.watch.expire(&mut session.game))?;
        for late in expired {
            log::info!("{late} missed the declaration window");
            report.penalized.push(late);
        }
        Ok(report)
    }

    /// Steps until the game ends or `max_steps` is reached.
    pub fn run(&mut self, max_steps: usize) -> Result<Option<Player>, GameError> {
        for _ in 0..max_steps {
            if self.game.is_game_over() {
                break;
            }
            self.step()?;
        }
        Ok(self.game.winner())
    }

    fn tolerate_exhaustion<T: Default>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        match f(self) {
            Err(GameError::DeckExhausted) => {
                log::warn!("deck ran out during a declaration penalty");
                Ok(T::default())
            }
            other => other,
        }
    }
}
