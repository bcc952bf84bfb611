use crate::action::{Action, Player};
use crate::card::{Card, Color, HAND_SIZE, Rank};
use crate::deck::Deck;
use crate::error::{GameError, InvalidAction};
use crate::rules;
use crate::state::{GameSettings, GameStateView, GameStatus, TurnPhase};
use crate::strategy;

const DEFAULT_SEED: u64 = 0x5EED_CA2D_5EED_CA2D;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub hand_size: usize,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, hand_size: HAND_SIZE }
    }

    /// Configuration with a seed taken from the thread RNG.
    pub fn random() -> Self {
        Self::new(rand::random())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder that enables deterministic deck injection for tests and simulations.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Deal this many cards per hand instead of [`HAND_SIZE`].
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    /// Use `deck` as the draw pile without shuffling. The last card is drawn
    /// first: the human is dealt first, then the opponent, then the opening
    /// discard is flipped.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-player turn engine: owns both hands, the deck, the active player, the
/// nominated wild color and the pending-skip flag.
#[derive(Clone, Debug)]
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    active: Player,
    hands: [Vec<Card>; 2],
    deck: Deck,
    active_card: Card,
    color_override: Option<Color>,
    nominator: Option<Player>,
    pending_skip: bool,
    drawn_this_turn: Option<usize>,
    turn_number: u64,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    /// Fresh game with a random shuffle.
    pub fn new_game() -> Result<Self, GameError> {
        Self::new(GameConfig::random())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player.index()]
    }

    pub fn human_hand(&self) -> Vec<Card> {
        self.hand(Player::Human).to_vec()
    }

    pub fn opponent_hand(&self) -> Vec<Card> {
        self.hand(Player::Opponent).to_vec()
    }

    pub fn hand_size(&self, player: Player) -> usize {
        self.hands[player.index()].len()
    }

    /// The active card.
    pub fn top_discard(&self) -> Card {
        self.active_card
    }

    pub fn effective_color(&self) -> Color {
        rules::effective_color(self.active_card, self.color_override)
    }

    pub fn color_override(&self) -> Option<Color> {
        self.color_override
    }

    /// The player whose decision is next: whoever owes a wild color, or the
    /// active player.
    pub fn player_to_act(&self) -> Player {
        match self.nominator {
            Some(player) if self.awaiting_color() => player,
            _ => self.active,
        }
    }

    pub fn pending_skip(&self) -> bool {
        self.pending_skip
    }

    /// A wild card is on top and no color has been nominated for it.
    pub fn awaiting_color(&self) -> bool {
        self.active_card.is_wild() && self.color_override.is_none()
    }

    /// Number of completed turn advances since the deal.
    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    pub fn draw_pile_len(&self) -> usize {
        self.deck.draw_len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.deck.discard_len()
    }

    /// Cards across both piles and both hands.
    pub fn card_count(&self) -> usize {
        self.deck.draw_len()
            + self.deck.discard_len()
            + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    pub fn phase(&self) -> TurnPhase {
        if self.is_game_over() {
            TurnPhase::GameOver
        } else if self.awaiting_color() {
            TurnPhase::ChooseColor
        } else if self.drawn_this_turn.is_some() {
            TurnPhase::DrewCard
        } else {
            TurnPhase::AwaitingAction
        }
    }

    pub fn state_view(&self, perspective: Player) -> GameStateView {
        GameStateView {
            settings: self.settings,
            phase: self.phase(),
            status: self.status,
            self_player: perspective,
            current_player: self.player_to_act(),
            top_discard: self.active_card,
            effective_color: self.effective_color(),
            pending_skip: self.pending_skip,
            draw_pile_count: self.deck.draw_len(),
            discard_pile_count: self.deck.discard_len(),
            hand: self.hand(perspective).to_vec(),
            opponent_hand_size: self.hand_size(perspective.other()),
            turn_number: self.turn_number,
        }
    }

    pub fn is_valid_play(&self, card: Card) -> bool {
        !self.is_game_over() && rules::is_valid_play(card, self.active_card, self.effective_color())
    }

    pub fn has_any_valid_play(&self, player: Player) -> bool {
        self.hand(player).iter().any(|card| self.is_valid_play(*card))
    }

    /// Plays `card` from `player`'s hand and resolves its effect.
    ///
    /// Cards that cost the other player a turn leave `pending_skip` set and
    /// keep `player` active; the caller finishes that turn with
    /// [`Game::advance_turn`]. Every other card passes the turn here.
    ///
    /// A penalty draw that runs the deck dry returns `DeckExhausted` after the
    /// play itself has been committed.
    pub fn play_card(&mut self, player: Player, card: Card) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        if player != self.active {
            return Err(GameError::NotPlayersTurn(player));
        }
        let index = self.hands[player.index()]
            .iter()
            .position(|held| *held == card)
            .ok_or(GameError::CardNotInHand(card))?;
        if !self.is_valid_play(card) {
            return Err(GameError::IllegalPlay(card));
        }
        self.play_at(player, index)
    }

    /// Moves one card from the deck into `player`'s hand. Never ends the turn.
    pub fn draw_card(&mut self, player: Player) -> Result<Card, GameError> {
        self.ensure_ongoing()?;
        let card = self.deck.draw_one()?;
        self.hands[player.index()].push(card);
        Ok(card)
    }

    /// Draws `count` cards into `player`'s hand. Cards drawn before the deck
    /// runs dry stay in the hand even when this returns `DeckExhausted`.
    pub fn draw_cards(&mut self, player: Player, count: usize) -> Result<Vec<Card>, GameError> {
        self.ensure_ongoing()?;
        let hand = &mut self.hands[player.index()];
        let start = hand.len();
        self.deck.draw_many(count, hand)?;
        Ok(hand[start..].to_vec())
    }

    pub fn set_wild_color(&mut self, color: Color) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        if color.is_wild() {
            return Err(GameError::InvalidColorChoice);
        }
        self.color_override = Some(color);
        Ok(())
    }

    /// Passes the turn, or consumes `pending_skip` and keeps the same player active.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        self.end_turn();
        Ok(())
    }

    pub fn choose_opponent_play(&self) -> Option<Card> {
        if self.is_game_over() {
            return None;
        }
        strategy::choose_play(
            self.hand(Player::Opponent),
            self.active_card,
            self.effective_color(),
        )
    }

    pub fn choose_opponent_color(&self) -> Color {
        strategy::choose_color(self.hand(Player::Opponent))
    }

    pub fn legal_actions(&self, player: Player) -> Result<Vec<Action>, GameError> {
        if self.is_game_over() {
            return Ok(Vec::new());
        }
        if player != self.player_to_act() {
            return Err(GameError::NotPlayersTurn(player));
        }
        if self.awaiting_color() {
            return Ok(Color::SUITS.into_iter().map(Action::ChooseColor).collect());
        }
        let hand = self.hand(player);
        let mut actions = Vec::new();
        match self.drawn_this_turn {
            Some(index) => {
                if let Some(card) = hand.get(index) {
                    if self.is_valid_play(*card) {
                        push_plays(&mut actions, index, *card);
                    }
                }
                actions.push(Action::Pass);
            }
            None => {
                for (index, card) in hand.iter().enumerate() {
                    if self.is_valid_play(*card) {
                        push_plays(&mut actions, index, *card);
                    }
                }
                if self.deck.can_draw() {
                    actions.push(Action::Draw);
                } else {
                    actions.push(Action::Pass);
                }
            }
        }
        Ok(actions)
    }

    /// Performs one turn decision. A play that costs the other player a turn
    /// also finishes the current turn, so the same player acts next.
    pub fn apply_action(&mut self, player: Player, action: Action) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        if player != self.player_to_act() {
            return Err(GameError::NotPlayersTurn(player));
        }
        match action {
            Action::ChooseColor(color) => {
                if !self.awaiting_color() {
                    return Err(InvalidAction::NoColorPending.into());
                }
                self.set_wild_color(color)
            }
            _ if self.awaiting_color() => Err(InvalidAction::ColorPending.into()),
            Action::Play {
                hand_index,
                nominate,
            } => {
                let card = *self.hands[player.index()]
                    .get(hand_index)
                    .ok_or(InvalidAction::HandIndex(hand_index))?;
                if matches!(self.drawn_this_turn, Some(drawn) if drawn != hand_index) {
                    return Err(InvalidAction::MustPlayDrawnCard.into());
                }
                if !self.is_valid_play(card) {
                    return Err(GameError::IllegalPlay(card));
                }
                let nominated = match (card.is_wild(), nominate) {
                    (false, _) => None,
                    (true, None) => return Err(InvalidAction::MissingColor.into()),
                    (true, Some(color)) if color.is_wild() => {
                        return Err(GameError::InvalidColorChoice);
                    }
                    (true, Some(color)) => Some(color),
                };
                let outcome = self.play_at(player, hand_index);
                if self.is_game_over() {
                    return outcome;
                }
                if nominated.is_some() {
                    self.color_override = nominated;
                }
                if self.pending_skip {
                    self.end_turn();
                }
                outcome
            }
            Action::Draw => {
                if self.drawn_this_turn.is_some() {
                    return Err(InvalidAction::AlreadyDrew.into());
                }
                self.draw_card(player)?;
                self.drawn_this_turn = Some(self.hand_size(player) - 1);
                Ok(())
            }
            Action::Pass => {
                if self.drawn_this_turn.is_none() && self.deck.can_draw() {
                    return Err(InvalidAction::MustPlayOrDraw.into());
                }
                self.end_turn();
                Ok(())
            }
        }
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.hand_size)?;
        let mut deck = match deck {
            Some(cards) => {
                if cards.len() < settings.hand_size * 2 + 1 {
                    return Err(GameError::InvalidConfiguration(
                        "deck does not contain enough cards to deal",
                    ));
                }
                Deck::from_cards(cards, config.seed)
            }
            None => Deck::new_shuffled(config.seed),
        };

        let mut hands: [Vec<Card>; 2] = [
            Vec::with_capacity(settings.hand_size),
            Vec::with_capacity(settings.hand_size),
        ];
        for hand in hands.iter_mut() {
            deck.draw_many(settings.hand_size, hand)?;
        }
        let opening = deck.draw_one()?;
        deck.discard(opening);

        let mut game = Game {
            settings,
            status: GameStatus::Ongoing,
            active: Player::Human,
            hands,
            deck,
            active_card: opening,
            color_override: None,
            nominator: None,
            pending_skip: false,
            drawn_this_turn: None,
            turn_number: 0,
        };
        game.resolve_opening()?;
        Ok(game)
    }

    /// The opening card belongs to nobody: its skip and its penalty both land
    /// on the human side, and the human always starts.
    fn resolve_opening(&mut self) -> Result<(), GameError> {
        if self.active_card.is_wild() {
            self.nominator = Some(Player::Human);
        }
        match self.active_card.rank() {
            Rank::Skip | Rank::Reverse => self.pending_skip = true,
            rank @ (Rank::DrawTwo | Rank::WildDrawFour) => {
                self.deck
                    .draw_many(rank.penalty(), &mut self.hands[Player::Human.index()])?;
            }
            Rank::Number(_) | Rank::Wild => {}
        }
        Ok(())
    }

    fn play_at(&mut self, player: Player, index: usize) -> Result<(), GameError> {
        let card = self.hands[player.index()].remove(index);
        self.deck.discard(card);
        self.active_card = card;
        // Every play drops the previous nomination, wilds included: a new wild
        // is never matched against the color named for the one beneath it.
        self.color_override = None;
        self.nominator = card.is_wild().then_some(player);
        if self.hands[player.index()].is_empty() {
            self.status = GameStatus::Finished { winner: player };
            return Ok(());
        }

        let rank = card.rank();
        let penalty = match rank.penalty() {
            0 => Ok(()),
            count => self
                .deck
                .draw_many(count, &mut self.hands[player.other().index()]),
        };
        if rank.skips_next() {
            self.pending_skip = true;
            self.drawn_this_turn = None;
        } else {
            self.end_turn();
        }
        penalty
    }

    fn end_turn(&mut self) {
        if self.pending_skip {
            self.pending_skip = false;
        } else {
            self.active = self.active.other();
        }
        self.drawn_this_turn = None;
        self.turn_number += 1;
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(())
    }
}

fn push_plays(actions: &mut Vec<Action>, hand_index: usize, card: Card) {
    if card.is_wild() {
        for color in Color::SUITS {
            actions.push(Action::Play {
                hand_index,
                nominate: Some(color),
            });
        }
    } else {
        actions.push(Action::Play {
            hand_index,
            nominate: None,
        });
    }
}
