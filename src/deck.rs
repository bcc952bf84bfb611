use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::GameError;

/// Draw pile and discard pile. The last element of each vector is its top.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// Full 108-card deck, shuffled with the given seed.
    pub fn new_shuffled(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut draw_pile = full_deck();
        draw_pile.shuffle(&mut rng);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Deck with an exact draw order; the last card is drawn first.
    pub fn from_cards(draw_pile: Vec<Card>, seed: u64) -> Self {
        Self::from_piles(draw_pile, Vec::new(), seed)
    }

    /// Deck with both piles given explicitly. Used to stage reshuffle situations.
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>, seed: u64) -> Self {
        Self {
            draw_pile,
            discard_pile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Removes the top of the draw pile, recycling the discard pile first when
    /// the draw pile is empty.
    pub fn draw_one(&mut self) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            self.reshuffle()?;
        }
        self.draw_pile.pop().ok_or(GameError::DeckExhausted)
    }

    /// Draws `count` cards one at a time into `into`. Cards drawn before an
    /// exhaustion stay in `into`.
    pub fn draw_many(&mut self, count: usize, into: &mut Vec<Card>) -> Result<(), GameError> {
        for _ in 0..count {
            into.push(self.draw_one()?);
        }
        Ok(())
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn peek_top(&self) -> Result<Card, GameError> {
        self.discard_pile.last().copied().ok_or(GameError::EmptyDiscard)
    }

    /// Whether a draw could succeed right now, counting a possible reshuffle.
    pub fn can_draw(&self) -> bool {
        !self.draw_pile.is_empty() || self.discard_pile.len() > 1
    }

    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Sets the top discard aside, shuffles the rest into the draw pile and
    /// puts the set-aside card back as the only discard.
    fn reshuffle(&mut self) -> Result<(), GameError> {
        if self.discard_pile.len() <= 1 {
            return Err(GameError::DeckExhausted);
        }
        let top = self.discard_pile.pop().ok_or(GameError::EmptyDiscard)?;
        self.discard_pile.shuffle(&mut self.rng);
        self.draw_pile.append(&mut self.discard_pile);
        self.discard_pile.push(top);
        Ok(())
    }
}
