use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const HAND_SIZE: usize = 5;
pub const DECK_SIZE: usize = 108;
pub const COPIES_PER_RANK: usize = 2;
pub const WILD_COPIES: usize = 4;
pub const UNO_PENALTY: usize = 2;

/// Card color. `Wild` only ever marks the two wild ranks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// Matchable colors in tie-break priority order.
    pub const SUITS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Color::Wild)
    }

    /// Position within [`Color::SUITS`]; `None` for `Wild`.
    pub fn suit_index(&self) -> Option<usize> {
        match self {
            Color::Red => Some(0),
            Color::Blue => Some(1),
            Color::Green => Some(2),
            Color::Yellow => Some(3),
            Color::Wild => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Wild => "WILD",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        };
        f.write_str(name)
    }
}

/// Face value of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub const ACTIONS: [Rank; 3] = [Rank::Skip, Rank::Reverse, Rank::DrawTwo];

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Cards the other player must draw when this rank resolves.
    pub fn penalty(&self) -> usize {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }

    /// Whether resolving this rank costs the other player their next turn.
    pub fn skips_next(&self) -> bool {
        matches!(
            self,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo | Rank::WildDrawFour
        )
    }

    fn code(&self) -> &'static str {
        match self {
            Rank::Number(0) => "ZERO",
            Rank::Number(1) => "ONE",
            Rank::Number(2) => "TWO",
            Rank::Number(3) => "THREE",
            Rank::Number(4) => "FOUR",
            Rank::Number(5) => "FIVE",
            Rank::Number(6) => "SIX",
            Rank::Number(7) => "SEVEN",
            Rank::Number(8) => "EIGHT",
            Rank::Number(9) => "NINE",
            Rank::Number(_) => "NUMBER",
            Rank::Skip => "SKIP",
            Rank::Reverse => "REVERSE",
            Rank::DrawTwo => "DRAW_TWO",
            Rank::Wild => "WILD",
            Rank::WildDrawFour => "WILD_DRAW_FOUR",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{n}"),
            Rank::Skip => f.write_str("Skip"),
            Rank::Reverse => f.write_str("Reverse"),
            Rank::DrawTwo => f.write_str("+2"),
            Rank::Wild => f.write_str("Wild"),
            Rank::WildDrawFour => f.write_str("+4"),
        }
    }
}

/// Immutable card value. Wild ranks always carry `Color::Wild` and no other
/// rank does; every constructor and deserialization checks this.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    color: Color,
    rank: Rank,
}

#[derive(Deserialize)]
struct RawCard {
    color: Color,
    rank: Rank,
}

impl TryFrom<RawCard> for Card {
    type Error = GameError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.color, raw.rank)
    }
}

impl Card {
    /// Checked constructor for arbitrary color/rank pairs.
    pub fn new(color: Color, rank: Rank) -> Result<Self, GameError> {
        let valid = match rank {
            Rank::Number(value) => value <= 9 && !color.is_wild(),
            Rank::Wild | Rank::WildDrawFour => color.is_wild(),
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => !color.is_wild(),
        };
        if !valid {
            return Err(GameError::InvalidCard { color, rank });
        }
        Ok(Self { color, rank })
    }

    /// Numbered card.
    ///
    /// # Panics
    ///
    /// Panics if `value` is above 9 or `color` is `Wild`.
    pub fn number(color: Color, value: u8) -> Self {
        assert!(value <= 9, "card numbers run from 0 to 9, got {value}");
        assert!(!color.is_wild(), "numbered cards need a suit color");
        Self { color, rank: Rank::Number(value) }
    }

    pub fn skip(color: Color) -> Self {
        Self::action(color, Rank::Skip)
    }

    pub fn reverse(color: Color) -> Self {
        Self::action(color, Rank::Reverse)
    }

    pub fn draw_two(color: Color) -> Self {
        Self::action(color, Rank::DrawTwo)
    }

    /// Skip, Reverse or DrawTwo.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Wild`.
    fn action(color: Color, rank: Rank) -> Self {
        assert!(!color.is_wild(), "{rank} cards need a suit color");
        Self { color, rank }
    }

    pub fn wild() -> Self {
        Self { color: Color::Wild, rank: Rank::Wild }
    }

    pub fn wild_draw_four() -> Self {
        Self { color: Color::Wild, rank: Rank::WildDrawFour }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.color.is_wild()
    }

    /// Stable identity for front ends, e.g. `RED_FIVE` or `WILD_DRAW_FOUR`.
    pub fn code(&self) -> String {
        if self.is_wild() {
            return self.rank.code().to_string();
        }
        format!("{}_{}", self.color.code(), self.rank.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            match self.rank {
                Rank::WildDrawFour => f.write_str("Wild +4"),
                _ => f.write_str("Wild"),
            }
        } else {
            write!(f, "{} {}", self.color, self.rank)
        }
    }
}

/// Builds the full 108-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::SUITS {
        deck.push(Card::number(color, 0));
        for value in 1..=9 {
            for _ in 0..COPIES_PER_RANK {
                deck.push(Card::number(color, value));
            }
        }
        for rank in Rank::ACTIONS {
            for _ in 0..COPIES_PER_RANK {
                deck.push(Card::action(color, rank));
            }
        }
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_composition() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let count = |card: Card| deck.iter().filter(|c| **c == card).count();
        for color in Color::SUITS {
            assert_eq!(count(Card::number(color, 0)), 1);
            assert_eq!(count(Card::number(color, 7)), 2);
            assert_eq!(count(Card::skip(color)), 2);
            assert_eq!(count(Card::reverse(color)), 2);
            assert_eq!(count(Card::draw_two(color)), 2);
        }
        assert_eq!(count(Card::wild()), 4);
        assert_eq!(count(Card::wild_draw_four()), 4);
    }

    #[test]
    fn wild_ranks_carry_wild_color() {
        for card in full_deck() {
            assert_eq!(card.rank().is_wild(), card.color().is_wild(), "{card}");
        }
    }

    #[test]
    fn textual_identity() {
        assert_eq!(Card::number(Color::Red, 5).code(), "RED_FIVE");
        assert_eq!(Card::wild_draw_four().code(), "WILD_DRAW_FOUR");
        assert_eq!(Card::wild().code(), "WILD");
        assert_eq!(Card::draw_two(Color::Blue).to_string(), "Blue +2");
        assert_eq!(Card::wild_draw_four().to_string(), "Wild +4");
    }

    #[test]
    fn checked_constructor_rejects_mismatched_colors() {
        assert_eq!(Card::new(Color::Red, Rank::Number(5)), Ok(Card::number(Color::Red, 5)));
        assert_eq!(Card::new(Color::Wild, Rank::WildDrawFour), Ok(Card::wild_draw_four()));
        for (color, rank) in [
            (Color::Wild, Rank::Number(3)),
            (Color::Red, Rank::Number(10)),
            (Color::Red, Rank::Wild),
            (Color::Blue, Rank::WildDrawFour),
            (Color::Wild, Rank::Skip),
        ] {
            assert_eq!(Card::new(color, rank), Err(GameError::InvalidCard { color, rank }));
        }
    }

    #[test]
    fn deserialization_goes_through_the_check() {
        let forged = RawCard { color: Color::Red, rank: Rank::Wild };
        assert!(Card::try_from(forged).is_err());
        let fine = RawCard { color: Color::Green, rank: Rank::DrawTwo };
        assert_eq!(Card::try_from(fine), Ok(Card::draw_two(Color::Green)));
    }

    #[test]
    #[should_panic]
    fn wild_numbered_card_panics() {
        let _ = Card::number(Color::Wild, 3);
    }

    #[test]
    #[should_panic]
    fn out_of_range_number_panics() {
        let _ = Card::number(Color::Yellow, 10);
    }
}
