//! Matching rule shared by the engine and every player.

use crate::card::{Card, Color};

/// A card may be played when it is wild, matches the effective color, or
/// matches the rank of the active card.
#[inline]
pub fn is_valid_play(card: Card, active: Card, effective_color: Color) -> bool {
    card.is_wild() || card.color() == effective_color || card.rank() == active.rank()
}

/// Effective color for matching: the nominated color when present, else the
/// active card's own color.
#[inline]
pub fn effective_color(active: Card, nominated: Option<Color>) -> Color {
    nominated.unwrap_or(active.color())
}
