//! Deterministic policy of the automated player.
//!
//! Card choice: the first card in hand order that is a legal play.
//! Color choice: the most common non-wild color in hand, ties resolved in
//! `Red, Blue, Green, Yellow` order, `Red` when the hand holds no colored card.

use crate::card::{Card, Color};
use crate::rules::is_valid_play;

/// Index of the first playable card in `hand`.
pub fn choose_play_index(hand: &[Card], active: Card, effective_color: Color) -> Option<usize> {
    hand.iter()
        .position(|card| is_valid_play(*card, active, effective_color))
}

/// First playable card in `hand`, or `None` when the player must draw.
pub fn choose_play(hand: &[Card], active: Card, effective_color: Color) -> Option<Card> {
    choose_play_index(hand, active, effective_color).map(|index| hand[index])
}

pub fn choose_color(hand: &[Card]) -> Color {
    let mut counts = [0usize; 4];
    for card in hand {
        if let Some(index) = card.color().suit_index() {
            counts[index] += 1;
        }
    }
    let mut best = 0;
    for index in 1..counts.len() {
        if counts[index] > counts[best] {
            best = index;
        }
    }
    if counts[best] == 0 {
        Color::Red
    } else {
        Color::SUITS[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_playable_in_hand_order() {
        let hand = vec![
            Card::number(Color::Blue, 1),
            Card::number(Color::Red, 9),
            Card::wild(),
        ];
        let active = Card::number(Color::Red, 5);
        assert_eq!(choose_play(&hand, active, Color::Red), Some(Card::number(Color::Red, 9)));
        assert_eq!(choose_play_index(&hand, active, Color::Red), Some(1));
    }

    #[test]
    fn nothing_playable() {
        let hand = vec![Card::number(Color::Red, 7)];
        let active = Card::number(Color::Blue, 5);
        assert_eq!(choose_play(&hand, active, Color::Blue), None);
    }

    #[test]
    fn color_majority_and_ties() {
        let hand = vec![
            Card::number(Color::Yellow, 1),
            Card::number(Color::Yellow, 2),
            Card::number(Color::Green, 3),
        ];
        assert_eq!(choose_color(&hand), Color::Yellow);
        let tied = vec![Card::number(Color::Green, 1), Card::number(Color::Blue, 2)];
        assert_eq!(choose_color(&tied), Color::Blue);
        assert_eq!(choose_color(&[Card::wild(), Card::wild_draw_four()]), Color::Red);
        assert_eq!(choose_color(&[]), Color::Red);
    }
}
