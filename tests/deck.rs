use std::collections::HashMap;

use unobot::card::{DECK_SIZE, full_deck};
use unobot::{Card, Color, Deck, GameError};

fn tally(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_default() += 1;
    }
    counts
}

#[test]
fn reshuffle_keeps_the_top_discard() -> Result<(), GameError> {
    let discards = vec![
        Card::number(Color::Red, 1),
        Card::skip(Color::Blue),
        Card::wild(),
        Card::number(Color::Green, 4),
    ];
    let mut deck = Deck::from_piles(Vec::new(), discards.clone(), 11);
    let drawn = deck.draw_one()?;

    assert_eq!(deck.discard_len(), 1);
    assert_eq!(deck.peek_top()?, Card::number(Color::Green, 4));
    assert_eq!(deck.draw_len(), 2);
    assert!(discards[..3].contains(&drawn));

    let mut all = vec![drawn];
    all.extend(deck.discard_pile().iter().copied());
    while deck.draw_len() > 0 {
        all.push(deck.draw_one()?);
    }
    assert_eq!(tally(&all), tally(&discards));
    Ok(())
}

#[test]
fn exhaustion_depends_on_the_discard_pile() -> Result<(), GameError> {
    let last = Card::number(Color::Yellow, 9);
    let top = Card::number(Color::Red, 2);
    let mut deck = Deck::from_piles(vec![last], vec![top], 3);
    assert!(deck.can_draw());
    assert_eq!(deck.draw_one()?, last);
    assert!(!deck.can_draw());
    assert_eq!(deck.draw_one(), Err(GameError::DeckExhausted));
    assert_eq!(deck.discard_len(), 1);
    assert_eq!(deck.peek_top()?, top);
    Ok(())
}

#[test]
fn partial_draws_are_committed() {
    let spare = Card::draw_two(Color::Green);
    let top = Card::number(Color::Blue, 0);
    let mut deck = Deck::from_piles(vec![spare], vec![top], 5);
    let mut hand = vec![Card::wild()];
    assert_eq!(deck.draw_many(3, &mut hand), Err(GameError::DeckExhausted));
    assert_eq!(hand, vec![Card::wild(), spare]);
    assert_eq!(deck.draw_len(), 0);
}

#[test]
fn draining_a_full_deck_conserves_every_card() -> Result<(), GameError> {
    let mut deck = Deck::new_shuffled(99);
    let mut hand = Vec::new();
    deck.draw_many(DECK_SIZE - 1, &mut hand)?;
    let last = deck.draw_one()?;
    deck.discard(last);
    assert_eq!(deck.peek_top()?, last);
    assert_eq!(deck.draw_one(), Err(GameError::DeckExhausted));

    hand.push(last);
    assert_eq!(tally(&hand), tally(&full_deck()));
    Ok(())
}

#[test]
fn recycles_discards_over_many_rounds() -> Result<(), GameError> {
    let mut deck = Deck::new_shuffled(1);
    let opening = deck.draw_one()?;
    deck.discard(opening);
    for _ in 0..(DECK_SIZE * 3) {
        let card = deck.draw_one()?;
        deck.discard(card);
        assert_eq!(deck.draw_len() + deck.discard_len(), DECK_SIZE);
        assert_eq!(deck.peek_top()?, card);
    }
    Ok(())
}
