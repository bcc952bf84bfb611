use unobot::card::{self, UNO_PENALTY};
use unobot::{Card, Color, Game, GameBuilder, GameError, Player, UnoWatch};

use Color::{Blue, Green, Red};

fn stacked(sequence: &[Card]) -> Vec<Card> {
    let mut rest = card::full_deck();
    for card in sequence {
        let pos = rest
            .iter()
            .position(|c| c == card)
            .expect("card still available in the deck");
        rest.remove(pos);
    }
    rest.extend(sequence.iter().rev().copied());
    rest
}

/// Two-card hands; the human can get down to one card on the first play.
fn two_card_game() -> Result<Game, GameError> {
    GameBuilder::new()
        .with_hand_size(2)
        .with_deck(stacked(&[
            Card::number(Red, 1),
            Card::number(Green, 8),
            Card::number(Blue, 1),
            Card::number(Blue, 2),
            Card::number(Red, 5),
        ]))
        .build()
}

#[test]
fn arms_only_at_one_card() -> Result<(), GameError> {
    let mut game = two_card_game()?;
    let mut watch = UnoWatch::default();
    watch.observe(&game);
    assert!(!watch.is_armed(Player::Human));
    assert!(!watch.declare(Player::Human));

    game.play_card(Player::Human, Card::number(Red, 1))?;
    watch.observe(&game);
    assert!(watch.is_armed(Player::Human));
    assert!(!watch.is_armed(Player::Opponent));
    Ok(())
}

#[test]
fn challenge_penalizes_an_undeclared_card() -> Result<(), GameError> {
    let mut game = two_card_game()?;
    let mut watch = UnoWatch::default();
    game.play_card(Player::Human, Card::number(Red, 1))?;
    watch.observe(&game);

    assert!(watch.challenge(&mut game, Player::Human)?);
    assert_eq!(game.hand_size(Player::Human), 1 + UNO_PENALTY);
    assert!(!watch.is_armed(Player::Human));
    assert!(!watch.challenge(&mut game, Player::Human)?);
    assert_eq!(game.card_count(), card::DECK_SIZE);
    Ok(())
}

#[test]
fn declaring_blocks_challenges_and_expiry() -> Result<(), GameError> {
    let mut game = two_card_game()?;
    let mut watch = UnoWatch::default();
    game.play_card(Player::Human, Card::number(Red, 1))?;
    watch.observe(&game);
    assert!(watch.declare(Player::Human));

    assert!(!watch.challenge(&mut game, Player::Human)?);
    game.advance_turn()?;
    watch.observe(&game);
    assert!(watch.expire(&mut game)?.is_empty());
    assert_eq!(game.hand_size(Player::Human), 1);
    Ok(())
}

#[test]
fn window_closes_after_the_grace_turns() -> Result<(), GameError> {
    let mut game = two_card_game()?;
    let mut watch = UnoWatch::new(1);
    game.play_card(Player::Human, Card::number(Red, 1))?;
    watch.observe(&game);
    assert!(watch.expire(&mut game)?.is_empty());

    game.advance_turn()?;
    watch.observe(&game);
    assert_eq!(watch.expire(&mut game)?, vec![Player::Human]);
    assert_eq!(game.hand_size(Player::Human), 1 + UNO_PENALTY);
    watch.observe(&game);
    assert!(!watch.is_armed(Player::Human));
    Ok(())
}

#[test]
fn leaving_one_card_disarms() -> Result<(), GameError> {
    let mut game = two_card_game()?;
    let mut watch = UnoWatch::new(3);
    game.play_card(Player::Human, Card::number(Red, 1))?;
    watch.observe(&game);
    assert!(watch.is_armed(Player::Human));

    game.draw_card(Player::Human)?;
    watch.observe(&game);
    assert!(!watch.is_armed(Player::Human));
    assert!(!watch.challenge(&mut game, Player::Human)?);
    Ok(())
}
