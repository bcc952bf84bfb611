use std::fmt::Write;

use crate::action::Action;
use crate::state::{GameStateView, GameStatus, TurnPhase};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_pile_sizes: bool,
    pub show_hand_indices: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_pile_sizes: true,
            show_hand_indices: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Turn {}  |  Phase: {:?}", state.turn_number, state.phase);
    let _ = writeln!(
        out,
        "Current player: {}{}",
        state.current_player,
        if state.is_my_turn() { " (You)" } else { "" }
    );
    let color_note = if state.top_discard.is_wild() {
        match state.phase {
            TurnPhase::ChooseColor => String::from(" (color not chosen)"),
            _ => format!(" (color: {})", state.effective_color),
        }
    } else {
        String::new()
    };
    let _ = writeln!(out, "Top card: {}{color_note}", state.top_discard);
    if state.pending_skip {
        let _ = writeln!(out, "Next turn advance is skipped");
    }
    if options.show_pile_sizes {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            state.draw_pile_count, state.discard_pile_count
        );
    }
    let _ = writeln!(out, "Opponent hand size: {}", state.opponent_hand_size);
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = state
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if options.show_hand_indices {
                    format!("{idx}:{card}")
                } else {
                    card.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Play {
            hand_index,
            nominate,
        } => {
            let card = state
                .hand
                .get(*hand_index)
                .map(ToString::to_string)
                .unwrap_or_else(|| String::from("--"));
            match nominate {
                Some(color) => format!("Play hand[{hand_index}] {card} and name {color}"),
                None => format!("Play hand[{hand_index}] {card}"),
            }
        }
        Action::Draw => String::from("Draw a card"),
        Action::Pass => String::from("Pass"),
        Action::ChooseColor(color) => format!("Name {color} as the wild color"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Player;
    use crate::card::Color;
    use crate::game::GameBuilder;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let game = GameBuilder::new().build().expect("game");
        let view = game.state_view(Player::Human);
        let text = render_state(&view);
        assert!(text.contains("Current player: human (You)"));
        assert!(text.contains("Hand: 0:"));
        assert!(text.contains("Top card:"));
        let actions = game.legal_actions(Player::Human).expect("actions available");
        assert!(!actions.is_empty());
        if let Some(play) = actions.iter().find(|a| matches!(a, Action::Play { .. })) {
            assert!(describe_action(&view, play).starts_with("Play hand["));
        }
        let named = describe_action(&view, &Action::ChooseColor(Color::Green));
        assert!(named.contains("Green"));
        assert_eq!(describe_action(&view, &Action::Draw), "Draw a card");
    }
}
