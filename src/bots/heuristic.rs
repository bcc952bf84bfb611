use crate::action::Action;
use crate::bot::Bot;
use crate::state::{GameStateView, TurnPhase};
use crate::strategy::{choose_color, choose_play_index};

/// The automated opponent.
/// Policy:
/// 1. Name the color it holds most of when a wild color is pending.
/// 2. Play the first legal card in hand order, nominating its majority color for wilds.
/// 3. Otherwise draw, or pass when drawing is no longer possible.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for HeuristicBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        assert!(
            !legal_actions.is_empty(),
            "heuristic bot requires at least one legal action"
        );
        let color = choose_color(&state.hand);
        if let Some(action) = legal_actions
            .iter()
            .find(|a| matches!(a, Action::ChooseColor(c) if *c == color))
        {
            return *action;
        }

        // After a draw only the drawn card may be played.
        let playable = match state.phase {
            TurnPhase::DrewCard => legal_actions.iter().find_map(Action::hand_index),
            _ => choose_play_index(&state.hand, state.top_discard, state.effective_color),
        };
        if let Some(index) = playable {
            let wanted = Action::Play {
                hand_index: index,
                nominate: state.hand[index].is_wild().then_some(color),
            };
            if legal_actions.contains(&wanted) {
                return wanted;
            }
        }

        if let Some(action) = legal_actions
            .iter()
            .find(|a| matches!(a, Action::Draw | Action::Pass))
        {
            return *action;
        }
        legal_actions[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Player;
    use crate::card::{Card, Color};
    use crate::state::{GameSettings, GameStatus};

    fn view(hand: Vec<Card>, top: Card, effective: Color) -> GameStateView {
        GameStateView {
            settings: GameSettings::default(),
            phase: TurnPhase::AwaitingAction,
            status: GameStatus::Ongoing,
            self_player: Player::Opponent,
            current_player: Player::Opponent,
            top_discard: top,
            effective_color: effective,
            pending_skip: false,
            draw_pile_count: 50,
            discard_pile_count: 1,
            hand,
            opponent_hand_size: 5,
            turn_number: 3,
        }
    }

    #[test]
    fn plays_first_legal_card() {
        let state = view(
            vec![
                Card::number(Color::Green, 1),
                Card::number(Color::Red, 2),
                Card::number(Color::Red, 3),
            ],
            Card::number(Color::Red, 9),
            Color::Red,
        );
        let legal = vec![
            Action::Play { hand_index: 1, nominate: None },
            Action::Play { hand_index: 2, nominate: None },
            Action::Draw,
        ];
        let action = HeuristicBot.select_action(&state, &legal);
        assert_eq!(action, Action::Play { hand_index: 1, nominate: None });
    }

    #[test]
    fn wild_nominates_majority_color() {
        let state = view(
            vec![
                Card::wild(),
                Card::number(Color::Yellow, 1),
                Card::number(Color::Yellow, 2),
            ],
            Card::number(Color::Red, 9),
            Color::Red,
        );
        let mut legal: Vec<Action> = Color::SUITS
            .into_iter()
            .map(|c| Action::Play { hand_index: 0, nominate: Some(c) })
            .collect();
        legal.push(Action::Draw);
        let action = HeuristicBot.select_action(&state, &legal);
        assert_eq!(action, Action::Play { hand_index: 0, nominate: Some(Color::Yellow) });
    }

    #[test]
    fn draws_without_a_play() {
        let state = view(vec![Card::number(Color::Red, 7)], Card::number(Color::Blue, 5), Color::Blue);
        assert_eq!(HeuristicBot.select_action(&state, &[Action::Draw]), Action::Draw);
    }
}
