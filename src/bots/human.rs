use std::io::{self, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameStateView;
use crate::visualize::{describe_action, render_state};

/// Interactive bot that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn prompt(&self, question: &str) -> Option<String> {
        print!("{question}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_string()),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        self.prompt(question)
            .map(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        assert!(
            !legal_actions.is_empty(),
            "at least one legal action must exist"
        );
        loop {
            println!("\n=== {}'s turn ===", self.name);
            println!("{}", render_state(state));
            println!("Available actions:");
            for (index, action) in legal_actions.iter().enumerate() {
                println!("  [{index}] {}", describe_action(state, action));
            }
            println!("Type the action index, 'help' or 'q' to quit.");
            let Some(input) = self.prompt("Selection: ") else {
                eprintln!("input closed, exiting");
                std::process::exit(0);
            };
            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if input.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the action you wish to perform.");
                println!("Play a card matching the color or the rank on top; wild cards always match.");
                continue;
            }
            let Ok(choice) = input.parse::<usize>() else {
                println!("Invalid input: '{input}'. Please enter a number.");
                continue;
            };
            if let Some(action) = legal_actions.get(choice) {
                println!("You selected: {}", describe_action(state, action));
                return *action;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }

    fn declare_uno(&mut self, _state: &GameStateView) -> bool {
        self.confirm("One card left! Declare UNO? [y/N] ")
    }

    fn challenge(&mut self, _state: &GameStateView) -> bool {
        self.confirm("Your opponent holds one card and said nothing. Call it out? [y/N] ")
    }
}
