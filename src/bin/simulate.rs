use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};

use unobot::{GameBuilder, Player, Session, create_bot_from_spec, describe_action, render_state};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play one game: you (or a bot) against the automated opponent.")]
struct Args {
    /// Show the game state and chosen actions each step
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Seed for shuffling
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Cards dealt to each player
    #[arg(long = "hand-size", default_value_t = unobot::card::HAND_SIZE)]
    hand_size: usize,

    /// Stop after the specified number of steps
    #[arg(long = "max-turns", default_value_t = 5000)]
    max_turns: usize,

    /// Turns a player has to declare their last card
    #[arg(long = "grace", default_value_t = 1)]
    grace: u64,

    /// Seat specs: human[:name] | random[:seed] | heuristic (first = human seat)
    #[arg(default_values_t = [String::from("human"), String::from("heuristic")])]
    bots: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let [first, second] = args.bots.as_slice() else {
        return Err(format!("expected exactly 2 players, received {}", args.bots.len()).into());
    };
    let game = GameBuilder::new()
        .with_seed(args.seed)
        .with_hand_size(args.hand_size)
        .build()?;
    let human = create_bot_from_spec(first, 0, args.seed)?;
    let opponent = create_bot_from_spec(second, 1, args.seed)?;
    let mut session = Session::new(game, human, opponent, args.grace);

    println!("Starting UNO: {first} vs {second}.\n");
    let mut steps = 0usize;
    while !session.game().is_game_over() {
        if steps >= args.max_turns {
            println!("Max turn limit {} reached. Stopping simulation.", args.max_turns);
            break;
        }
        let current = session.game().player_to_act();
        let before = session.game().state_view(current);
        if args.visualize {
            println!("{}", render_state(&before));
        }
        let report = session.step()?;
        if args.visualize {
            println!("Chosen action: {}\n", describe_action(&before, &report.action));
        }
        for player in &report.penalized {
            println!("{player} draws {} penalty cards.", unobot::card::UNO_PENALTY);
        }
        steps += 1;
    }

    match session.game().winner() {
        Some(Player::Human) => println!("Game finished. Winner: {first} (human seat)."),
        Some(Player::Opponent) => println!("Game finished. Winner: {second} (opponent seat)."),
        None => println!("Simulation stopped before completion."),
    }
    Ok(())
}
