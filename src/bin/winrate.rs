use std::error::Error;
use std::process;

use clap::Parser;

use unobot::{GameBuilder, Player, Session, create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(name = "winrate", about = "Run many automated games and report per-bot win rates.")]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck + bot RNGs will be derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on steps per game; longer games are aborted (not counted as a win)
    #[arg(long = "max-turns", default_value_t = 5000)]
    max_turns: usize,

    /// Cards dealt to each player
    #[arg(long = "hand-size", default_value_t = unobot::card::HAND_SIZE)]
    hand_size: usize,

    /// Turns a player has to declare their last card
    #[arg(long = "grace", default_value_t = 1)]
    grace: u64,

    /// Two bot specs, e.g. heuristic random
    #[arg(default_values_t = [String::from("heuristic"), String::from("random")])]
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
    if args.bots.len() != 2 {
        return Err(format!("expected exactly 2 players, received {}", args.bots.len()).into());
    }
    // A human seat would block waiting for input.
    if args.bots.iter().any(|s| label_for_spec(s) == "human") {
        return Err("human players are not supported in winrate runs".into());
    }
    let labels = seat_labels(&args.bots);
    let mut tally = Tally::default();

    for game_idx in 0..args.games {
        // Alternate seating so each bot gets the human seat, which always starts.
        let order = if game_idx % 2 == 0 { [0, 1] } else { [1, 0] };
        let deck_seed = mix_seed(args.seed, game_idx as u64, 0x5EED_15);
        let game = GameBuilder::new()
            .with_seed(deck_seed)
            .with_hand_size(args.hand_size)
            .build()?;
        let human = create_bot_from_spec(&args.bots[order[0]], 0, mix_seed(args.seed, game_idx as u64, 0))?;
        let opponent = create_bot_from_spec(&args.bots[order[1]], 1, mix_seed(args.seed, game_idx as u64, 1))?;

        let mut session = Session::new(game, human, opponent, args.grace);
        let winner = session.run(args.max_turns)?;
        if winner.is_none() {
            log::warn!("game {game_idx} hit the step cap");
        }
        tally.record(order, winner);
        debug_assert_eq!(session.game().card_count(), unobot::card::DECK_SIZE);
    }

    println!("Win rates (per bot):");
    for (bot, label) in labels.iter().enumerate() {
        let (wins, games) = (tally.wins[bot], tally.games[bot]);
        let rate = if games > 0 { wins as f64 / games as f64 } else { 0.0 };
        println!("  {label:<12}  {wins}/{games}  ({:.2}%)", rate * 100.0);
    }
    if tally.aborted > 0 {
        println!("\nNote: {} game(s) ended without a winner (timeouts).", tally.aborted);
    }
    Ok(())
}

/// Results per bot, indexed by position on the command line.
#[derive(Debug, Default)]
struct Tally {
    wins: [usize; 2],
    games: [usize; 2],
    aborted: usize,
}

impl Tally {
    /// `order[seat]` is the bot sitting in that seat for this game.
    fn record(&mut self, order: [usize; 2], winner: Option<Player>) {
        for bot in order {
            self.games[bot] += 1;
        }
        match winner {
            Some(player) => self.wins[order[player.index()]] += 1,
            None => self.aborted += 1,
        }
    }
}

/// Display labels; identical bots are told apart by their position.
fn seat_labels(specs: &[String]) -> Vec<String> {
    let labels: Vec<String> = specs.iter().map(|s| label_for_spec(s)).collect();
    labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            if labels.iter().filter(|l| *l == label).count() > 1 {
                format!("{label}#{}", idx + 1)
            } else {
                label.clone()
            }
        })
        .collect()
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}
