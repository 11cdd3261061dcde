//! Console front end: human vs computer, human vs human, or computer vs computer.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use rust_kalah::ai::{HeuristicPolicy, MovePolicy, Tier};
use rust_kalah::core::{Board, GameRng, MatchConfig, MoveError, Side};
use rust_kalah::game::{MatchDriver, Ply};
use rust_kalah::rules::{GameState, MoveOutcome, Outcome};

const PIT_LABELS: &str = "    (1) (2) (3) (4) (5) (6) ";

#[derive(Parser, Debug)]
#[command(name = "kalah", version, about = "Play Kalah (Mancala) in the terminal")]
struct Cli {
    /// Who plays Side B; asked at the start of every round if omitted
    #[arg(long, value_enum, conflicts_with = "auto")]
    opponent: Option<Opponent>,

    /// The computer plays both sides without prompting
    #[arg(long)]
    auto: bool,

    /// Seed for the computer's random moves (drawn from the OS if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1800)]
    think_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Computer,
    Human,
}

/// A player at the keyboard. Leaves the match when input runs out.
struct HumanPolicy;

impl MovePolicy for HumanPolicy {
    fn choose(&mut self, state: &GameState) -> Option<usize> {
        read_pit(state).unwrap_or_else(|err| {
            error!(%err, "could not read a move");
            None
        })
    }

    fn name(&self) -> &str {
        "human"
    }

    fn is_automated(&self) -> bool {
        false
    }
}

/// The heuristic, announcing extra turns and captures before it moves.
struct ConsoleComputer(HeuristicPolicy);

impl MovePolicy for ConsoleComputer {
    fn choose(&mut self, state: &GameState) -> Option<usize> {
        let choice = self.0.choose_detailed(state);
        match choice.tier {
            Tier::ExtraTurn => println!("Spiffy! I get to go again!"),
            Tier::Capture { .. } => println!("All your pieces are belong to me!"),
            Tier::Random => {}
        }
        Some(choice.pit)
    }

    fn name(&self) -> &str {
        "computer"
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    let config = MatchConfig::new()
        .with_seed(seed)
        .with_think_delay(Duration::from_millis(cli.think_ms));

    println!("  -----------------------");
    println!("  --------Mancala--------");
    println!("  -----------------------");
    println!();

    if cli.auto {
        run_auto(config);
        return Ok(());
    }

    let driver = MatchDriver::new(config);
    let mut seeds = GameRng::new(seed);

    loop {
        let opponent = match cli.opponent {
            Some(opponent) => opponent,
            None => match ask_opponent()? {
                Some(opponent) => opponent,
                None => return Ok(()),
            },
        };

        let mut state = GameState::new(opponent == Opponent::Computer);
        let mut side_a = HumanPolicy;
        let mut side_b: Box<dyn MovePolicy> = match opponent {
            Opponent::Computer => Box::new(ConsoleComputer(HeuristicPolicy::with_rng(seeds.fork()))),
            Opponent::Human => Box::new(HumanPolicy),
        };

        print_board(&state);
        let record = driver.play_observed(&mut state, &mut side_a, side_b.as_mut(), show_ply);
        if record.abandoned_by.is_some() {
            return Ok(());
        }
        match record.outcome {
            Some(outcome) => {
                print_board(&state);
                print_outcome(outcome, state.vs_computer());
            }
            None => println!("Stopped after {} moves without a result.", record.len()),
        }

        match prompt("\nPlay Again? (Y/N):")? {
            Some(answer) if !answer.eq_ignore_ascii_case("n") => continue,
            _ => break,
        }
    }
    Ok(())
}

/// Print the result of an interactive ply and announce what comes next.
fn show_ply(state: &GameState, ply: &Ply) {
    print_board(state);
    print_move_result(ply.side, &ply.outcome);

    if state.is_over() {
        if let Err(err) = prompt("The game is over! Press enter to count the pieces.") {
            warn!(%err, "could not wait for enter");
        }
        return;
    }

    let next = if ply.outcome.repeat_turn {
        ply.side
    } else {
        ply.side.opponent()
    };
    if state.is_computer(next) {
        println!("The computer is thinking...");
    }
}

/// `None` on end of input.
fn ask_opponent() -> anyhow::Result<Option<Opponent>> {
    let answer = prompt("Enter 1 to play against the computer, 2 to play against a human (1 or 2):")?;
    Ok(answer.as_deref().map(parse_opponent))
}

fn parse_opponent(line: &str) -> Opponent {
    if line.contains('1') {
        Opponent::Computer
    } else {
        Opponent::Human
    }
}

/// Prompt until the side to move names a legal pit. `None` on end of input.
fn read_pit(state: &GameState) -> anyhow::Result<Option<usize>> {
    let side = state.current_turn();
    let mut message = format!("Player {side}, choose which pile to take (1-6):");

    loop {
        let Some(line) = prompt(&message)? else {
            return Ok(None);
        };
        let checked = line
            .parse::<u8>()
            .map_err(|_| MoveError::ChoiceOutOfRange(0))
            .and_then(|choice| side.pit_for_choice(choice))
            .and_then(|pit| state.validate_move(pit).map(|()| pit));

        match checked {
            Ok(pit) => return Ok(Some(pit)),
            Err(MoveError::EmptyPit(_)) => message = "Spot is empty. Choose another spot:".into(),
            Err(_) => message = "Invalid Position, input again:".into(),
        }
    }
}

fn prompt(message: &str) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_auto(config: MatchConfig) {
    let driver = MatchDriver::new(config);
    let mut seeds = GameRng::new(driver.config().seed);
    let mut side_a = HeuristicPolicy::with_rng(seeds.fork());
    let mut side_b = HeuristicPolicy::with_rng(seeds.fork());
    let mut state = GameState::new(true);

    print_board(&state);
    let record = driver.play_observed(&mut state, &mut side_a, &mut side_b, |state, ply| {
        let choice = ply.side.choice_for_pit(ply.outcome.pit).unwrap_or(0);
        println!("Player {} takes pile {choice}", ply.side);
        print_board(state);
        print_move_result(ply.side, &ply.outcome);
    });

    print_board(&state);
    match record.outcome {
        Some(outcome) => print_outcome(outcome, false),
        None => println!("Stopped after {} moves without a result.", record.len()),
    }
}

fn print_board(state: &GameState) {
    let board: &Board = state.board();
    if !state.vs_computer() {
        println!("{PIT_LABELS}");
    }
    println!("{board}");
    println!("{PIT_LABELS}");
}

fn print_move_result(side: Side, outcome: &MoveOutcome) {
    if outcome.captured.is_some() {
        println!("Pieces taken!");
    } else if outcome.repeat_turn {
        println!("Go again player {side}. You landed in the Kalah.");
    }
}

fn print_outcome(outcome: Outcome, vs_computer: bool) {
    match (outcome, vs_computer) {
        (Outcome::Winner(Side::A), true) => println!("Congratulations, you win!"),
        (Outcome::Winner(Side::B), true) => {
            println!("The computer beat you!");
            println!("It says: too hard? :)");
        }
        (Outcome::Winner(side), false) => println!("Player {side} WINS!"),
        (Outcome::Tie, _) => println!("The game is a tie!"),
    }
}
