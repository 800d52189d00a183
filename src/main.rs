use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_engine::{
    arena::{self, ArenaConfig},
    Difficulty, Game, GameConfig, GameStatus, Player, MAX_DEPTH,
};

mod display;
use display::display;

#[derive(Parser)]
#[command(name = "connect4")]
#[command(version, about = "Play Connect 4 against a minimax opponent", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Let two computer players play out every short opening
    Arena(ArenaArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// How far ahead the computer looks
    #[arg(long, short = 'd', value_enum, default_value_t = DifficultyArg::Hard)]
    difficulty: DifficultyArg,

    /// Search depth in plies, overrides --difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=(MAX_DEPTH as i64)))]
    depth: Option<u8>,

    /// The colour the computer plays, Red moves first
    #[arg(long, value_enum, default_value_t = Colour::Yellow)]
    computer: Colour,

    /// Columns (1-indexed digits) played before the game starts, Red first
    #[arg(long, default_value = "")]
    moves: String,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[derive(Args)]
struct ArenaArgs {
    /// Search depth of the Red player
    #[arg(long, default_value_t = 4)]
    red_depth: usize,

    /// Search depth of the Yellow player
    #[arg(long, default_value_t = 0)]
    yellow_depth: usize,

    /// Length of the openings played out, every opening of this length is played once
    #[arg(long, default_value_t = 2)]
    opening_plies: usize,
}

#[derive(Copy, Clone, ValueEnum)]
enum DifficultyArg {
    Easy,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Colour {
    Red,
    Yellow,
}

impl From<Colour> for Player {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::Red => Player::Red,
            Colour::Yellow => Player::Yellow,
        }
    }
}

fn main() -> Result<()> {
    // keep the board readable unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Arena(args)) => run_arena(args),
        None => play(cli.play),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let config = match args.depth {
        Some(depth) => GameConfig::with_depth(depth as usize)?,
        None => GameConfig::from_difficulty(args.difficulty.into()),
    }
    .with_computer(args.computer.into());
    let mut game = Game::from_moves(config, &args.moves)?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!(
        "You play {}, the AI plays {} looking {} moves ahead\n",
        config.human(),
        config.computer(),
        config.depth()
    );

    // game loop
    loop {
        display(&game)?;

        match game.status() {
            GameStatus::Playing => {
                // AI player
                if game.is_computer_turn() {
                    println!("AI is thinking...");
                    stdout().flush()?;
                    std::thread::sleep(Duration::from_millis(args.delay_ms));

                    let outcome = game.play_computer()?;
                    println!("AI plays column {}", outcome.column + 1);

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        return Err(anyhow!("input closed before the game finished"));
                    }

                    let column = match input_str.trim().parse::<usize>() {
                        Ok(column) if column >= 1 => column - 1,
                        _ => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                    };

                    if let Err(err) = game.play_human(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            GameStatus::Won(player) => {
                let who = if player == config.human() {
                    "(you)"
                } else {
                    "(the AI)"
                };
                println!("{} {} wins!", player, who);
                break;
            }
            GameStatus::Draw => {
                println!("Draw!");
                break;
            }
        }
    }

    let record: String = game
        .history()
        .iter()
        .map(|column| (column + 1).to_string())
        .collect();
    println!("Game record: {}", record);
    Ok(())
}

fn run_arena(args: ArenaArgs) -> Result<()> {
    let config = ArenaConfig {
        red_depth: args.red_depth,
        yellow_depth: args.yellow_depth,
        opening_plies: args.opening_plies,
        show_progress: true,
    };
    let report = arena::run(&config)?;

    println!(
        "{} games from {}-move openings",
        report.games(),
        config.opening_plies
    );
    println!("Red (depth {}) wins: {}", config.red_depth, report.red_wins);
    println!(
        "Yellow (depth {}) wins: {}",
        config.yellow_depth, report.yellow_wins
    );
    println!("Draws: {}", report.draws);
    Ok(())
}
