//! Computer-against-computer matches
//!
//! The search is deterministic, so two searchers starting from the empty board
//! always play the same game. To get a meaningful comparison every opening of
//! a few plies is played out once instead, and the results are tallied.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::{
    board::{Board, Player},
    error::{ArenaError, ConfigError, MoveError},
    game::{Game, GameConfig, GameStatus},
    MAX_DEPTH, WIDTH,
};

/// The longest opening the arena enumerates (7^3 games)
pub const MAX_OPENING_PLIES: usize = 3;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArenaConfig {
    pub red_depth: usize,
    pub yellow_depth: usize,
    pub opening_plies: usize,
    pub show_progress: bool,
}

impl ArenaConfig {
    fn validate(&self) -> Result<(), ArenaError> {
        for &depth in [self.red_depth, self.yellow_depth].iter() {
            if depth > MAX_DEPTH {
                return Err(ConfigError::DepthTooLarge { depth }.into());
            }
        }
        if self.opening_plies > MAX_OPENING_PLIES {
            return Err(ArenaError::TooManyOpeningPlies {
                plies: self.opening_plies,
            });
        }
        Ok(())
    }
}

/// Tally of finished arena games
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct ArenaReport {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::Red) => self.red_wins += 1,
            GameStatus::Won(Player::Yellow) => self.yellow_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Playing => {}
        }
    }
}

/// Every sequence of `plies` 1-indexed column digits that leaves a game in progress
pub fn openings(plies: usize) -> Vec<String> {
    let mut openings = vec![String::new()];
    for _ in 0..plies {
        openings = openings
            .iter()
            .flat_map(|opening| (1..=WIDTH).map(move |column| format!("{}{}", opening, column)))
            .filter(|opening| match Board::from_moves(opening) {
                Ok(board) => !board.is_terminal(),
                Err(_) => false,
            })
            .collect();
    }
    openings
}

/// Plays a game from `opening` to the end, each side searching at its own depth
pub fn play_out(
    opening: &str,
    red_depth: usize,
    yellow_depth: usize,
) -> Result<GameStatus, MoveError> {
    let mut game = Game::from_moves(GameConfig::default(), opening)?;

    while !game.status().is_terminal() {
        let depth = match game.to_move() {
            Player::Red => red_depth,
            Player::Yellow => yellow_depth,
        };
        let column = game.suggest_move(depth).ok_or(MoveError::NoLegalMove)?;
        game.play(column)?;
    }
    Ok(game.status())
}

/// Plays out every opening of `config.opening_plies` moves in parallel
pub fn run(config: &ArenaConfig) -> Result<ArenaReport, ArenaError> {
    config.validate()?;
    let openings = openings(config.opening_plies);

    let progress = if config.show_progress {
        ProgressBar::new(openings.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing openings: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    // each game owns its board, only whole games run concurrently
    let results = openings
        .par_iter()
        .map(|opening| {
            let status = play_out(opening, config.red_depth, config.yellow_depth);
            progress.inc(1);
            status
        })
        .collect::<Result<Vec<_>, _>>()?;
    progress.finish();

    let mut report = ArenaReport::default();
    for status in results {
        report.record(status);
    }

    info!(
        "arena red depth {} vs yellow depth {}: {} red wins, {} yellow wins, {} draws",
        config.red_depth, config.yellow_depth, report.red_wins, report.yellow_wins, report.draws
    );
    Ok(report)
}
