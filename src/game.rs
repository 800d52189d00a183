//! Turn-taking between a human and the computer

use log::info;

use crate::{
    board::{Board, Cell, Player},
    error::{ConfigError, MoveError},
    search::Searcher,
    MAX_DEPTH,
};

/// Preset search depths
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    /// Greedy play: every move is judged by the position it leads to, without look-ahead
    Easy,
    /// Four plies of look-ahead
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Hard => 4,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    depth: usize,
    computer: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Hard)
    }
}

impl GameConfig {
    /// A computer playing Yellow with the search depth of `difficulty`
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            computer: Player::Yellow,
        }
    }

    /// A computer playing Yellow searching `depth` plies ahead
    pub fn with_depth(depth: usize) -> Result<Self, ConfigError> {
        if depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooLarge { depth });
        }
        Ok(Self {
            depth,
            computer: Player::Yellow,
        })
    }

    /// Hands the computer the other colour
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    pub fn human(&self) -> Player {
        self.computer.opponent()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// The result of an applied move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveOutcome {
    pub player: Player,
    pub column: usize,
    /// The row the piece landed on, 0 being the top
    pub row: usize,
    pub status: GameStatus,
}

/// A game in progress. Red always moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    config: GameConfig,
    history: Vec<usize>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Red,
            status: GameStatus::Playing,
            config,
            history: Vec::new(),
        }
    }

    /// Starts a game from a sequence of 1-indexed column digits
    pub fn from_moves<S: AsRef<str>>(config: GameConfig, moves: S) -> Result<Self, MoveError> {
        let mut game = Self::new(config);
        for (position, column_char) in moves.as_ref().chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => {
                    game.play(column - 1)?;
                }
                _ => {
                    return Err(MoveError::InvalidMoveString {
                        position,
                        character: column_char,
                    })
                }
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.board.cell(row, column)
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Columns played so far, 0-indexed
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.status.is_terminal() && self.to_move == self.config.computer
    }

    /// Plays `column` for the side to move
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        let row = self.board.drop_piece(column, player)?;
        self.history.push(column);
        info!("{} plays column {}", player, column + 1);

        self.status = if self.board.has_four_in_a_row() {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Playing
        };

        match self.status {
            GameStatus::Playing => self.to_move = player.opponent(),
            GameStatus::Won(winner) => info!("game over, {} wins", winner),
            GameStatus::Draw => info!("game over, draw"),
        }

        Ok(MoveOutcome {
            player,
            column,
            row,
            status: self.status,
        })
    }

    /// Plays `column` for the human, refusing it while the computer is to move
    pub fn play_human(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::NotYourTurn {
                player: self.config.computer,
            });
        }
        self.play(column)
    }

    /// The column the side to move should play with `depth` plies of look-ahead
    pub fn suggest_move(&mut self, depth: usize) -> Option<usize> {
        Searcher::new(self.to_move).find_best_move(&mut self.board, depth)
    }

    /// Scores every legal move for the side to move, see [`Searcher::score_moves`]
    pub fn score_moves(&mut self, depth: usize) -> Vec<(usize, i32)> {
        Searcher::new(self.to_move).score_moves(&mut self.board, depth)
    }

    /// Searches for and plays the computer's move at the configured depth
    pub fn play_computer(&mut self) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != self.config.computer {
            return Err(MoveError::NotYourTurn {
                player: self.to_move,
            });
        }
        let column = self
            .suggest_move(self.config.depth)
            .ok_or(MoveError::NoLegalMove)?;
        self.play(column)
    }
}
