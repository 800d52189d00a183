//! The game grid and four-in-a-row detection
//!
//! The grid is stored row by row with row 0 at the top of the board, so
//! pieces fall towards the highest row index.

use std::fmt;

use crate::{error::MoveError, HEIGHT, NUM_WINDOWS, WIDTH, WIN_LENGTH};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The player whose piece occupies this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// A line of `WIN_LENGTH` cells as (row, column) coordinates
pub type Window = [(usize, usize); WIN_LENGTH];

/// Enumerates every window on the board: horizontal, vertical, and both diagonals
pub const fn windows() -> [Window; NUM_WINDOWS] {
    // (row step, column step) of each orientation
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
    let reach = WIN_LENGTH as isize - 1;

    let mut windows = [[(0, 0); WIN_LENGTH]; NUM_WINDOWS];
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut row = 0;
        while row < HEIGHT as isize {
            let mut column = 0;
            while column < WIDTH as isize {
                let (end_row, end_column) = (row + dr * reach, column + dc * reach);
                if end_row >= 0
                    && end_row < HEIGHT as isize
                    && end_column >= 0
                    && end_column < WIDTH as isize
                {
                    let mut i = 0;
                    while i < WIN_LENGTH {
                        windows[n][i] = (
                            (row + dr * i as isize) as usize,
                            (column + dc * i as isize) as usize,
                        );
                        i += 1;
                    }
                    n += 1;
                }
                column += 1;
            }
            row += 1;
        }
        d += 1;
    }
    windows
}

/// Every window on the board, shared by win detection and evaluation
pub const WINDOWS: [Window; NUM_WINDOWS] = windows();

/// A 6x7 Connect 4 grid
///
/// All mutation goes through [`place`](Board::place), [`clear`](Board::clear)
/// and [`drop_piece`](Board::drop_piece), which is what keeps pieces from
/// floating during normal play.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
    // number of occupied cells
    num_pieces: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            num_pieces: 0,
        }
    }

    /// Builds a board from a sequence of 1-indexed column digits, Red moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, MoveError> {
        let mut board = Self::new();
        let mut player = Player::Red;

        for (position, column_char) in moves.as_ref().chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.drop_piece(column - 1, player)?;
                    player = player.opponent();
                }
                _ => {
                    return Err(MoveError::InvalidMoveString {
                        position,
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    /// The state of the cell at `row` (0 is the top) and `column`
    ///
    /// # Panics
    /// Panics if the coordinates are outside the board.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Number of pieces on the board
    pub fn num_moves(&self) -> usize {
        self.num_pieces
    }

    /// The lowest empty row of `column`, or `None` if the column is full or
    /// does not exist
    pub fn empty_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_empty())
    }

    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        if self.cells[row][column].is_empty() {
            self.num_pieces += 1;
        }
        self.cells[row][column] = player.into();
    }

    pub fn clear(&mut self, row: usize, column: usize) {
        if !self.cells[row][column].is_empty() {
            self.num_pieces -= 1;
        }
        self.cells[row][column] = Cell::Empty;
    }

    /// Drops a piece into `column`, returning the row it lands on
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let row = self
            .empty_row(column)
            .ok_or(MoveError::ColumnFull { column })?;
        self.place(row, column, player);
        Ok(row)
    }

    /// Drops a piece into `column`, runs `f` on the resulting position and
    /// takes the piece back out before returning
    ///
    /// Returns `None` without calling `f` if the column cannot be played.
    pub fn with_move<R, F>(&mut self, column: usize, player: Player, f: F) -> Option<R>
    where
        F: FnOnce(&mut Self) -> R,
    {
        let row = self.empty_row(column)?;
        self.place(row, column, player);
        let result = f(self);
        self.clear(row, column);
        Some(result)
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Columns that can still be played, in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.num_pieces == WIDTH * HEIGHT
    }

    /// Whether any window holds four pieces of the same player
    pub fn has_four_in_a_row(&self) -> bool {
        WINDOWS.iter().any(|window| {
            let (row, column) = window[0];
            let first = self.cells[row][column];
            !first.is_empty() && window.iter().all(|&(r, c)| self.cells[r][c] == first)
        })
    }

    /// Whether the game can not continue from this position
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_a_row() || self.is_full()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
