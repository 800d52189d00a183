//! Static scoring of Connect 4 positions
//!
//! A position is scored from the point of view of one player by counting the
//! open lines each side is building (threats) and how many pieces each side
//! holds in the centre of the board. No look-ahead is performed.

use crate::{
    board::{Board, Player, WINDOWS},
    HEIGHT, INFINITY, WIDTH, WIN_LENGTH,
};

/// Weight of the threat score relative to the position score
pub const THREAT_WEIGHT: i32 = 100;

/// Scores `board` for `perspective`: positive values favour `perspective`
///
/// A completed line for `perspective` scores [`INFINITY`], one for the
/// opponent scores `-INFINITY`.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let opponent = perspective.opponent();

    let own_threats = evaluate_threats(board, perspective);
    if own_threats == INFINITY {
        return INFINITY;
    }
    let opponent_threats = evaluate_threats(board, opponent);
    if opponent_threats == INFINITY {
        return -INFINITY;
    }

    (own_threats * THREAT_WEIGHT + evaluate_position(board, perspective))
        - (opponent_threats * THREAT_WEIGHT + evaluate_position(board, opponent))
}

/// Sums the value of every window `subject` could still complete
///
/// Windows holding any opponent piece are worth nothing. If `subject` already
/// owns a full window the scan stops there and [`INFINITY`] is returned.
pub fn evaluate_threats(board: &Board, subject: Player) -> i32 {
    let mut score = 0;

    for window in WINDOWS.iter() {
        let mut own = 0usize;
        let mut other = 0usize;
        for &(row, column) in window.iter() {
            match board.cell(row, column).owner() {
                Some(player) if player == subject => own += 1,
                Some(_) => other += 1,
                None => {}
            }
        }

        score += match (own, other) {
            (WIN_LENGTH, _) => return INFINITY,
            (3, 0) => 100,
            (2, 0) => 10,
            (1, 0) => 1,
            _ => 0,
        };
    }
    score
}

/// Counts the pieces of `subject`, with pieces in the three centre columns
/// counting double
pub fn evaluate_position(board: &Board, subject: Player) -> i32 {
    let centre = WIDTH / 2 - 1..=WIDTH / 2 + 1;

    let mut score = 0;
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if board.cell(row, column).owner() == Some(subject) {
                score += if centre.contains(&column) { 2 } else { 1 };
            }
        }
    }
    score
}
