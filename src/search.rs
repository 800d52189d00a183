//! A depth-limited minimax agent for Connect 4

use log::{debug, trace};

use crate::{
    board::{Board, Player},
    evaluation::evaluate,
    INFINITY,
};

/// An agent choosing moves for one player with minimax search and alpha-beta
/// pruning
///
/// # Notes
/// The search works on a single board borrowed for its whole duration: every
/// speculative move is dropped into the board, searched and taken back out
/// again, so the board is exactly as it was given once a search returns.
///
/// # Position Scoring
/// Leaves of the search tree are scored with [`evaluate`] from the point of
/// view of the searcher's own player, whichever side's move led to the leaf.
/// A depth of 0 scores each candidate move with a single static evaluation.
#[derive(Clone, Debug)]
pub struct Searcher {
    player: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` choosing moves for `player`
    pub fn new(player: Player) -> Self {
        Self {
            player,
            node_count: 0,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Scores `board` looking `depth` plies ahead
    ///
    /// `maximizing` is true when the searcher's player is to move. `alpha` and
    /// `beta` bound the scores the two sides are already guaranteed elsewhere
    /// in the tree, the root window being `(-INFINITY, INFINITY)`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || board.is_terminal() {
            return evaluate(board, self.player);
        }

        if maximizing {
            let mut max = i32::MIN;
            for column in board.legal_moves() {
                let score = match board.with_move(column, self.player, |board| {
                    self.minimax(board, depth - 1, false, alpha, beta)
                }) {
                    Some(score) => score,
                    None => continue,
                };
                max = max.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max
        } else {
            let opponent = self.player.opponent();
            let mut min = i32::MAX;
            for column in board.legal_moves() {
                let score = match board.with_move(column, opponent, |board| {
                    self.minimax(board, depth - 1, true, alpha, beta)
                }) {
                    Some(score) => score,
                    None => continue,
                };
                min = min.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min
        }
    }

    /// Scores every legal move of the searcher's player, in ascending column order
    pub fn score_moves(&mut self, board: &mut Board, depth: usize) -> Vec<(usize, i32)> {
        let mut scores = Vec::new();
        for column in board.legal_moves() {
            // the ply after our own move belongs to the opponent
            let score = board.with_move(column, self.player, |board| {
                self.minimax(board, depth, false, -INFINITY, INFINITY)
            });
            if let Some(score) = score {
                trace!("{} column {}: {}", self.player, column + 1, score);
                scores.push((column, score));
            }
        }
        scores
    }

    /// Finds the best move and its score, or `None` if the board has no legal move
    ///
    /// Ties go to the lowest column.
    pub fn search(&mut self, board: &mut Board, depth: usize) -> Option<(usize, i32)> {
        let start_count = self.node_count;

        let mut best: Option<(usize, i32)> = None;
        for (column, score) in self.score_moves(board, depth) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((column, score)),
            }
        }

        match best {
            Some((column, score)) => debug!(
                "{} searched depth {}: column {} scores {} ({} nodes)",
                self.player,
                depth,
                column + 1,
                score,
                self.node_count - start_count
            ),
            None => debug!("{} has no legal move", self.player),
        }
        best
    }

    /// Finds the column the searcher's player should play, or `None` if the
    /// board has no legal move
    pub fn find_best_move(&mut self, board: &mut Board, depth: usize) -> Option<usize> {
        self.search(board, depth).map(|(column, _)| column)
    }
}
