//! The match driver: two heuristics, one board, minimax on both sides.

use breakthrough_game_types::{Board, InvalidMoveError, Player};
use breakthrough_minimax::{Evaluate, MinimaxAgent};
use decorum::N64;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

/// Everything worth keeping about a finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The side that won. Every game ends with a winner; there are no draws.
    pub winner: Player,
    /// Total moves played by both sides together.
    pub move_count: usize,
    /// Opposing pieces removed by White.
    pub white_captures: usize,
    /// Opposing pieces removed by Black.
    pub black_captures: usize,
    /// The board as it stood when the game ended.
    pub final_board: Board,
}

/// Play one full game from `board`, White to move first.
///
/// Both sides search to the same `depth` with their own heuristic. A side
/// whose agent returns no move is stuck and loses on the spot. The shared
/// `rng` drives every heuristic tie-break, so a seeded rng makes the whole
/// game reproducible.
pub fn play_game(
    white: &dyn Evaluate<Board, N64>,
    black: &dyn Evaluate<Board, N64>,
    board: Board,
    depth: usize,
    rng: &mut dyn RngCore,
) -> Result<MatchRecord, InvalidMoveError> {
    let white_agent = MinimaxAgent::new(white, "white");
    let black_agent = MinimaxAgent::new(black, "black");

    info_span!("play_game", depth).in_scope(|| {
        let mut board = board;
        let mut current = Player::White;
        let mut move_count = 0;
        let mut white_captures = 0;
        let mut black_captures = 0;

        let winner = loop {
            if let Some(winner) = board.winner() {
                break winner;
            }

            let agent = match current {
                Player::White => &white_agent,
                Player::Black => &black_agent,
            };
            let mv = match agent.choose_move(&board, current, depth, rng) {
                Some(mv) => mv,
                None => {
                    info!(stuck = %current, "no legal moves, game over");
                    break current.opponent();
                }
            };

            if board.is_capture(&mv) {
                match current {
                    Player::White => white_captures += 1,
                    Player::Black => black_captures += 1,
                }
            }
            board = board.apply(&mv)?;
            move_count += 1;
            current = current.opponent();
        };

        info!(%winner, move_count, white_captures, black_captures, "game finished");

        Ok(MatchRecord {
            winner,
            move_count,
            white_captures,
            black_captures,
            final_board: board,
        })
    })
}
