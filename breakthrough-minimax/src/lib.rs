#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A depth-limited minimax engine for two-player, perfect-information,
//! zero-sum games. You provide a game type implementing the traits from
//! `breakthrough-game-types` and a heuristic implementing [`Evaluate`]; the
//! engine alternates maximizing and minimizing plies down to a fixed depth
//! budget and reports the best move it found.
//!
//! The search is deliberately brute force: no alpha-beta pruning, no
//! transposition table, no iterative deepening. Depth is the only
//! termination control, so stack usage is bounded by the caller's budget.
//! The engine never mutates a state it is handed and draws no randomness of
//! its own; the rng handle it threads through exists solely for heuristic
//! tie-breaking, which keeps a seeded search fully reproducible.

mod agent;
mod score;
mod search_return;

pub use agent::MinimaxAgent;
pub use score::{Evaluate, SearchScore};
pub use search_return::{SearchOutcome, SearchReturn};
