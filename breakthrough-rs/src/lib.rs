//! Heuristic players for the Breakthrough capture game, and the match
//! driver that pits them against each other with the minimax engine from
//! `breakthrough-minimax`.
//!
//! Each player is a unit struct implementing [`Evaluate`] over [`Board`]
//! with an `N64` score. The four of them share one convention: the
//! meaningful part of the score is an integer-valued count, and a uniform
//! random term in [0, 1) is added purely to break ties between otherwise
//! equal moves. The random term can never reorder moves whose counts
//! differ.

pub mod aggressor;
pub mod conqueror;
pub mod defender;
pub mod evasive;
pub mod play;

pub use breakthrough_game_types::{Board, Cell, Move, Player, Position};
pub use breakthrough_minimax::{Evaluate, MinimaxAgent, SearchOutcome, SearchScore};

use decorum::N64;
use rand::{Rng, RngCore};

pub use aggressor::Aggressor;
pub use conqueror::Conqueror;
pub use defender::Defender;
pub use evasive::Evasive;

/// A heuristic the match driver can hold without knowing its concrete type.
pub type BoxedHeuristic = Box<dyn Evaluate<Board, N64> + Send + Sync>;

/// Every built-in heuristic, paired with its name.
pub fn all_heuristics() -> Vec<(&'static str, BoxedHeuristic)> {
    vec![
        ("evasive", Box::new(Evasive)),
        ("conqueror", Box::new(Conqueror)),
        ("aggressor", Box::new(Aggressor)),
        ("defender", Box::new(Defender)),
    ]
}

/// The shared tie-breaking term: uniform in [0, 1).
pub(crate) fn tie_break(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_heuristics_have_distinct_names() {
        let heuristics = all_heuristics();
        assert_eq!(heuristics.len(), 4);
        for (i, (name, _)) in heuristics.iter().enumerate() {
            for (other, _) in heuristics.iter().skip(i + 1) {
                assert_ne!(name, other);
            }
        }
    }

    #[test]
    fn tie_break_stays_in_the_unit_interval() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let t = tie_break(&mut rng);
            assert!((0.0..1.0).contains(&t));
        }
    }
}
