#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Fixed-depth adversarial search for turn-alternating multi-agent games.
//!
//! You provide a game implementing the `maze-game-types` traits and an
//! evaluation function that turns a state into an `f64` (higher is better
//! for the controlled agent, index 0). Three search variants are offered:
//!
//! - [`minimax`] assumes every opponent minimizes your value.
//! - [`alpha_beta`] computes the exact same value and action with fewer node
//!   expansions by pruning branches that provably cannot matter.
//! - [`expectimax`] models opponents as choosing uniformly at random and
//!   folds expectations instead of minima up the tree.
//!
//! The depth budget counts full rounds: one decision from every agent. It
//! only decrements when control comes back around to agent 0, so a budget of
//! 2 in a three-agent game looks six plies ahead.
//!
//! ```rust
//! use maze_game_types::scripted::{GameTree, ScriptedGame};
//! use maze_minimax::{AgentOptions, Algorithm, SearchAgent};
//!
//! // Agent 0 picks L or R, then a single opponent picks the worst leaf.
//! let mut tree = GameTree::new(2);
//! let root = tree.node(0.0);
//! let after_l = tree.node(0.0);
//! let after_r = tree.node(0.0);
//! tree.edge(root, "L", after_l);
//! tree.edge(root, "R", after_r);
//! let l_lo = tree.node(3.0);
//! let l_hi = tree.node(9.0);
//! tree.edge(after_l, "x", l_lo);
//! tree.edge(after_l, "y", l_hi);
//! let r_lo = tree.node(7.0);
//! let r_hi = tree.node(8.0);
//! tree.edge(after_r, "x", r_lo);
//! tree.edge(after_r, "y", r_hi);
//! let game = tree.build(root);
//!
//! let agent = SearchAgent::new(
//!     |g: &ScriptedGame| g.score(),
//!     "example",
//!     AgentOptions {
//!         depth: 1,
//!         algorithm: Algorithm::Minimax,
//!     },
//! );
//!
//! // L guarantees 3, R guarantees 7.
//! assert_eq!(agent.choose_action(&game).unwrap(), "R");
//! ```

pub mod agent;
pub mod alpha_beta;
pub mod decision;
pub mod error;
pub mod evaluate;
pub mod expectimax;
pub mod minimax;
pub mod turn;

pub use agent::{AgentOptions, Algorithm, SearchAgent};
pub use decision::{Decision, SearchStats};
pub use error::SearchError;
pub use evaluate::Evaluator;

#[cfg(test)]
pub(crate) mod test_util;
