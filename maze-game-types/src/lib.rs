#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Game-side types for the `maze-minimax` search crate.
//!
//! The search core never looks inside a game state. Everything it needs is
//! expressed through the capability traits in [`mod@game`]: enumerating legal
//! actions for an agent, generating deterministic successor states, counting
//! agents, and recognizing won/lost positions. Any turn-alternating game that
//! implements those traits can be searched.
//!
//! The [`scripted`] module provides a table-driven game whose whole tree is
//! declared up front. It exists so that tests and benches have a concrete
//! game with hand-picked values at every node.

mod agent;
mod game;
pub mod scripted;

pub use agent::AgentIndex;
pub use game::{
    ActionEnumerableGame, AgentCountableGame, OutcomeDeterminableGame, SimulableGame,
};
