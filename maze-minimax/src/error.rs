//! Search failure modes.
//!
//! The search is a pure computation over a well-formed game tree. It never
//! recovers or retries; malformed input surfaces immediately and propagates
//! to the top-level caller, which owns presentation.

use maze_game_types::AgentIndex;
use thiserror::Error;

/// Errors surfaced by the search core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A non-terminal state offered no legal actions for the agent to move.
    ///
    /// This is a precondition violation in the game, not a position to score:
    /// non-terminal states must guarantee at least one legal action (a "stay"
    /// action if nothing else). Treating it as a loss or a zero value would
    /// mask the bug.
    #[error("agent {0} has no legal actions in a non-terminal state")]
    NoLegalActions(AgentIndex),

    /// The top-level call never reached a decision point.
    ///
    /// Happens when the root state is already terminal or the depth budget is
    /// zero; the search then returns an evaluation but no action to take.
    #[error("no action to choose: the root state is terminal or the depth budget is zero")]
    NoActionChosen,
}
