use std::fmt::Debug;

use crate::agent::AgentIndex;

/// A game that knows how many agents are playing in it.
pub trait AgentCountableGame {
    /// Total number of agents, controlled agent included. Always at least 1.
    fn num_agents(&self) -> usize;
}

/// A game that can enumerate the legal actions for a given agent.
pub trait ActionEnumerableGame {
    /// An opaque move token. Only meaningful for the `(state, agent)` pair it
    /// was enumerated for.
    type Action: Clone + Debug + PartialEq;

    /// All legal actions for `agent` in this state.
    ///
    /// The ordering must be deterministic for a given state: it decides which
    /// action wins a tie and the enumeration order at chance nodes.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;
}

/// A game that can be stepped forward by applying one agent's action.
pub trait SimulableGame: ActionEnumerableGame {
    /// The state reached when `agent` takes `action` here.
    ///
    /// Must be deterministic: the same `(state, agent, action)` triple always
    /// yields the same successor. Implementations must fail loudly (panic)
    /// when handed an action that is not legal for `agent` in this state,
    /// never return an undefined state.
    fn generate_successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;
}

/// A game that can recognize won and lost positions.
pub trait OutcomeDeterminableGame {
    /// True if the controlled agent has won. Mutually exclusive with
    /// [`is_lose`](OutcomeDeterminableGame::is_lose).
    fn is_win(&self) -> bool;

    /// True if the controlled agent has lost.
    fn is_lose(&self) -> bool;

    /// True for any terminal state.
    fn is_over(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
