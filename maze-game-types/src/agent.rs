use std::fmt;

/// Identifies one agent in a turn-alternating game.
///
/// Index 0 is always the controlled agent, the one the search maximizes for.
/// Indices 1 and up are opponents. Agents move in fixed round-robin order:
/// `0, 1, .., num_agents - 1, 0, ..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgentIndex(
    /// Zero-based position in the turn order.
    pub usize,
);

impl AgentIndex {
    /// The controlled agent always sits at index 0.
    pub const CONTROLLED: AgentIndex = AgentIndex(0);

    /// True for the controlled (maximizing) agent.
    pub fn is_controlled(self) -> bool {
        self.0 == 0
    }

    /// The agent that moves after this one in round-robin order.
    pub fn next(self, num_agents: usize) -> AgentIndex {
        AgentIndex((self.0 + 1) % num_agents)
    }
}

impl fmt::Display for AgentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
