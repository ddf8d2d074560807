//! Round-robin turn order and depth accounting, shared by all three search
//! variants.

use maze_game_types::AgentIndex;

/// Advance the turn order by one ply.
///
/// Returns the agent that moves next and the depth budget to search it with.
/// The budget counts full rounds, not plies: it decrements exactly when
/// control returns to agent 0 and is untouched on every other transition.
///
/// Pure and total; a budget of zero stays at zero.
pub fn advance(agent: AgentIndex, depth_budget: usize, num_agents: usize) -> (AgentIndex, usize) {
    let next = agent.next(num_agents);
    let next_budget = if next.is_controlled() {
        depth_budget.saturating_sub(1)
    } else {
        depth_budget
    };
    (next, next_budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_drops_only_when_control_returns_to_agent_zero() {
        assert_eq!(advance(AgentIndex(0), 3, 4), (AgentIndex(1), 3));
        assert_eq!(advance(AgentIndex(1), 3, 4), (AgentIndex(2), 3));
        assert_eq!(advance(AgentIndex(2), 3, 4), (AgentIndex(3), 3));
        assert_eq!(advance(AgentIndex(3), 3, 4), (AgentIndex(0), 2));
    }

    #[test]
    fn single_agent_games_spend_one_round_per_ply() {
        assert_eq!(advance(AgentIndex(0), 3, 1), (AgentIndex(0), 2));
    }

    #[test]
    fn an_exhausted_budget_stays_exhausted() {
        assert_eq!(advance(AgentIndex(0), 0, 1), (AgentIndex(0), 0));
    }
}
