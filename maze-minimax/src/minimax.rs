//! Exact adversarial search: every opponent is assumed to pick the action
//! that minimizes the controlled agent's value.

use std::fmt::Debug;

use maze_game_types::{
    AgentCountableGame, AgentIndex, OutcomeDeterminableGame, SimulableGame,
};

use crate::decision::{Decision, SearchStats};
use crate::error::SearchError;
use crate::evaluate::Evaluator;
use crate::turn;

/// Run a minimax search from `game` with the given depth budget, starting at
/// the controlled agent.
///
/// Returns the value of the root and the action agent 0 should take. The
/// action is `None` when the root is terminal or the budget is zero.
pub fn search<G, E>(
    game: &G,
    evaluator: &E,
    depth_budget: usize,
) -> Result<Decision<G::Action>, SearchError>
where
    G: AgentCountableGame + SimulableGame + OutcomeDeterminableGame,
    G::Action: Debug,
    E: Evaluator<G>,
{
    let mut stats = SearchStats::default();
    search_with_stats(game, evaluator, depth_budget, &mut stats)
}

/// Same as [`search`], but accumulates node counters into `stats`.
pub fn search_with_stats<G, E>(
    game: &G,
    evaluator: &E,
    depth_budget: usize,
    stats: &mut SearchStats,
) -> Result<Decision<G::Action>, SearchError>
where
    G: AgentCountableGame + SimulableGame + OutcomeDeterminableGame,
    G::Action: Debug,
    E: Evaluator<G>,
{
    minimax_value(game, evaluator, depth_budget, AgentIndex::CONTROLLED, stats)
}

fn minimax_value<G, E>(
    game: &G,
    evaluator: &E,
    depth_budget: usize,
    agent: AgentIndex,
    stats: &mut SearchStats,
) -> Result<Decision<G::Action>, SearchError>
where
    G: AgentCountableGame + SimulableGame + OutcomeDeterminableGame,
    G::Action: Debug,
    E: Evaluator<G>,
{
    if depth_budget == 0 || game.is_over() {
        stats.frontier_evals += 1;
        return Ok(Decision::frontier(evaluator.evaluate(game)));
    }

    let actions = game.legal_actions(agent);
    if actions.is_empty() {
        return Err(SearchError::NoLegalActions(agent));
    }
    stats.nodes_expanded += 1;

    let (next_agent, next_budget) = turn::advance(agent, depth_budget, game.num_agents());

    let is_maximizing = agent.is_controlled();
    let mut best_value = if is_maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_action = None;

    for action in actions {
        let successor = game.generate_successor(agent, &action);
        let child = minimax_value(&successor, evaluator, next_budget, next_agent, stats)?;

        // Strict comparisons: an equal value never replaces the incumbent,
        // so ties resolve to the first action in enumeration order.
        let improves = if is_maximizing {
            child.value > best_value
        } else {
            child.value < best_value
        };
        if improves {
            best_value = child.value;
            best_action = Some(action);
        }
    }

    Ok(Decision {
        value: best_value,
        action: best_action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{chain_tree, scenario_tree, tie_tree};
    use maze_game_types::scripted::{GameTree, ScriptedGame};

    fn eval(game: &ScriptedGame) -> f64 {
        game.score()
    }

    #[test]
    fn picks_the_branch_with_the_best_guaranteed_value() {
        // L guarantees 3, R guarantees 7.
        let game = scenario_tree();
        let decision = search(&game, &eval, 1).unwrap();
        assert_eq!(decision.value, 7.0);
        assert_eq!(decision.action, Some("R"));
    }

    #[test]
    fn equal_values_resolve_to_the_first_action_enumerated() {
        let game = tie_tree(5.0);
        let decision = search(&game, &eval, 1).unwrap();
        assert_eq!(decision.value, 5.0);
        assert_eq!(decision.action, Some("A"));
    }

    #[test]
    fn terminal_roots_short_circuit_to_the_evaluation() {
        let mut tree = GameTree::new(2);
        let root = tree.win(42.0);
        let game = tree.build(root);

        let mut stats = SearchStats::default();
        let decision = search_with_stats(&game, &eval, 3, &mut stats).unwrap();
        assert_eq!(decision.value, 42.0);
        assert_eq!(decision.action, None);
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.frontier_evals, 1);
    }

    #[test]
    fn a_zero_budget_evaluates_the_root_in_place() {
        let game = scenario_tree();
        let decision = search(&game, &eval, 0).unwrap();
        assert_eq!(decision.value, game.score());
        assert_eq!(decision.action, None);
    }

    #[test]
    fn one_depth_unit_spans_a_decision_from_every_agent() {
        // Three agents on a single-path chain scored 0, 10, 20, .. by ply.
        // Budget d must stop exactly d * num_agents plies in.
        let game = chain_tree(3, 6);

        let mut stats = SearchStats::default();
        let depth_one = search_with_stats(&game, &eval, 1, &mut stats).unwrap();
        assert_eq!(depth_one.value, 30.0);
        assert_eq!(stats.nodes_expanded, 3);
        assert_eq!(stats.frontier_evals, 1);

        let depth_two = search(&game, &eval, 2).unwrap();
        assert_eq!(depth_two.value, 60.0);
    }

    #[test]
    fn a_stuck_non_terminal_state_is_a_precondition_violation() {
        let mut tree = GameTree::new(2);
        let root = tree.node(0.0);
        let stuck = tree.node(1.0);
        tree.edge(root, "L", stuck);
        let game = tree.build(root);

        let err = search(&game, &eval, 1).unwrap_err();
        assert_eq!(err, SearchError::NoLegalActions(AgentIndex(1)));
    }
}
