//! Expectation-folding search: opponents are chance nodes, not adversaries.
//!
//! The maximizing branch is identical to [`crate::minimax`]. Every other
//! agent is modeled as choosing uniformly at random among its legal actions,
//! so its node value is the arithmetic mean of its children instead of the
//! minimum. Useful against opponents that do not actually play optimally.

use std::fmt::Debug;

use maze_game_types::{
    AgentCountableGame, AgentIndex, OutcomeDeterminableGame, SimulableGame,
};

use crate::decision::{Decision, SearchStats};
use crate::error::SearchError;
use crate::evaluate::Evaluator;
use crate::turn;

/// Run an expectimax search from `game` with the given depth budget,
/// starting at the controlled agent.
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
    expectimax_value(game, evaluator, depth_budget, AgentIndex::CONTROLLED, stats)
}

fn expectimax_value<G, E>(
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

    // The emptiness check doubles as the guard for the division below; a
    // chance node always averages over at least one action.
    let actions = game.legal_actions(agent);
    if actions.is_empty() {
        return Err(SearchError::NoLegalActions(agent));
    }
    stats.nodes_expanded += 1;

    let (next_agent, next_budget) = turn::advance(agent, depth_budget, game.num_agents());

    if agent.is_controlled() {
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;

        for action in actions {
            let successor = game.generate_successor(agent, &action);
            let child = expectimax_value(&successor, evaluator, next_budget, next_agent, stats)?;
            if child.value > best_value {
                best_value = child.value;
                best_action = Some(action);
            }
        }

        Ok(Decision {
            value: best_value,
            action: best_action,
        })
    } else {
        let count = actions.len();
        let mut total = 0.0;
        for action in &actions {
            let successor = game.generate_successor(agent, action);
            total += expectimax_value(&successor, evaluator, next_budget, next_agent, stats)?.value;
        }

        // Nothing is chosen at a chance node, so the action slot stays empty.
        Ok(Decision::frontier(total / count as f64))
    }
}
