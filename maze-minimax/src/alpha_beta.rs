//! Minimax with alpha-beta pruning.
//!
//! Pruning is an optimization, never an approximation: for any game tree the
//! returned value and top-level action are identical to what
//! [`crate::minimax`] returns. Only the number of explored nodes differs.
//!
//! `alpha` is the best value the controlled agent can already guarantee on
//! the path so far, `beta` the best an opponent can already guarantee. Both
//! are threaded by value into each recursive call; sibling branches never
//! share mutable window state.

use std::fmt::Debug;

use maze_game_types::{
    AgentCountableGame, AgentIndex, OutcomeDeterminableGame, SimulableGame,
};

use crate::decision::{Decision, SearchStats};
use crate::error::SearchError;
use crate::evaluate::Evaluator;
use crate::turn;

/// Run an alpha-beta search from `game` with the given depth budget,
/// starting at the controlled agent with a full `(-inf, +inf)` window.
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
    alpha_beta_value(
        game,
        evaluator,
        depth_budget,
        AgentIndex::CONTROLLED,
        f64::NEG_INFINITY,
        f64::INFINITY,
        stats,
    )
}

fn alpha_beta_value<G, E>(
    game: &G,
    evaluator: &E,
    depth_budget: usize,
    agent: AgentIndex,
    mut alpha: f64,
    mut beta: f64,
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
        let child =
            alpha_beta_value(&successor, evaluator, next_budget, next_agent, alpha, beta, stats)?;

        // The incumbent is updated first (strict comparison, first-seen
        // tie-break), the window second, and the cutoff tests the running
        // best against the opposite bound. Keep this order: it decides which
        // sibling gets pruned first.
        if is_maximizing {
            if child.value > best_value {
                best_value = child.value;
                best_action = Some(action);
            }
            alpha = alpha.max(best_value);
            if best_value > beta {
                break;
            }
        } else {
            if child.value < best_value {
                best_value = child.value;
                best_action = Some(action);
            }
            beta = beta.min(best_value);
            if best_value < alpha {
                break;
            }
        }
    }

    Ok(Decision {
        value: best_value,
        action: best_action,
    })
}
