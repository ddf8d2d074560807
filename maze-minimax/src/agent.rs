//! The top-level entry point: pick an action for the controlled agent.

use std::fmt::Debug;
use std::marker::PhantomData;

use derivative::Derivative;
use itertools::Itertools;
use maze_game_types::{
    AgentCountableGame, AgentIndex, OutcomeDeterminableGame, SimulableGame,
};
use tracing::{debug, info, info_span};

use crate::decision::{Decision, SearchStats};
use crate::error::SearchError;
use crate::evaluate::Evaluator;
use crate::{alpha_beta, expectimax, minimax};

/// Which search variant a [`SearchAgent`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Exact adversarial search.
    Minimax,
    /// Exact adversarial search with pruning. Same answers, fewer nodes.
    AlphaBeta,
    /// Opponents modeled as uniform chance nodes.
    Expectimax,
}

#[derive(Debug, Clone, Copy)]
/// Configuration for a [`SearchAgent`], fixed for the lifetime of a search
/// invocation.
///
/// The defaults (as implemented by [`Default`]) are two full rounds of
/// lookahead with plain minimax.
pub struct AgentOptions {
    /// How many full rounds to look ahead.
    ///
    /// One round is a decision from every agent, so this costs
    /// `depth * num_agents` plies of tree.
    pub depth: usize,
    /// Which search variant to run.
    pub algorithm: Algorithm,
}

impl Default for AgentOptions {
    fn default() -> Self {
        AgentOptions {
            depth: 2,
            algorithm: Algorithm::Minimax,
        }
    }
}

/// Wraps an evaluation function and some [`AgentOptions`] into something that
/// can pick moves, emitting traces via the [tracing] crate.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct SearchAgent<G, E> {
    #[derivative(Debug = "ignore")]
    evaluator: E,
    name: &'static str,
    options: AgentOptions,
    #[derivative(Debug = "ignore")]
    _game: PhantomData<fn(&G)>,
}

impl<G, E> SearchAgent<G, E>
where
    G: AgentCountableGame + SimulableGame + OutcomeDeterminableGame,
    G::Action: Debug,
    E: Evaluator<G>,
{
    /// Construct a new `SearchAgent`.
    ///
    /// The evaluator can be any [`Evaluator`], including a plain closure:
    ///
    /// ```rust
    /// use maze_game_types::scripted::ScriptedGame;
    /// use maze_minimax::{AgentOptions, SearchAgent};
    ///
    /// let agent = SearchAgent::new(
    ///     |g: &ScriptedGame| g.score(),
    ///     "scripted",
    ///     AgentOptions::default(),
    /// );
    /// # let _ = agent;
    /// ```
    pub fn new(evaluator: E, name: &'static str, options: AgentOptions) -> Self {
        SearchAgent {
            evaluator,
            name,
            options,
            _game: PhantomData,
        }
    }

    /// Pick the next action for the controlled agent.
    ///
    /// Runs the configured algorithm to the configured depth and returns the
    /// chosen root action. Errors if the game hands a moving agent no legal
    /// actions, or if there was nothing to decide because the root is
    /// terminal or the depth is zero.
    pub fn choose_action(&self, game: &G) -> Result<G::Action, SearchError> {
        info_span!(
            "adversarial_search",
            agent_name = self.name,
            algorithm = ?self.options.algorithm,
            depth = self.options.depth,
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
        )
        .in_scope(|| {
            let legal = game.legal_actions(AgentIndex::CONTROLLED);
            debug!(
                actions = %legal.iter().map(|a| format!("{a:?}")).join("/"),
                "root actions"
            );

            let mut stats = SearchStats::default();
            let decision = self.search_with_stats(game, &mut stats)?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_value", decision.value);
            if let Some(action) = &decision.action {
                current_span.record("chosen_action", format!("{action:?}").as_str());
            }
            info!(
                nodes_expanded = stats.nodes_expanded,
                frontier_evals = stats.frontier_evals,
                "search complete"
            );

            decision.action.ok_or(SearchError::NoActionChosen)
        })
    }

    /// Run the configured search and return the root value and action.
    pub fn search(&self, game: &G) -> Result<Decision<G::Action>, SearchError> {
        let mut stats = SearchStats::default();
        self.search_with_stats(game, &mut stats)
    }

    /// Same as [`SearchAgent::search`], but accumulates node counters into
    /// `stats`.
    pub fn search_with_stats(
        &self,
        game: &G,
        stats: &mut SearchStats,
    ) -> Result<Decision<G::Action>, SearchError> {
        let depth = self.options.depth;
        match self.options.algorithm {
            Algorithm::Minimax => minimax::search_with_stats(game, &self.evaluator, depth, stats),
            Algorithm::AlphaBeta => {
                alpha_beta::search_with_stats(game, &self.evaluator, depth, stats)
            }
            Algorithm::Expectimax => {
                expectimax::search_with_stats(game, &self.evaluator, depth, stats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::scenario_tree;
    use maze_game_types::scripted::{GameTree, ScriptedGame};

    fn agent(algorithm: Algorithm) -> SearchAgent<ScriptedGame, fn(&ScriptedGame) -> f64> {
        fn eval(game: &ScriptedGame) -> f64 {
            game.score()
        }
        SearchAgent::new(eval, "tester", AgentOptions {
            depth: 1,
            algorithm,
        })
    }

    #[test]
    fn every_algorithm_agrees_on_a_clear_cut_position() {
        let game = scenario_tree();
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Expectimax] {
            assert_eq!(agent(algorithm).choose_action(&game).unwrap(), "R");
        }
    }

    #[test]
    fn a_terminal_root_leaves_nothing_to_decide() {
        let mut tree = GameTree::new(2);
        let root = tree.win(1.0);
        let game = tree.build(root);

        let err = agent(Algorithm::Minimax).choose_action(&game).unwrap_err();
        assert_eq!(err, SearchError::NoActionChosen);
    }

    #[test]
    fn the_debug_output_skips_the_evaluator() {
        let rendered = format!("{:?}", agent(Algorithm::AlphaBeta));
        assert!(rendered.contains("tester"));
    }
}
