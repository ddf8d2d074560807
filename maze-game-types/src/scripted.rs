//! A table-driven game for tests and benches.
//!
//! The whole game tree is declared up front through [`GameTree`]: every node
//! carries a score and an outcome tag, and edges carry the action labels the
//! search will see. This makes it cheap to write positions where the correct
//! minimax/expectimax value is known by hand, and to generate random trees
//! for property tests.

use std::sync::Arc;

use crate::agent::AgentIndex;
use crate::game::{
    ActionEnumerableGame, AgentCountableGame, OutcomeDeterminableGame, SimulableGame,
};

/// Whether a scripted node is an ordinary position or a terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Play continues below this node.
    Ongoing,
    /// The controlled agent has won here.
    Win,
    /// The controlled agent has lost here.
    Lose,
}

#[derive(Debug, Clone)]
struct Node {
    score: f64,
    outcome: Outcome,
    edges: Vec<(&'static str, usize)>,
}

/// Handle to a node in a [`GameTree`] under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Builder for scripted game trees.
#[derive(Debug)]
pub struct GameTree {
    num_agents: usize,
    nodes: Vec<Node>,
}

impl GameTree {
    /// Start a tree for a game with `num_agents` agents.
    pub fn new(num_agents: usize) -> Self {
        assert!(num_agents >= 1, "a game needs at least one agent");
        GameTree {
            num_agents,
            nodes: vec![],
        }
    }

    /// Add an ordinary node with the given evaluation score.
    pub fn node(&mut self, score: f64) -> NodeId {
        self.push(score, Outcome::Ongoing)
    }

    /// Add a winning terminal node.
    pub fn win(&mut self, score: f64) -> NodeId {
        self.push(score, Outcome::Win)
    }

    /// Add a losing terminal node.
    pub fn lose(&mut self, score: f64) -> NodeId {
        self.push(score, Outcome::Lose)
    }

    fn push(&mut self, score: f64, outcome: Outcome) -> NodeId {
        self.nodes.push(Node {
            score,
            outcome,
            edges: vec![],
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Connect `from` to `to` under the action `label`.
    ///
    /// Edges are enumerated in insertion order, which is the order the search
    /// sees them in. Terminal nodes must stay leaves.
    pub fn edge(&mut self, from: NodeId, label: &'static str, to: NodeId) {
        assert!(to.0 < self.nodes.len(), "unknown target node");
        let node = &mut self.nodes[from.0];
        assert_eq!(
            node.outcome,
            Outcome::Ongoing,
            "terminal nodes cannot have successors"
        );
        assert!(
            node.edges.iter().all(|(existing, _)| *existing != label),
            "duplicate action label {label:?}"
        );
        node.edges.push((label, to.0));
    }

    /// Finish the tree, producing a game positioned at `root`.
    pub fn build(self, root: NodeId) -> ScriptedGame {
        assert!(root.0 < self.nodes.len(), "unknown root node");
        ScriptedGame {
            tree: Arc::new(self),
            node: root.0,
        }
    }
}

/// A game whose entire tree was spelled out through a [`GameTree`].
///
/// Cloning is cheap: all clones share the same immutable tree and only differ
/// in which node they currently sit on.
#[derive(Debug, Clone)]
pub struct ScriptedGame {
    tree: Arc<GameTree>,
    node: usize,
}

impl ScriptedGame {
    /// The score scripted for the current node.
    ///
    /// Intended as the evaluation function in tests:
    /// `|g: &ScriptedGame| g.score()`.
    pub fn score(&self) -> f64 {
        self.tree.nodes[self.node].score
    }

    /// The outcome tag of the current node.
    pub fn outcome(&self) -> Outcome {
        self.tree.nodes[self.node].outcome
    }
}

impl AgentCountableGame for ScriptedGame {
    fn num_agents(&self) -> usize {
        self.tree.num_agents
    }
}

impl ActionEnumerableGame for ScriptedGame {
    type Action = &'static str;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<&'static str> {
        self.tree.nodes[self.node]
            .edges
            .iter()
            .map(|(label, _)| *label)
            .collect()
    }
}

impl SimulableGame for ScriptedGame {
    fn generate_successor(&self, agent: AgentIndex, action: &Self::Action) -> Self {
        let node = &self.tree.nodes[self.node];
        let (_, to) = node
            .edges
            .iter()
            .find(|(label, _)| label == action)
            .unwrap_or_else(|| panic!("action {action:?} is not legal for agent {agent} here"));
        ScriptedGame {
            tree: Arc::clone(&self.tree),
            node: *to,
        }
    }
}

impl OutcomeDeterminableGame for ScriptedGame {
    fn is_win(&self) -> bool {
        self.outcome() == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.outcome() == Outcome::Lose
    }
}
