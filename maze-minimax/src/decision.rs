//! What a search hands back up the tree.

/// The result of evaluating one search node.
///
/// The action is the one the moving agent would take at that node. It is
/// `None` at frontier nodes and at expectimax chance nodes, where nothing is
/// chosen; only the top-level maximizing call's action is ever consumed by
/// callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// Value of the node from the controlled agent's perspective.
    pub value: f64,
    /// The chosen action, if this node was a decision point.
    pub action: Option<A>,
}

impl<A> Decision<A> {
    /// A frontier result: just a value, no decision was made.
    pub(crate) fn frontier(value: f64) -> Self {
        Decision {
            value,
            action: None,
        }
    }
}

/// Counters describing how much work one search invocation did.
///
/// `nodes_expanded` counts nodes whose successors were generated;
/// `frontier_evals` counts calls to the evaluation function. Alpha-beta
/// never exceeds minimax on either counter for the same input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successor states were generated.
    pub nodes_expanded: u64,
    /// Evaluation-function calls at the search frontier.
    pub frontier_evals: u64,
}
