//! Shared scripted-tree fixtures for the algorithm tests.

use maze_game_types::scripted::{GameTree, NodeId, ScriptedGame};
use rand::rngs::StdRng;
use rand::Rng;

/// Two-agent, depth-1 scenario: agent 0 picks L or R, the opponent then
/// picks the worst leaf. L guarantees 3, R guarantees 7.
pub(crate) fn scenario_tree() -> ScriptedGame {
    let mut tree = GameTree::new(2);
    let root = tree.node(0.0);
    let after_l = tree.node(0.0);
    let after_r = tree.node(0.0);
    tree.edge(root, "L", after_l);
    tree.edge(root, "R", after_r);

    let l_lo = tree.node(3.0);
    let l_hi = tree.node(9.0);
    tree.edge(after_l, "x", l_lo);
    tree.edge(after_l, "y", l_hi);

    let r_lo = tree.node(7.0);
    let r_hi = tree.node(8.0);
    tree.edge(after_r, "x", r_lo);
    tree.edge(after_r, "y", r_hi);

    tree.build(root)
}

/// Two root actions "A" and "B" that both lead to the same guaranteed value.
pub(crate) fn tie_tree(value: f64) -> ScriptedGame {
    let mut tree = GameTree::new(2);
    let root = tree.node(0.0);
    for label in ["A", "B"] {
        let mid = tree.node(0.0);
        tree.edge(root, label, mid);
        let leaf = tree.node(value);
        tree.edge(mid, "only", leaf);
    }
    tree.build(root)
}

/// A single-path chain of `plies` moves for `num_agents` agents, with the
/// node reached after ply `i` scored `i * 10`.
pub(crate) fn chain_tree(num_agents: usize, plies: usize) -> ScriptedGame {
    let mut tree = GameTree::new(num_agents);
    let root = tree.node(0.0);
    let mut current = root;
    for ply in 1..=plies {
        let next = tree.node(ply as f64 * 10.0);
        tree.edge(current, "go", next);
        current = next;
    }
    tree.build(root)
}

const LABELS: [&str; 4] = ["a", "b", "c", "d"];

/// A random game tree plus the depth budget that exactly covers it.
///
/// Every non-terminal path runs `num_agents * rounds` plies deep, so a
/// search with budget `rounds` bottoms out exactly at the leaves. A small
/// fraction of interior positions are scripted as early wins or losses.
pub(crate) fn random_tree(rng: &mut StdRng) -> (ScriptedGame, usize) {
    let num_agents = rng.gen_range(1..=3);
    let rounds = rng.gen_range(1..=2);
    let mut tree = GameTree::new(num_agents);
    let root = tree.node(0.0);
    grow(&mut tree, rng, root, num_agents * rounds);
    (tree.build(root), rounds)
}

fn grow(tree: &mut GameTree, rng: &mut StdRng, from: NodeId, plies_left: usize) {
    if plies_left == 0 {
        return;
    }
    let branching = rng.gen_range(1..=3);
    for label in LABELS.iter().take(branching).copied() {
        let score = rng.gen_range(-50..=50) as f64;
        if rng.gen_ratio(1, 12) {
            let terminal = if rng.gen() {
                tree.win(score)
            } else {
                tree.lose(score)
            };
            tree.edge(from, label, terminal);
        } else {
            let child = tree.node(score);
            tree.edge(from, label, child);
            grow(tree, rng, child, plies_left - 1);
        }
    }
}
