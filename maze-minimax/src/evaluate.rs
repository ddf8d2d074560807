//! The evaluation-function seam between the search and the game.

/// Scores a game state from the controlled agent's perspective.
///
/// The search calls this only at frontier nodes: terminal states, or states
/// where the depth budget ran out. Higher is better for agent 0; there are no
/// constraints on range or sign.
///
/// A blanket implementation covers plain closures, so an evaluation function
/// can be passed as `|g: &MyGame| ...` without any wrapper type.
pub trait Evaluator<G> {
    /// Score `game` for agent 0.
    fn evaluate(&self, game: &G) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> f64,
{
    fn evaluate(&self, game: &G) -> f64 {
        (self)(game)
    }
}
