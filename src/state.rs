use std::hash::Hash;

use crate::consts::Value;

/// One of the two roles in the zero-sum search. Scores are reported from a
/// fixed global perspective: positive always favors `Max`, whichever ply is
/// being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    #[inline(always)]
    pub fn flipped(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// Capability interface over a concrete game. The search engine is generic
/// over this trait only and never sees the rules engine behind it.
///
/// `Eq`/`Hash` must agree with the canonical serialized form of the
/// underlying position plus the side to move, so states can serve as map
/// keys in a future memoization layer.
pub trait GameState: Clone + Eq + Hash {
    /// Opaque move token. The engine never inspects it, only hands it back
    /// to the caller.
    type Move: Clone;

    fn side_to_move(&self) -> Side;

    /// True iff no further moves are meaningful under the game's rules.
    /// Must be side-effect free.
    fn is_terminal(&self) -> bool;

    /// For a decisive terminal, the side that achieved it. `None` for a
    /// non-decisive terminal (draw) or a non-terminal state.
    fn winner(&self) -> Option<Side>;

    /// One `(originating move, child)` pair per legal move, in the rules
    /// engine's natural enumeration order. Every child has the side to move
    /// flipped relative to `self`. The order is a contract: ties between
    /// equally-scoring moves are broken in favor of the first one generated.
    fn successors(&self) -> Vec<(Self::Move, Self)>;

    /// Heuristic score of a non-terminal position, bounded well inside the
    /// decisive-outcome magnitude. Called only at the search horizon;
    /// terminal states are scored by the engine boundary instead.
    fn evaluate(&self) -> Value;
}
