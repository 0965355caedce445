use crate::consts::{Value, DRAW, INF, MATE};
use crate::state::{GameState, Side};

/// Outcome of one search call. `best_move` is `None` exactly when the state
/// handed in was already terminal or the depth bound was zero: no move was
/// chosen because none needed to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub score: Value,
    pub best_move: Option<M>,
}

/// Caller-facing entry point: seeds the window with the sentinel bounds and
/// the maximizing flag from the state's own side to move.
pub fn find_best_move<S: GameState>(state: &S, max_depth: u8) -> SearchResult<S::Move> {
    alpha_beta(
        state,
        0,
        -INF,
        INF,
        state.side_to_move() == Side::Max,
        max_depth,
    )
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// - `alpha`: best score the maximizing side can already guarantee
///   elsewhere in the tree.
/// - `beta`: best score the minimizing side can already guarantee.
/// - `depth` counts plies from the root of this call; the horizon is
///   `depth == max_depth`.
///
/// Scores are global-perspective at every ply: positive favors `Side::Max`
/// no matter whose turn it is. Among equally-scoring moves the first one in
/// generation order is kept (strict-improvement tie-break). Pruning only
/// ever cuts iteration short; unexamined siblings cannot change the minimax
/// value back at the parent, so the partial `best`/`best_move` is correct.
pub fn alpha_beta<S: GameState>(
    state: &S,
    depth: u8,
    mut alpha: Value,
    mut beta: Value,
    maximizing: bool,
    max_depth: u8,
) -> SearchResult<S::Move> {
    if state.is_terminal() {
        return SearchResult {
            score: terminal_score(state),
            best_move: None,
        };
    }
    if depth == max_depth {
        return SearchResult {
            score: state.evaluate(),
            best_move: None,
        };
    }

    let mut best_move = None;

    if maximizing {
        let mut best = -INF;
        for (mv, child) in state.successors() {
            let eval = alpha_beta(&child, depth + 1, alpha, beta, false, max_depth);

            if eval.score > best {
                best = eval.score;
                best_move = Some(mv);
            }

            alpha = alpha.max(eval.score);
            if alpha >= beta {
                break;
            }
        }
        SearchResult {
            score: best,
            best_move,
        }
    } else {
        let mut best = INF;
        for (mv, child) in state.successors() {
            let eval = alpha_beta(&child, depth + 1, alpha, beta, true, max_depth);

            if eval.score < best {
                best = eval.score;
                best_move = Some(mv);
            }

            beta = beta.min(eval.score);
            if alpha >= beta {
                break;
            }
        }
        SearchResult {
            score: best,
            best_move,
        }
    }
}

/// Leaf scoring of a terminal state, owned by the engine boundary rather
/// than the evaluator: a decisive outcome scores MATE for the winner, any
/// non-decisive terminal scores exactly zero.
#[inline(always)]
fn terminal_score<S: GameState>(state: &S) -> Value {
    match state.winner() {
        Some(Side::Max) => MATE,
        Some(Side::Min) => -MATE,
        None => DRAW,
    }
}
