use pleco::{Board, Player};

use crate::consts::{Value, EVAL_LIMIT, TEMPO_BONUS};

mod basic_eval;

/// Static evaluation of a non-terminal position.
///
/// White-centric: positive favors White no matter whose turn it is, which is
/// the sign convention the search expects at every ply. Pure function of the
/// position and side to move; clamped so no heuristic score can reach the
/// decisive-outcome magnitude.
pub fn eval_board(board: &Board) -> Value {
    let mut evaluator = basic_eval::BasicEvaluator::new(board);
    let mut res = evaluator.white_score();

    // Small edge for the side to move.
    if board.turn() == Player::White {
        res += TEMPO_BONUS;
    } else {
        res -= TEMPO_BONUS;
    }

    res.clamp(-EVAL_LIMIT, EVAL_LIMIT)
}
