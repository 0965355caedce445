use lazy_static::lazy_static;
use pleco::core::masks::{FILE_CNT, PLAYER_CNT, RANK_CNT, SQ_CNT};

pub type Value = i16;

//SEARCH BOUND CONSTANTS

/// Sentinel search bound. Strictly outside every reachable score, so the
/// first child examined always replaces it.
pub const INF: Value = 30_000;
/// Score of a decisive terminal, from the winner's point of view.
pub const MATE: Value = 25_000;
/// Score of any non-decisive terminal (stalemate, insufficient material,
/// claimable draw).
pub const DRAW: Value = 0;

/// The static evaluator is clamped to (-EVAL_LIMIT, EVAL_LIMIT). Keeping a
/// gap below MATE means no heuristic pile-up can be mistaken for a mate.
pub const EVAL_LIMIT: Value = 20_000;

//PIECE EVALUATION CONSTANTS
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 300;
pub const BISHOP_VALUE: Value = 300;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;

//EVALUATION PATTERN CONSTANTS
pub const CENTER_BONUS: Value = 20;
pub const MOBILITY_UNIT: Value = 5;
pub const KING_ATTACKER_PENALTY: Value = 50;
pub const TEMPO_BONUS: Value = 10;

lazy_static! {
    /// Pawn placement scores, indexed [player][square].
    pub static ref PAWN_POS: [[Value; SQ_CNT]; PLAYER_CNT] = [
        flatten(flip(PAWN_POS_EVAL)),
        flatten(PAWN_POS_EVAL),
    ];
    /// Knight placement scores. The table is vertically symmetric, so one
    /// copy serves both players.
    pub static ref KNIGHT_POS: [Value; SQ_CNT] = flatten(KNIGHT_POS_EVAL);
}

/// The evaluation of pawns given their position on the board
const PAWN_POS_EVAL: [[Value; FILE_CNT]; RANK_CNT] = [
    [  0,  0,  0,  0,  0,  0,  0,  0 ], //RANK 8
    [ 50, 50, 50, 50, 50, 50, 50, 50 ],
    [ 10, 10, 20, 30, 30, 20, 10, 10 ],
    [  5,  5, 10, 25, 25, 10,  5,  5 ],
    [  0,  0,  0, 20, 20,  0,  0,  0 ],
    [  5, -5,-10,  0,  0,-10, -5,  5 ],
    [  5, 10, 10,-20,-20, 10, 10,  5 ],
    [  0,  0,  0,  0,  0,  0,  0,  0 ], //RANK 1
];

/// The evaluation of a knight position
const KNIGHT_POS_EVAL: [[Value; FILE_CNT]; RANK_CNT] = [
    [  0,  0,  0,  0,  0,  0,  0,  0 ], //RANK 8
    [  0,  4,  8, 10, 10,  8,  4,  0 ],
    [  0, 10, 20, 20, 20, 20, 10,  0 ],
    [  0, 10, 20, 20, 20, 20, 10,  0 ],
    [  0, 10, 20, 20, 20, 20, 10,  0 ],
    [  0, 10, 20, 20, 20, 20, 10,  0 ],
    [  0,  4,  8, 10, 10,  8,  4,  0 ],
    [  0,  0,  0,  0,  0,  0,  0,  0 ], //RANK 1
];

//  Flips the board, so rank_1 becomes rank_8, rank_8 becomes rank_1, rank_2 becomes rank_7, etc
fn flip(arr: [[Value; FILE_CNT]; RANK_CNT]) -> [[Value; FILE_CNT]; RANK_CNT] {
    let mut new_arr: [[Value; FILE_CNT]; RANK_CNT] = [[0; FILE_CNT]; RANK_CNT];
    for i in 0..RANK_CNT {
        new_arr[i] = arr[7 - i];
    }
    new_arr
}

// Flattens 2D array to a singular 1D array
fn flatten(arr: [[Value; FILE_CNT]; RANK_CNT]) -> [Value; SQ_CNT] {
    let mut new_arr: [Value; SQ_CNT] = [0; SQ_CNT];
    for i in 0..SQ_CNT {
        new_arr[i] = arr[i / 8][i % 8];
    }
    new_arr
}
