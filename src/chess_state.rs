use std::fmt;
use std::hash::{Hash, Hasher};

use pleco::board::FenBuildError;
use pleco::{BitMove, Board, PieceType, Player};

use crate::consts::Value;
use crate::evaluation::eval_board;
use crate::state::{GameState, Side};

/// A chess position plus side to move, wrapping the rules engine behind the
/// generic search interface. White is the maximizing side.
///
/// The board is never mutated in place: every transition clones first and
/// applies the move to the copy, so sibling branches in the search tree can
/// never observe each other's state.
pub struct ChessState {
    board: Board,
    /// Zobrist keys of the positions seen since the last irreversible move
    /// (capture or pawn push), oldest first, current position last. Only
    /// these can still recur, so the list is cleared whenever the halfmove
    /// clock resets.
    repetitions: Vec<u64>,
}

impl ChessState {
    pub fn start_pos() -> Self {
        Self::wrap(Board::start_pos(), &[])
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenBuildError> {
        Ok(Self::wrap(Board::from_fen(fen)?, &[]))
    }

    fn wrap(board: Board, parent_repetitions: &[u64]) -> Self {
        let mut repetitions = if board.rule_50() == 0 {
            Vec::new()
        } else {
            parent_repetitions.to_vec()
        };
        repetitions.push(board.zobrist());
        ChessState { board, repetitions }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Canonical serialization, also the basis of equality and hashing.
    pub fn fen(&self) -> String {
        self.board.fen()
    }

    /// Applies a move known to be legal, producing the next state.
    pub fn make_move(&self, mv: BitMove) -> ChessState {
        let mut board = self.board.shallow_clone();
        board.apply_move(mv);
        Self::wrap(board, &self.repetitions)
    }

    /// Applies a move given in UCI text ("e2e4", "a7a8q"). Returns `None`
    /// for malformed input or a move outside the legal set.
    pub fn apply_uci(&self, uci: &str) -> Option<ChessState> {
        let mut board = self.board.shallow_clone();
        if board.apply_uci_move(uci) {
            Some(Self::wrap(board, &self.repetitions))
        } else {
            None
        }
    }

    /// The current position has occurred three times since the last
    /// irreversible move.
    fn threefold_repetition(&self) -> bool {
        let key = self.board.zobrist();
        self.repetitions.iter().filter(|&&k| k == key).count() >= 3
    }

    #[inline(always)]
    fn side_of(player: Player) -> Side {
        match player {
            Player::White => Side::Max,
            Player::Black => Side::Min,
        }
    }

    /// K vs K, or at most one minor piece on the board besides the kings.
    fn insufficient_material(&self) -> bool {
        let mut minors = 0;
        for player in [Player::White, Player::Black] {
            if self.board.count_piece(player, PieceType::P) > 0
                || self.board.count_piece(player, PieceType::R) > 0
                || self.board.count_piece(player, PieceType::Q) > 0
            {
                return false;
            }
            minors += self.board.count_piece(player, PieceType::N)
                + self.board.count_piece(player, PieceType::B);
        }
        minors <= 1
    }
}

impl Clone for ChessState {
    fn clone(&self) -> Self {
        ChessState {
            board: self.board.shallow_clone(),
            repetitions: self.repetitions.clone(),
        }
    }
}

impl fmt::Debug for ChessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChessState").field(&self.board.fen()).finish()
    }
}

impl PartialEq for ChessState {
    fn eq(&self, other: &Self) -> bool {
        self.board.fen() == other.board.fen()
    }
}
impl Eq for ChessState {}

impl Hash for ChessState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.fen().hash(state);
    }
}

impl GameState for ChessState {
    type Move = BitMove;

    fn side_to_move(&self) -> Side {
        Self::side_of(self.board.turn())
    }

    /// Claimable draws (fifty-move rule, threefold repetition) are honored
    /// eagerly at every node, not just at the game level.
    fn is_terminal(&self) -> bool {
        self.board.checkmate()
            || self.board.stalemate()
            || self.board.rule_50() >= 100
            || self.threefold_repetition()
            || self.insufficient_material()
    }

    fn winner(&self) -> Option<Side> {
        if self.board.checkmate() {
            // The mated side is the one to move.
            Some(Self::side_of(self.board.turn()).flipped())
        } else {
            None
        }
    }

    fn successors(&self) -> Vec<(BitMove, ChessState)> {
        let moves = self.board.generate_moves();
        let mut children = Vec::with_capacity(moves.len());
        for mv in &moves {
            children.push((mv, self.make_move(mv)));
        }
        children
    }

    fn evaluate(&self) -> Value {
        eval_board(&self.board)
    }
}
