use once_cell::sync::Lazy;
use pleco::{
    core::mono_traits::{BlackType, PlayerTrait, WhiteType},
    BitBoard, Board, PieceType,
};

use crate::consts::{
    Value, BISHOP_VALUE, CENTER_BONUS, KING_ATTACKER_PENALTY, KNIGHT_POS, KNIGHT_VALUE,
    MOBILITY_UNIT, PAWN_POS, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};

// d4, e4, d5, e5
static CENTER_BB: Lazy<BitBoard> =
    Lazy::new(|| BitBoard((1 << 27) | (1 << 28) | (1 << 35) | (1 << 36)));

pub struct BasicEvaluator<'a> {
    board: &'a Board,
    all_bb: BitBoard,
}

impl<'a> BasicEvaluator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            all_bb: board.piece_bb_both_players(PieceType::All),
        }
    }

    /// White-centric evaluation: positive is good for White.
    pub fn white_score(&mut self) -> Value {
        self.score_player::<WhiteType>() - self.score_player::<BlackType>()
    }

    fn score_player<P: PlayerTrait>(&mut self) -> Value {
        let mut score = 0;

        score += self.score_material::<P>();
        score += self.score_center_control::<P>();
        score += self.score_mobility::<P>();
        score += self.score_king_safety::<P>();

        score
    }

    /// Raw material plus placement tables for pawns and knights.
    fn score_material<P: PlayerTrait>(&self) -> Value {
        let player = P::player();
        let mut sum = 0;

        sum += self.board.count_piece(player, PieceType::P) as Value * PAWN_VALUE;
        sum += self.board.count_piece(player, PieceType::N) as Value * KNIGHT_VALUE;
        sum += self.board.count_piece(player, PieceType::B) as Value * BISHOP_VALUE;
        sum += self.board.count_piece(player, PieceType::R) as Value * ROOK_VALUE;
        sum += self.board.count_piece(player, PieceType::Q) as Value * QUEEN_VALUE;

        let mut pawns = self.board.piece_bb(player, PieceType::P);
        while let Some((sq, _bb)) = pawns.pop_some_lsb_and_bit() {
            sum += PAWN_POS[player as usize][sq.0 as usize];
        }

        let mut knights = self.board.piece_bb(player, PieceType::N);
        while let Some((sq, _bb)) = knights.pop_some_lsb_and_bit() {
            sum += KNIGHT_POS[sq.0 as usize];
        }

        sum
    }

    /// A piece standing on one of the four central squares is worth extra.
    fn score_center_control<P: PlayerTrait>(&self) -> Value {
        let mine = self.board.get_occupied_player(P::player()) & *CENTER_BB;
        mine.count_bits() as Value * CENTER_BONUS
    }

    /// Attacked empty squares per non-pawn piece. Attack bitboards give the
    /// differential without handing either side an extra turn.
    fn score_mobility<P: PlayerTrait>(&self) -> Value {
        let player = P::player();
        let empty_squares = !self.all_bb;
        let mut total = 0;

        for (sq, piece) in self.board.get_piece_locations() {
            if piece.type_of() == PieceType::None || piece.type_of() == PieceType::P {
                continue;
            }
            if piece.player_lossy() != player {
                continue;
            }
            let attacks = self.board.attacks_from(piece.type_of(), sq, player) & empty_squares;
            total += attacks.count_bits() as Value * MOBILITY_UNIT;
        }

        total
    }

    /// Penalty per enemy piece bearing on our king's square.
    fn score_king_safety<P: PlayerTrait>(&self) -> Value {
        let player = P::player();
        let enemy = player.other_player();
        let king_sq = self.board.king_sq(player);

        let attackers =
            self.board.attackers_to(king_sq, self.all_bb) & self.board.get_occupied_player(enemy);

        -(attackers.count_bits() as Value * KING_ATTACKER_PENALTY)
    }
}
