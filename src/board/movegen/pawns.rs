use super::super::attack_tables::PAWN_ATTACKS;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use super::super::Board;

/// Push a pawn arrival, expanding into the four promotions on the last rank.
fn push_pawn_target(moves: &mut MoveList, from: Square, to: Square, promotion_rank: Bitboard) {
    if promotion_rank.contains(to) {
        for piece in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, piece));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

impl Board {
    /// Pawn captures, single and double pushes, and promotions.
    /// En passant is generated separately.
    pub(crate) fn push_pawn_moves(&self, moves: &mut MoveList, color: Color) {
        let enemy = self.color_occupancy(color.opponent());
        let occ = self.occupancy();
        let promotion_rank = Bitboard::rank_mask(color.pawn_promotion_rank());
        let start_rank = Bitboard::rank_mask(color.pawn_start_rank());

        for from in self.pieces_of(color, Piece::Pawn).iter() {
            // Captures (and capture promotions)
            let captures = PAWN_ATTACKS[color.index()][from.as_index()].and(enemy);
            for to in captures.iter() {
                push_pawn_target(moves, from, to, promotion_rank);
            }

            // Single push (and push promotions)
            let from_bb = Bitboard::from_square(from);
            let single = if color == Color::White {
                from_bb.shift_north()
            } else {
                from_bb.shift_south()
            };
            if single.and(occ).is_empty() {
                push_pawn_target(moves, from, single.lsb(), promotion_rank);

                // Double push from the starting rank
                if from_bb.intersects(start_rank) {
                    let double = if color == Color::White {
                        single.shift_north()
                    } else {
                        single.shift_south()
                    };
                    if double.and(occ).is_empty() {
                        moves.push(Move::normal(from, double.lsb()));
                    }
                }
            }
        }
    }

    /// Pseudo-legal en passant captures: at most two pawns can reach the
    /// target square. A capture that exposes the king (the horizontally
    /// pinned-pair case) is removed by the legality filter, not here.
    pub(crate) fn push_en_passant_moves(&self, moves: &mut MoveList, color: Color) {
        let Some(to) = self.en_passant_target else {
            return;
        };
        let ep_bb = Bitboard::from_square(to);
        let candidates = if color == Color::White {
            ep_bb.shift_sw().or(ep_bb.shift_se())
        } else {
            ep_bb.shift_nw().or(ep_bb.shift_ne())
        };
        for from in candidates.and(self.pieces_of(color, Piece::Pawn)).iter() {
            moves.push(Move::en_passant(from, to));
        }
    }
}
