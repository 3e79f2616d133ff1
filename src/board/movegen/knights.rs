use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::types::{Color, Move, MoveList, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn push_knight_moves(&self, moves: &mut MoveList, color: Color) {
        let friendly = self.color_occupancy(color);
        for from in self.pieces_of(color, Piece::Knight).iter() {
            let targets = KNIGHT_ATTACKS[from.as_index()].and(friendly.not());
            for to in targets.iter() {
                moves.push(Move::normal(from, to));
            }
        }
    }
}
