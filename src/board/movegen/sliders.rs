use super::super::attack_tables::{antidiag_attacks, diag_attacks, file_attacks, rank_attacks};
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square};
use super::super::Board;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    pub(crate) const fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    /// Attack set of this slider from `sq` through occupancy `occ`,
    /// two to four directional lookups.
    pub(crate) fn attacks(self, sq: Square, occ: Bitboard) -> Bitboard {
        match self {
            SliderType::Bishop => diag_attacks(sq, occ).or(antidiag_attacks(sq, occ)),
            SliderType::Rook => rank_attacks(sq, occ).or(file_attacks(sq, occ)),
            SliderType::Queen => rank_attacks(sq, occ)
                .or(file_attacks(sq, occ))
                .or(diag_attacks(sq, occ))
                .or(antidiag_attacks(sq, occ)),
        }
    }
}

impl Board {
    pub(crate) fn push_slider_moves(&self, moves: &mut MoveList, color: Color, slider: SliderType) {
        let friendly = self.color_occupancy(color);
        let occ = self.occupancy();
        for from in self.pieces_of(color, slider.piece()).iter() {
            let targets = slider.attacks(from, occ).and(friendly.not());
            for to in targets.iter() {
                moves.push(Move::normal(from, to));
            }
        }
    }
}
