//! Legal move generation and perft.
//!
//! Pseudo-legal moves are emitted per piece family, then filtered by the
//! simplest correct legality test: play the move, check whether the mover's
//! own king is attacked, retract. Faster filters (pin detection, king-danger
//! maps) would be drop-in replacements as long as they produce the same set.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::types::{Move, MoveList};
use super::Board;

impl Board {
    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        self.push_king_moves(&mut moves, color);
        self.push_knight_moves(&mut moves, color);
        self.push_slider_moves(&mut moves, color, SliderType::Bishop);
        self.push_slider_moves(&mut moves, color, SliderType::Rook);
        self.push_slider_moves(&mut moves, color, SliderType::Queen);
        self.push_pawn_moves(&mut moves, color);
        self.push_en_passant_moves(&mut moves, color);
        self.push_castling_moves(&mut moves, color);
        moves
    }

    /// Generate all legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let pseudo = self.generate_pseudo_moves();
        let mut legal = MoveList::new();
        for &mv in &pseudo {
            self.make_move(mv);
            if !self.is_in_check(color) {
                legal.push(mv);
            }
            self.unmake_move(mv);
        }
        legal
    }

    /// Count the leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv);
        }
        nodes
    }

    /// Perft split by root move, for debugging divergent counts.
    #[must_use]
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.generate_moves();
        let mut results = Vec::with_capacity(moves.len());
        for &mv in &moves {
            self.make_move(mv);
            results.push((mv, self.perft(depth - 1)));
            self.unmake_move(mv);
        }
        results
    }
}
