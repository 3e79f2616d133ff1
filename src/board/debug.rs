//! Debug-build consistency checks.

use super::types::{Bitboard, Color, Piece, Square};
use super::Board;

#[cfg(debug_assertions)]
impl Board {
    /// Panics unless the mailbox and bitboards tell the same story.
    ///
    /// Checks, for every square, that the mailbox entry matches exactly one
    /// color bitboard and one piece-type bitboard (or none of each), that
    /// the color bitboards are disjoint, and that each side has one king.
    pub fn validate(&self) {
        assert!(
            self.by_color[0].and(self.by_color[1]).is_empty(),
            "color bitboards overlap"
        );
        for (i, a) in self.by_type.iter().enumerate() {
            for b in &self.by_type[i + 1..] {
                assert!(a.and(*b).is_empty(), "piece-type bitboards overlap");
            }
        }

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let bb = Bitboard::from_square(sq);
            match self.piece_at(sq) {
                None => {
                    assert!(
                        !self.occupancy().intersects(bb),
                        "mailbox empty but bitboards occupied at {sq}"
                    );
                }
                Some((color, piece)) => {
                    assert!(
                        self.by_color[color.index()].contains(sq),
                        "mailbox has {color} {piece:?} at {sq} but color bitboard disagrees"
                    );
                    assert!(
                        self.by_type[piece.index()].contains(sq),
                        "mailbox has {color} {piece:?} at {sq} but type bitboard disagrees"
                    );
                }
            }
        }

        for color in Color::BOTH {
            assert_eq!(
                self.pieces_of(color, Piece::King).popcount(),
                1,
                "{color} must have exactly one king"
            );
        }
    }

    /// Print a bitboard as an 8x8 grid, rank 8 at the top.
    pub fn print_bitboard_grid(label: &str, bb: Bitboard) {
        println!("{} {:#018x}", label, bb.0);
        for rank in (0..8).rev() {
            print!("{} ", rank + 1);
            for file in 0..8 {
                let ch = if bb.contains(Square::new(rank, file)) {
                    '1'
                } else {
                    '.'
                };
                print!(" {ch}");
            }
            println!();
        }
        println!("   a b c d e f g h");
    }
}
