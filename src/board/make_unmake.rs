//! Making and unmaking moves.
//!
//! `make_move` assumes the move is valid for the position (as produced by the
//! generator); it always succeeds and must leave the board consistent.
//! `unmake_move` is the exact inverse, driven by the move and the popped
//! undo record. Feeding either a move that does not match the position is a
//! programmer error.

use super::state::{CASTLE_KING_TO, CASTLE_ROOK_TO};
use super::types::{bit_for_square, CastlingRights, Color, Move, Piece, Square};
use super::{Board, UnmakeInfo};

impl Board {
    /// Make a move, updating all state and pushing an undo record.
    pub fn make_move(&mut self, mv: Move) {
        if mv.is_castling() {
            return self.make_castling_move(mv);
        }

        let from = mv.from();
        let to = mv.to();
        let color = self.side_to_move;
        let (_, piece) = self.piece_at(from).expect("make_move: from-square empty");

        // Remove the mover from its origin
        self.by_color[color.index()].0 ^= bit_for_square(from);
        self.by_type[piece.index()].0 ^= bit_for_square(from);
        self.mailbox[from.as_index()] = None;

        // Regular captures and en passant are handled separately
        let captured = self.piece_at(to);
        if let Some((cap_color, cap_piece)) = captured {
            self.by_color[cap_color.index()].0 ^= bit_for_square(to);
            self.by_type[cap_piece.index()].0 ^= bit_for_square(to);
        }
        if mv.is_en_passant() {
            // The captured pawn sits one rank behind the arrival square
            let cap_sq = if color == Color::White {
                to.south()
            } else {
                to.north()
            };
            let opp = color.opponent();
            self.by_color[opp.index()].0 ^= bit_for_square(cap_sq);
            self.by_type[Piece::Pawn.index()].0 ^= bit_for_square(cap_sq);
            self.mailbox[cap_sq.as_index()] = None;
            // No captured piece in the undo record; the ep flag is sufficient.
        }

        // Place the mover, switching type on promotion
        let placed = mv.promotion_piece().unwrap_or(piece);
        self.by_color[color.index()].0 ^= bit_for_square(to);
        self.by_type[placed.index()].0 ^= bit_for_square(to);
        self.mailbox[to.as_index()] = Some((color, placed));

        // Save irreversible state *before* updating it
        self.undo_stack.push(UnmakeInfo {
            captured,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            fifty_move_clock: self.fifty_move_clock,
        });

        // A double pawn push grants en passant on the square in between
        self.en_passant_target = if piece == Piece::Pawn
            && from.rank() == color.pawn_start_rank()
            && to.rank() == color.pawn_double_rank()
        {
            Some(Square::from_index((from.as_index() + to.as_index()) / 2))
        } else {
            None
        };

        // Castling rights are lost when the king leaves its original square
        // or a rook leaves one of the four original rook squares.
        if piece == Piece::King && from == self.original_king_squares[color.index()] {
            self.castling_rights.remove_color(color);
        } else if piece == Piece::Rook {
            for (idx, &rook_sq) in self.original_rook_squares.iter().enumerate() {
                if from == rook_sq {
                    self.castling_rights.remove_index(idx);
                }
            }
        }
        // A right is also lost when the relevant rook is captured on its
        // original square. A strict FIDE reading disagrees, but this matches
        // what other engines (and FEN) assume.
        if let Some((_, Piece::Rook)) = captured {
            for (idx, &rook_sq) in self.original_rook_squares.iter().enumerate() {
                if to == rook_sq {
                    self.castling_rights.remove_index(idx);
                }
            }
        }

        self.side_to_move = self.side_to_move.opponent();
        if captured.is_some() || piece == Piece::Pawn {
            self.fifty_move_clock = 0;
        } else {
            self.fifty_move_clock += 1;
        }
        self.halfmove_count += 1;
    }

    /// Unmake a move, restoring the state saved by the matching `make_move`.
    pub fn unmake_move(&mut self, mv: Move) {
        if mv.is_castling() {
            return self.unmake_castling_move(mv);
        }

        // The retracting side is the one that just lost the move
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;

        let info = self.undo_stack.pop().expect("unmake_move: empty undo stack");
        self.castling_rights = info.castling_rights;
        self.en_passant_target = info.en_passant_target;
        self.fifty_move_clock = info.fifty_move_clock;
        self.halfmove_count -= 1;

        let from = mv.from();
        let to = mv.to();
        let (_, piece) = self.piece_at(to).expect("unmake_move: to-square empty");

        // Put the mover back on its origin, reverting promotions to a pawn
        if mv.is_promotion() {
            self.by_color[color.index()].0 ^= bit_for_square(from) ^ bit_for_square(to);
            self.by_type[piece.index()].0 ^= bit_for_square(to);
            self.by_type[Piece::Pawn.index()].0 ^= bit_for_square(from);
            self.mailbox[from.as_index()] = Some((color, Piece::Pawn));
        } else {
            self.by_color[color.index()].0 ^= bit_for_square(from) ^ bit_for_square(to);
            self.by_type[piece.index()].0 ^= bit_for_square(from) ^ bit_for_square(to);
            self.mailbox[from.as_index()] = Some((color, piece));
        }

        // Put back the captured piece, if any (for en passant this is None)
        if let Some((cap_color, cap_piece)) = info.captured {
            self.by_color[cap_color.index()].0 ^= bit_for_square(to);
            self.by_type[cap_piece.index()].0 ^= bit_for_square(to);
        }
        self.mailbox[to.as_index()] = info.captured;

        if mv.is_en_passant() {
            let cap_sq = if color == Color::White {
                to.south()
            } else {
                to.north()
            };
            let opp = color.opponent();
            self.by_color[opp.index()].0 ^= bit_for_square(cap_sq);
            self.by_type[Piece::Pawn.index()].0 ^= bit_for_square(cap_sq);
            self.mailbox[cap_sq.as_index()] = Some((opp, Piece::Pawn));
        }
    }

    /// The king/rook destinations for the castling a move encodes, looked up
    /// from the mover and the relative position of the two origin squares
    /// (east = higher index, so king-east-of-rook means queenside).
    fn castling_destinations(color: Color, mv: Move) -> (Square, Square) {
        let kingside = mv.from() < mv.to();
        let idx = CastlingRights::index(color, kingside);
        (CASTLE_KING_TO[idx], CASTLE_ROOK_TO[idx])
    }

    fn make_castling_move(&mut self, mv: Move) {
        let color = self.side_to_move;
        let king_from = mv.from();
        let rook_from = mv.to();
        let (king_to, rook_to) = Self::castling_destinations(color, mv);

        // Move king and rook in one xor each; coinciding squares cancel,
        // which is exactly right when a piece is already on its destination.
        self.by_color[color.index()].0 ^= bit_for_square(king_from)
            ^ bit_for_square(rook_from)
            ^ bit_for_square(king_to)
            ^ bit_for_square(rook_to);
        self.by_type[Piece::King.index()].0 ^= bit_for_square(king_from) ^ bit_for_square(king_to);
        self.by_type[Piece::Rook.index()].0 ^= bit_for_square(rook_from) ^ bit_for_square(rook_to);
        self.mailbox[king_from.as_index()] = None;
        self.mailbox[rook_from.as_index()] = None;
        self.mailbox[king_to.as_index()] = Some((color, Piece::King));
        self.mailbox[rook_to.as_index()] = Some((color, Piece::Rook));

        self.undo_stack.push(UnmakeInfo {
            captured: None,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            fifty_move_clock: self.fifty_move_clock,
        });

        self.en_passant_target = None;
        self.castling_rights.remove_color(color);
        self.side_to_move = self.side_to_move.opponent();
        self.fifty_move_clock += 1;
        self.halfmove_count += 1;
    }

    fn unmake_castling_move(&mut self, mv: Move) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;
        let king_from = mv.from();
        let rook_from = mv.to();
        let (king_to, rook_to) = Self::castling_destinations(color, mv);

        let info = self.undo_stack.pop().expect("unmake_move: empty undo stack");
        self.castling_rights = info.castling_rights;
        self.en_passant_target = info.en_passant_target;
        self.fifty_move_clock = info.fifty_move_clock;
        self.halfmove_count -= 1;

        self.by_color[color.index()].0 ^= bit_for_square(king_from)
            ^ bit_for_square(rook_from)
            ^ bit_for_square(king_to)
            ^ bit_for_square(rook_to);
        self.by_type[Piece::King.index()].0 ^= bit_for_square(king_from) ^ bit_for_square(king_to);
        self.by_type[Piece::Rook.index()].0 ^= bit_for_square(rook_from) ^ bit_for_square(rook_to);
        self.mailbox[king_to.as_index()] = None;
        self.mailbox[rook_to.as_index()] = None;
        self.mailbox[king_from.as_index()] = Some((color, Piece::King));
        self.mailbox[rook_from.as_index()] = Some((color, Piece::Rook));
    }
}
