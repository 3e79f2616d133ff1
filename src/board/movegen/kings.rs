use super::super::attack_tables::{
    antidiag_attacks, diag_attacks, file_attacks, rank_attacks, KING_ATTACKS, KNIGHT_ATTACKS,
    PAWN_ATTACKS,
};
use super::super::state::castling_move;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square, CASTLING_SIDES};
use super::super::Board;

impl Board {
    pub(crate) fn push_king_moves(&self, moves: &mut MoveList, color: Color) {
        let friendly = self.color_occupancy(color);
        for from in self.pieces_of(color, Piece::King).iter() {
            let targets = KING_ATTACKS[from.as_index()].and(friendly.not());
            for to in targets.iter() {
                moves.push(Move::normal(from, to));
            }
        }
    }

    /// Emit one castling candidate per right the mover still holds.
    ///
    /// A candidate requires the rook and king paths to be clear of every
    /// piece except the involved king and rook themselves, and no square of
    /// the king's path (origin and destination included) to be attacked.
    /// The attack test reads the diagram as-is, so a post-make check test is
    /// still required for exotic setups; the legality filter provides it.
    pub(crate) fn push_castling_moves(&self, moves: &mut MoveList, color: Color) {
        for (side_color, kingside) in CASTLING_SIDES {
            if side_color != color || !self.castling_rights.has(color, kingside) {
                continue;
            }
            if self.is_castling_path_free(color, kingside) {
                moves.push(castling_move(self, color, kingside));
            }
        }
    }

    fn is_castling_path_free(&self, color: Color, kingside: bool) -> bool {
        let king_from = self.original_king_square(color);
        let rook_from = self.original_rook_square(color, kingside);
        let king_path = self.king_path(color, kingside);
        let rook_path = self.rook_path(color, kingside);

        // Everything on the board except the castling pieces themselves
        let others = self
            .occupancy()
            .xor(Bitboard::from_square(king_from))
            .xor(Bitboard::from_square(rook_from));
        if rook_path.or(king_path).intersects(others) {
            return false;
        }

        let opponent = color.opponent();
        for sq in king_path.iter() {
            if self.is_square_attacked(sq, opponent) {
                return false;
            }
        }
        true
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(color, Piece::King);
        if kings.is_empty() {
            None
        } else {
            Some(kings.lsb())
        }
    }

    /// Bitboard of `color`'s pieces attacking `sq`.
    ///
    /// Uses the reverse-lookup symmetry: launch each piece's attack pattern
    /// *from* the target square and intersect with that piece type. Pawns
    /// are the asymmetric case - a pawn of `color` attacks `sq` exactly when
    /// a pawn of the opposite color on `sq` would attack the pawn's square.
    #[must_use]
    pub fn attackers_to(&self, sq: Square, color: Color) -> Bitboard {
        let occ = self.occupancy();
        let idx = sq.as_index();
        let queens = self.pieces_of(color, Piece::Queen);

        let mut attackers = KING_ATTACKS[idx].and(self.pieces_of(color, Piece::King));
        attackers = attackers.or(KNIGHT_ATTACKS[idx].and(self.pieces_of(color, Piece::Knight)));
        attackers = attackers.or(
            diag_attacks(sq, occ)
                .or(antidiag_attacks(sq, occ))
                .and(self.pieces_of(color, Piece::Bishop).or(queens)),
        );
        attackers = attackers.or(
            rank_attacks(sq, occ)
                .or(file_attacks(sq, occ))
                .and(self.pieces_of(color, Piece::Rook).or(queens)),
        );
        attackers = attackers.or(
            PAWN_ATTACKS[color.opponent().index()][idx].and(self.pieces_of(color, Piece::Pawn)),
        );
        attackers
    }

    /// Returns true if any piece of `color` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, color: Color) -> bool {
        !self.attackers_to(sq, color).is_empty()
    }

    /// Returns true if `color`'s king is attacked by the other side.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
