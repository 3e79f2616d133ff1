//! Sliding-piece attack queries.
//!
//! Each query is one table lookup: mask the occupancy down to the slider's
//! line, compress it to a 6-bit index with a multiply, and project the
//! looked-up line attacks back onto the board with a final mask. The `>> 58`
//! keeps the top six bits of the product (equivalently `64 - 6`).

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use tables::{ANTIDIAG_MASKS, DIAG_MASKS, FIRST_FILE_ATTACKS, FIRST_RANK_ATTACKS};

use super::types::{Bitboard, Square};

/// Multiplying a file projected onto file a by this c2-h7 diagonal rotates
/// the six inner ranks into the top six bits.
const FILE_INDEX_DIAG: u64 = 0x0080402010080400;

/// Squares a rook-like slider on `sq` attacks along its rank.
pub(crate) fn rank_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let rank_bb = Bitboard::rank_mask(sq.rank());
    let oc = occ.and(rank_bb);
    let idx = (oc.0.wrapping_mul(Bitboard::FILE_B.0) >> 58) as usize;
    FIRST_RANK_ATTACKS[sq.file()][idx].and(rank_bb)
}

/// Squares a rook-like slider on `sq` attacks along its file.
pub(crate) fn file_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let file_bb = Bitboard::file_mask(sq.file());
    // project the file onto file a before compressing
    let oc = (occ.0 >> sq.file()) & Bitboard::FILE_A.0;
    let idx = (oc.wrapping_mul(FILE_INDEX_DIAG) >> 58) as usize;
    FIRST_FILE_ATTACKS[sq.rank()][idx].and(file_bb)
}

/// Squares a bishop-like slider on `sq` attacks along its a1-h8 diagonal.
pub(crate) fn diag_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mask = DIAG_MASKS[sq.as_index()];
    let oc = occ.and(mask);
    let idx = (oc.0.wrapping_mul(Bitboard::FILE_B.0) >> 58) as usize;
    FIRST_RANK_ATTACKS[sq.file()][idx].and(mask)
}

/// Squares a bishop-like slider on `sq` attacks along its a8-h1 antidiagonal.
pub(crate) fn antidiag_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    let mask = ANTIDIAG_MASKS[sq.as_index()];
    let oc = occ.and(mask);
    let idx = (oc.0.wrapping_mul(Bitboard::FILE_B.0) >> 58) as usize;
    FIRST_RANK_ATTACKS[sq.file()][idx].and(mask)
}
