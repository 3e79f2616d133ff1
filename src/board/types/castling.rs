//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The four basic castlings in FEN `KQkq` order; the position's castling
/// geometry arrays are indexed the same way.
pub(crate) const CASTLING_SIDES: [(Color, bool); 4] = [
    (Color::White, true),
    (Color::White, false),
    (Color::Black, true),
    (Color::Black, false),
];

/// Castling rights represented as a bitmask (bit order `KQkq`, K least significant)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Returns true if no castling right is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both of a color's castling rights (king moved or castled)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0 &= match color {
            Color::White => !(CASTLE_WHITE_K | CASTLE_WHITE_Q),
            Color::Black => !(CASTLE_BLACK_K | CASTLE_BLACK_Q),
        }
    }

    /// Remove a right by its `KQkq` index (0-3)
    #[inline]
    pub(crate) fn remove_index(&mut self, idx: usize) {
        self.0 &= !(1 << idx);
    }

    /// The `KQkq` index (0-3) of a basic castling right
    #[inline]
    #[must_use]
    pub(crate) const fn index(color: Color, kingside: bool) -> usize {
        match (color, kingside) {
            (Color::White, true) => 0,
            (Color::White, false) => 1,
            (Color::Black, true) => 2,
            (Color::Black, false) => 3,
        }
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
