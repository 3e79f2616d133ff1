mod attack_tables;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{Bitboard, CastlingRights, Color, Move, MoveList, Piece, Square};
