//! FEN parsing and formatting.
//!
//! A thin adapter over the core: parsing builds a position through
//! [`Board::empty`], [`Board::add_piece`] and the state setters, so all
//! board invariants are maintained by the same code paths as play.

use std::str::FromStr;

use super::error::FenError;
use super::types::{file_to_index, rank_to_index, CastlingRights, Color, Piece, Square};
use super::Board;

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The clock fields are optional and default to 0 / move 1. The fullmove
    /// number is converted to the internal halfmove count (fullmove 1 with
    /// White to move = halfmove 0).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, ranks 8 down to 1
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::TooManyRanks { ranks: rank_idx + 1 });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.add_piece(Square::new(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        // Side to move
        match parts[1] {
            "w" => board.set_side_to_move(Color::White),
            "b" => board.set_side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Castling rights
        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.set_castling_rights(rights);

        // En passant target
        if parts[3] == "-" {
            board.set_en_passant_target(None);
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                board.set_en_passant_target(Some(Square::new(
                    rank_to_index(chars[1]),
                    file_to_index(chars[0]),
                )));
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        }

        // Clocks (optional)
        let fifty: u32 = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove: u32 = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);
        let halfmove = if board.side_to_move() == Color::White {
            2 * fullmove.saturating_sub(1)
        } else {
            (2 * fullmove).saturating_sub(1)
        };
        board.set_clocks(fifty, halfmove);

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.side_to_move() == Color::White {
            "w"
        } else {
            "b"
        };
        let rights = self.castling_rights();
        let mut castling = String::new();
        if rights.has(Color::White, true) {
            castling.push('K');
        }
        if rights.has(Color::White, false) {
            castling.push('Q');
        }
        if rights.has(Color::Black, true) {
            castling.push('k');
        }
        if rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.fifty_move_clock(),
            self.halfmove_count() / 2 + 1
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
