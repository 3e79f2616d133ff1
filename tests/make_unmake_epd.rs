//! Make/unmake tests in the EPD-like triple format, run through the public
//! API only.
//!
//! Each case reads `FEN_before;from to special promo;FEN_after` where
//! `special` is one of `-`, `promo`, `castle`, `ep` and `promo` one of
//! `-`, `N`, `B`, `R`, `Q`. Making the move must produce the after-position,
//! and making then unmaking must restore the before-position.

use chess_movegen::board::{Board, Move, Piece, Square};

const CASES: &[&str] = &[
    // Pawn double push grants en passant
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1;\
     e2 e4 - -;\
     rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    // Quiet knight move from Kiwipete
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1;\
     e5 c6 - -;\
     r3k2r/p1ppqpb1/bnN1pnp1/3P4/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 1 1",
    // Capture resets the fifty-move clock
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1;\
     e5 g6 - -;\
     r3k2r/p1ppqpb1/bn2pnN1/3P4/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
    // White kingside castling
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1;\
     e1 h1 castle -;\
     r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1",
    // Black queenside castling
    "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1;\
     e8 a8 castle -;\
     2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2",
    // En passant capture removes the pawn behind the target square
    "k7/8/8/8/pP6/8/8/K7 b - b3 0 1;\
     a4 b3 ep -;\
     k7/8/8/8/8/1p6/8/K7 w - - 0 2",
    // Queen promotion
    "8/P7/8/8/8/8/8/K1k5 w - - 0 1;\
     a7 a8 promo Q;\
     Q7/8/8/8/8/8/8/K1k5 b - - 0 1",
    // Knight underpromotion with capture
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8;\
     d7 c8 promo N;\
     rnNq1k1r/pp2bppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R b KQ - 0 8",
    // Rook move loses one castling right
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1;\
     h1 g1 - -;\
     r3k2r/8/8/8/8/8/8/R3K1R1 b Qkq - 1 1",
];

struct MoveTest {
    before: Board,
    mv: Move,
    after: Board,
}

fn parse_case(line: &str) -> MoveTest {
    let mut parts = line.split(';');
    let before = Board::from_fen(parts.next().expect("missing before-FEN"));
    let move_desc = parts.next().expect("missing move description").trim();
    let after = Board::from_fen(parts.next().expect("missing after-FEN"));

    let fields: Vec<&str> = move_desc.split_whitespace().collect();
    assert_eq!(fields.len(), 4, "move must be 'from to special promo'");
    let from: Square = fields[0].parse().expect("bad from-square");
    let to: Square = fields[1].parse().expect("bad to-square");
    let promo = match fields[3] {
        "-" => None,
        other => Some(Piece::from_char(other.chars().next().unwrap()).expect("bad promo piece")),
    };
    let mv = match fields[2] {
        "-" => Move::normal(from, to),
        "promo" => Move::promotion(from, to, promo.expect("promotion needs a piece")),
        "castle" => Move::castling(from, to),
        "ep" => Move::en_passant(from, to),
        other => panic!("unknown special flag '{other}'"),
    };

    MoveTest { before, mv, after }
}

#[test]
fn test_make_produces_expected_position() {
    for line in CASES {
        let case = parse_case(line);
        let mut board = case.before.clone();
        board.make_move(case.mv);
        assert_eq!(board, case.after, "make mismatch for '{line}'");
    }
}

#[test]
fn test_make_unmake_restores_position() {
    for line in CASES {
        let case = parse_case(line);
        let mut board = case.before.clone();
        board.make_move(case.mv);
        board.unmake_move(case.mv);
        assert_eq!(board, case.before, "unmake mismatch for '{line}'");
        assert_eq!(board.undo_depth(), 0);
    }
}

#[test]
fn test_moves_match_generated_encoding() {
    // The hand-built moves above must be byte-identical to the generator's
    for line in CASES {
        let case = parse_case(line);
        let mut board = case.before.clone();
        let generated = board.generate_moves();
        assert!(
            generated.iter().any(|m| m.as_u16() == case.mv.as_u16()),
            "generator does not produce {:?} in '{line}'",
            case.mv
        );
    }
}
