//! EPD perft driver.
//!
//! Reads a test suite with one position per line in the form
//! `FEN;D1 20;D2 400;...`, runs perft to every listed depth up to the given
//! maximum, and prints a pass-rate summary.

use std::env;
use std::fs;
use std::process::ExitCode;

use chess_movegen::board::Board;

struct PerftCase {
    fen: String,
    depths: Vec<(usize, u64)>,
}

fn parse_line(line: &str) -> Option<PerftCase> {
    let mut fields = line.split(';');
    let fen = fields.next()?.trim().to_string();
    if fen.is_empty() {
        return None;
    }
    let mut depths = Vec::new();
    for field in fields {
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        let rest = field.strip_prefix('D')?;
        let (depth, count) = rest.split_once(' ')?;
        depths.push((depth.trim().parse().ok()?, count.trim().parse().ok()?));
    }
    Some(PerftCase { fen, depths })
}

fn run_case(case: &PerftCase, max_depth: usize) -> bool {
    println!("Position: {}", case.fen);
    let mut board = match Board::try_from_fen(&case.fen) {
        Ok(board) => board,
        Err(err) => {
            println!("Bad FEN: {err}");
            return false;
        }
    };
    for &(depth, expected) in &case.depths {
        if depth > max_depth {
            continue;
        }
        let nodes = board.perft(depth);
        println!("perft at depth {depth}: {nodes} ({expected})");
        if nodes != expected {
            return false;
        }
    }
    true
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <epd-file> <max-depth>", args[0]);
        return ExitCode::from(2);
    }
    let Ok(max_depth) = args[2].parse::<usize>() else {
        eprintln!("Maximum depth must be an integer, got '{}'", args[2]);
        return ExitCode::from(2);
    };
    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Cannot read '{}': {err}", args[1]);
            return ExitCode::from(2);
        }
    };

    let mut num_tests = 0u32;
    let mut failed_ids = Vec::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        num_tests += 1;
        println!("======= Test {num_tests} =======");
        let passed = match parse_line(line) {
            Some(case) => run_case(&case, max_depth),
            None => {
                println!("Malformed test line");
                false
            }
        };
        if !passed {
            failed_ids.push(num_tests);
        }
        println!();
    }

    println!("======= Summary =======");
    if num_tests == 0 {
        println!("No tests found");
        return ExitCode::SUCCESS;
    }
    let pass_rate =
        100.0 * f64::from(num_tests - failed_ids.len() as u32) / f64::from(num_tests);
    println!("Passrate = {pass_rate:.1}%");
    if !failed_ids.is_empty() {
        let ids: Vec<String> = failed_ids.iter().map(ToString::to_string).collect();
        println!("Failed tests: {}", ids.join(" "));
    }
    ExitCode::SUCCESS
}
