//! Throughput table for the core operations on square boards.
//!
//! `BIGBOARD_ITERATIONS` overrides the per-operation iteration count. Build
//! with `--features profile,hotpath` to get per-function timings as well.

use std::env;
use std::hint::black_box;
use std::time::Instant;

use bigboard::Bigboard;
use log::{info, warn};

/// Side lengths of the boards to time.
const SIZES: [usize; 5] = [3, 8, 13, 20, 100];

const DEFAULT_ITERATIONS: usize = 1_000_000;

const HEADERS: [&str; 8] = [
    "Board Size",
    "AND",
    "OR",
    "XOR",
    "LEFT",
    "RIGHT",
    "Average",
    "Avg. ops/ms",
];

type Op = fn(&Bigboard, usize) -> Bigboard;

#[hotpath::measure]
fn and(board: &Bigboard, i: usize) -> Bigboard {
    board.and_word(i as u64)
}

#[hotpath::measure]
fn or(board: &Bigboard, i: usize) -> Bigboard {
    board.or_word(i as u64)
}

#[hotpath::measure]
fn xor(board: &Bigboard, i: usize) -> Bigboard {
    board.xor_word(i as u64)
}

#[hotpath::measure]
fn left(board: &Bigboard, i: usize) -> Bigboard {
    board.left(i)
}

#[hotpath::measure]
fn right(board: &Bigboard, i: usize) -> Bigboard {
    board.right(i)
}

/// Seconds taken to feed a board through `op` `iterations` times, after an
/// equally long warmup.
fn time(side: usize, iterations: usize, op: Op) -> f64 {
    let mut board = Bigboard::new(side, side);
    for i in 0..iterations {
        board = op(black_box(&board), i);
    }

    let start = Instant::now();
    for i in 0..iterations {
        board = op(black_box(&board), i);
    }
    let elapsed = start.elapsed().as_secs_f64();
    black_box(board);
    elapsed
}

fn iterations() -> usize {
    match env::var("BIGBOARD_ITERATIONS") {
        Ok(raw) => match raw.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!("ignoring BIGBOARD_ITERATIONS={raw:?}, using {DEFAULT_ITERATIONS}");
                DEFAULT_ITERATIONS
            }
        },
        Err(_) => DEFAULT_ITERATIONS,
    }
}

#[hotpath::main]
fn main() {
    env_logger::init();

    let iterations = iterations();
    info!("{iterations} iterations per operation, {iterations} warmup iterations");

    let header: String = HEADERS.iter().map(|h| format!("{h:<13}")).collect();
    println!("{header}");
    println!("{}", "=".repeat(header.len()));

    let ops: [Op; 5] = [and, or, xor, left, right];
    for side in SIZES {
        let times: Vec<f64> = ops.iter().map(|&op| time(side, iterations, op)).collect();
        let average = times.iter().sum::<f64>() / times.len() as f64;
        let ops_per_ms = iterations as f64 / average / 1000.0;

        let row: String = times
            .iter()
            .chain([average, ops_per_ms].iter())
            .map(|t| format!("{t:<13.5}"))
            .collect();
        println!("{:<13}{row}", format!("{side}x{side}"));
    }
}
