//! Paylines and line evaluation.

use super::symbols::{Symbol, SymbolInfo};

/// Number of reels.
pub const REELS: usize = 5;
/// Number of rows.
pub const ROWS: usize = 3;

/// A spin result, indexed `grid[reel][row]`.
pub type Grid = [[Symbol; ROWS]; REELS];

/// A grid position as `(row, reel)`.
pub type Position = (usize, usize);

/// A payline: one position per reel, read left to right.
pub type Payline = [Position; REELS];

/// Default paylines.
pub const PAYLINES: [Payline; 7] = [
    // rows
    [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)],
    [(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)],
    // V and ^
    [(0, 0), (1, 1), (2, 2), (1, 3), (0, 4)],
    [(2, 0), (1, 1), (0, 2), (1, 3), (2, 4)],
    // zigzags
    [(0, 0), (1, 1), (0, 2), (1, 3), (0, 4)],
    [(2, 0), (1, 1), (2, 2), (1, 3), (2, 4)],
];

/// Minimum run for a line to pay.
pub const MIN_MATCH: usize = 3;

/// A paying line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineWin {
    /// Index into the payline set.
    pub line: usize,
    /// Symbol the run pays as.
    pub symbol: Symbol,
    /// Length of the run from the left.
    pub count: usize,
    /// Amount paid.
    pub payout: usize,
}

/// Multiplier for a run of `count`.
#[must_use]
pub const fn count_multiplier(count: usize) -> usize {
    match count {
        4 => 3,
        5 => 10,
        _ => 1,
    }
}

/// Finds the left-anchored run on a line.
///
/// A leading Wild takes the identity of the first non-wild symbol on the
/// line. Wilds extend any run.
#[must_use]
pub fn line_run(symbols: &[Symbol; REELS]) -> (Symbol, usize) {
    let mut kind = symbols[0];
    if kind == Symbol::Wild {
        kind = symbols
            .iter()
            .copied()
            .find(|&s| s != Symbol::Wild)
            .unwrap_or(Symbol::Wild);
    }

    let mut count = 1;
    for &symbol in &symbols[1..] {
        if symbol == kind || symbol == Symbol::Wild || kind == Symbol::Wild {
            count += 1;
            if kind == Symbol::Wild && symbol != Symbol::Wild {
                kind = symbol;
            }
        } else {
            break;
        }
    }

    (kind, count)
}

/// Evaluates one payline, returning a win when the run pays.
#[must_use]
pub fn evaluate_line(
    grid: &Grid,
    index: usize,
    line: &Payline,
    table: &[SymbolInfo],
    bet: usize,
) -> Option<LineWin> {
    let symbols = line.map(|(row, reel)| grid[reel][row]);
    let (symbol, count) = line_run(&symbols);
    if count < MIN_MATCH {
        return None;
    }

    let value = symbol.info(table).map_or(0, |s| s.value);
    let payout = value * count_multiplier(count) * bet;
    (payout > 0).then_some(LineWin {
        line: index,
        symbol,
        count,
        payout,
    })
}

/// Counts `symbol` anywhere on the grid.
#[must_use]
pub fn count_symbol(grid: &Grid, symbol: Symbol) -> usize {
    grid.iter().flatten().filter(|&&s| s == symbol).count()
}
