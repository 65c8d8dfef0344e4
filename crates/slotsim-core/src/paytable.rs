//! Paytable and payline evaluation

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::reels::SpinGrid;
use crate::symbols::SymbolSet;

/// A win on a single payline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    /// 1-based payline number (row + 1)
    pub line: u8,
    /// Winning symbol ID
    pub symbol_id: u32,
    /// Symbol name
    pub symbol_name: String,
    /// Win amount (payout × bet per line)
    pub win_amount: u64,
}

/// Result of evaluating a grid against the active paylines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEvaluation {
    /// Individual line wins, in increasing line order
    pub line_wins: Vec<LineWin>,
    /// Total win amount (0 if no line hit)
    pub total_win: u64,
}

impl LineEvaluation {
    /// Check if any line hit
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }

    /// Winning 1-based line numbers, in increasing order
    pub fn winning_lines(&self) -> Vec<u8> {
        self.line_wins.iter().map(|w| w.line).collect()
    }
}

/// Payout table derived from a symbol set.
///
/// Paylines are the horizontal rows: line `n` (1-based) hits when every
/// column shows the same symbol at row `n - 1`.
#[derive(Debug, Clone)]
pub struct PayTable {
    symbols: SymbolSet,
}

impl PayTable {
    /// Build a paytable from a symbol set
    pub fn new(symbols: SymbolSet) -> Self {
        Self { symbols }
    }

    /// Borrow the symbol set
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Evaluate the first `active_lines` paylines of a grid.
    ///
    /// Only rows below `active_lines` are checked; a row beyond the active
    /// count is ignored even when its symbols match (you only win on lines
    /// you paid for). Pure function: same inputs, same result.
    pub fn evaluate(
        &self,
        grid: &SpinGrid,
        active_lines: u8,
        bet_per_line: u64,
    ) -> Result<LineEvaluation, EngineError> {
        let rows = grid.rows() as u8;
        if active_lines == 0 || active_lines > rows {
            return Err(EngineError::InvalidLineCount {
                got: active_lines,
                max: rows,
            });
        }
        if bet_per_line == 0 {
            return Err(EngineError::InvalidBet {
                got: 0,
                min: 1,
                max: u64::MAX,
            });
        }

        let mut line_wins = Vec::new();
        let mut total_win = 0u64;

        for row in 0..active_lines as usize {
            let Some(reference) = grid.symbol_at(0, row) else {
                continue;
            };
            let uniform = grid
                .columns()
                .iter()
                .all(|col| col.get(row) == Some(&reference));
            if !uniform {
                continue;
            }

            let symbol = self
                .symbols
                .get(reference)
                .ok_or(EngineError::UnknownSymbol(reference))?;
            let win_amount = symbol.payout * bet_per_line;
            total_win += win_amount;
            line_wins.push(LineWin {
                line: row as u8 + 1,
                symbol_id: symbol.id,
                symbol_name: symbol.name.clone(),
                win_amount,
            });
        }

        Ok(LineEvaluation {
            line_wins,
            total_win,
        })
    }
}
