//! Spin outcome

use serde::{Deserialize, Serialize};

use crate::paytable::{LineEvaluation, LineWin};
use crate::reels::SpinGrid;

/// Complete outcome of one spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Spin number within the session (1-based)
    pub spin_id: u64,
    /// Final grid
    pub grid: SpinGrid,
    /// Number of lines played
    pub lines: u8,
    /// Bet per line
    pub bet_per_line: u64,
    /// Total amount wagered (bet × lines)
    pub total_bet: u64,
    /// Total win (0 on a losing spin)
    pub total_win: u64,
    /// Individual line wins
    pub line_wins: Vec<LineWin>,
}

impl SpinOutcome {
    /// Assemble an outcome from a grid and its evaluation
    pub fn new(
        spin_id: u64,
        grid: SpinGrid,
        lines: u8,
        bet_per_line: u64,
        eval: LineEvaluation,
    ) -> Self {
        Self {
            spin_id,
            grid,
            lines,
            bet_per_line,
            total_bet: bet_per_line * lines as u64,
            total_win: eval.total_win,
            line_wins: eval.line_wins,
        }
    }

    /// Winning 1-based line numbers, in increasing order
    pub fn winning_lines(&self) -> Vec<u8> {
        self.line_wins.iter().map(|w| w.line).collect()
    }

    /// Did any line hit?
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }

    /// Net outcome: winnings minus total wager. Negative on a loss.
    pub fn net(&self) -> i64 {
        self.total_win as i64 - self.total_bet as i64
    }
}
