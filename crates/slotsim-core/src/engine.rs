//! Slot engine — spin orchestration and session statistics

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::SlotConfig;
use crate::error::EngineError;
use crate::paytable::PayTable;
use crate::reels::spin_reels;
use crate::spin::SpinOutcome;

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_bet: u64,
    pub total_win: u64,
    pub wins: u64,
    pub losses: u64,
    pub max_win: u64,
}

impl SessionStats {
    /// Return-to-player percentage
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            (self.total_win as f64 / self.total_bet as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Percentage of spins that won something
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Slot engine
///
/// Owns the configuration, paytable and RNG, and runs the two core steps of
/// every spin in sequence: reel generation, then payline evaluation. Holds
/// no per-spin state; each spin draws from fresh column pools.
pub struct SlotEngine {
    config: SlotConfig,
    paytable: PayTable,
    rng: StdRng,
    spin_count: u64,
    stats: SessionStats,
}

impl SlotEngine {
    /// Create an engine with the classic configuration
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(SlotConfig::default())
    }

    /// Create an engine with a specific configuration.
    ///
    /// The configuration is validated up front; a table that cannot fill the
    /// grid is rejected here rather than mid-spin.
    pub fn with_config(config: SlotConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let paytable = PayTable::new(config.symbols.clone());
        Ok(Self {
            config,
            paytable,
            rng: StdRng::from_os_rng(),
            spin_count: 0,
            stats: SessionStats::default(),
        })
    }

    /// Seed the RNG for reproducible sessions
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Current configuration
    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Session stats so far
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session stats and the spin counter
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
        self.spin_count = 0;
    }

    /// Execute one spin: validate the bet, draw the grid, evaluate lines.
    ///
    /// `lines` and `bet_per_line` are checked against the configured bet
    /// rules; callers normally validate user input before getting here, so a
    /// rejection means a contract violation, not a prompt retry.
    pub fn spin(&mut self, lines: u8, bet_per_line: u64) -> Result<SpinOutcome, EngineError> {
        let rules = self.config.bet;
        if lines == 0 || lines > rules.max_lines {
            return Err(EngineError::InvalidLineCount {
                got: lines,
                max: rules.max_lines,
            });
        }
        if bet_per_line < rules.min_bet || bet_per_line > rules.max_bet {
            return Err(EngineError::InvalidBet {
                got: bet_per_line,
                min: rules.min_bet,
                max: rules.max_bet,
            });
        }

        self.spin_count += 1;
        let grid = spin_reels(self.config.grid, &self.config.symbols, &mut self.rng)?;
        let eval = self.paytable.evaluate(&grid, lines, bet_per_line)?;
        let outcome = SpinOutcome::new(self.spin_count, grid, lines, bet_per_line, eval);

        log::debug!(
            "spin {}: bet {}x{} lines, won {} on lines {:?}",
            outcome.spin_id,
            bet_per_line,
            lines,
            outcome.total_win,
            outcome.winning_lines(),
        );

        self.update_stats(&outcome);
        Ok(outcome)
    }

    fn update_stats(&mut self, outcome: &SpinOutcome) {
        self.stats.total_spins += 1;
        self.stats.total_bet += outcome.total_bet;
        self.stats.total_win += outcome.total_win;
        if outcome.is_win() {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }
        self.stats.max_win = self.stats.max_win.max(outcome.total_win);
    }
}
