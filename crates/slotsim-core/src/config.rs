//! Slot machine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::symbols::SymbolSet;

/// Grid specification (columns × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of visible rows (also the number of paylines)
    pub rows: u8,
    /// Number of columns (reels)
    pub cols: u8,
}

impl GridSpec {
    /// Classic 3×3 grid
    pub fn classic_3x3() -> Self {
        Self { rows: 3, cols: 3 }
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::classic_3x3()
    }
}

/// Bet limits enforced before every spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetRules {
    /// Minimum bet per line
    pub min_bet: u64,
    /// Maximum bet per line
    pub max_bet: u64,
    /// Maximum number of paylines that can be played
    pub max_lines: u8,
}

impl Default for BetRules {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: 100,
            max_lines: 3,
        }
    }
}

/// Complete slot machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Machine name
    pub name: String,
    /// Grid specification
    #[serde(default)]
    pub grid: GridSpec,
    /// Bet limits
    #[serde(default)]
    pub bet: BetRules,
    /// Symbol table (weights and payouts)
    #[serde(default)]
    pub symbols: SymbolSet,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            name: "Classic Slot".into(),
            grid: GridSpec::default(),
            bet: BetRules::default(),
            symbols: SymbolSet::classic(),
        }
    }
}

impl SlotConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded slot config '{}' from {} ({} symbols, {}x{} grid)",
            config.name,
            path.display(),
            config.symbols.len(),
            config.grid.cols,
            config.grid.rows,
        );
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// The grid must be non-empty, the symbol set well-formed, the bet
    /// limits ordered, and each column pool large enough to fill its rows.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(EngineError::EmptyGrid {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }
        self.symbols.validate()?;
        if (self.grid.rows as usize) > self.symbols.total_weight() {
            return Err(EngineError::PoolExhausted {
                rows: self.grid.rows,
                pool_size: self.symbols.total_weight(),
            });
        }
        if self.bet.min_bet == 0 || self.bet.min_bet > self.bet.max_bet {
            return Err(EngineError::Config(format!(
                "bet limits out of order: min {} > max {}",
                self.bet.min_bet, self.bet.max_bet
            )));
        }
        if self.bet.max_lines == 0 || self.bet.max_lines > self.grid.rows {
            return Err(EngineError::Config(format!(
                "max_lines {} exceeds grid rows {}",
                self.bet.max_lines, self.grid.rows
            )));
        }
        Ok(())
    }
}
