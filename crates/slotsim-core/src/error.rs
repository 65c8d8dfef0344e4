//! Engine error types

/// Errors raised by the slot engine.
///
/// Every variant is a configuration or contract violation: a misconfigured
/// symbol table or a caller that skipped input validation. None of these are
/// recoverable at runtime, so callers propagate them instead of retrying.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("symbol set is empty")]
    EmptySymbolSet,

    #[error("duplicate symbol id: {0}")]
    DuplicateSymbol(u32),

    #[error("symbol {0} has zero weight")]
    ZeroWeight(u32),

    #[error("grid needs {rows} rows but the column pool only holds {pool_size} symbols")]
    PoolExhausted { rows: u8, pool_size: usize },

    #[error("symbol {0} appears on the grid but not in the payout table")]
    UnknownSymbol(u32),

    #[error("active lines must be in 1..={max}, got {got}")]
    InvalidLineCount { got: u8, max: u8 },

    #[error("bet per line must be in {min}..={max}, got {got}")]
    InvalidBet { got: u64, min: u64, max: u64 },

    #[error("grid dimensions must be non-zero (rows={rows}, cols={cols})")]
    EmptyGrid { rows: u8, cols: u8 },

    #[error("config error: {0}")]
    Config(String),
}
