//! # slotsim-core — Slot machine engine
//!
//! Weighted reel spins and payline evaluation for a classic 3×3 slot
//! machine, with configurable symbol tables, bet rules and grid dimensions.
//!
//! ## Architecture
//!
//! ```text
//! SlotEngine
//!     │
//!     ├── SlotConfig (grid, bet rules, symbol table)
//!     ├── PayTable (symbol payouts, line matching)
//!     └── StdRng (seedable)
//!           │
//!           v
//!     spin_reels → SpinGrid → PayTable::evaluate → SpinOutcome
//! ```
//!
//! Each spin draws every column from its own fresh pool (each symbol
//! repeated per its weight, removed as drawn), then checks the active
//! paylines for a uniform symbol across all columns. Both steps are pure
//! transforms apart from the injected RNG; nothing is shared between spins.

pub mod config;
pub mod engine;
pub mod error;
pub mod paytable;
pub mod reels;
pub mod spin;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use paytable::*;
pub use reels::*;
pub use spin::*;
pub use symbols::*;
