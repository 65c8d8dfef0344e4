//! Symbol definitions and the classic symbol table

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Display name (e.g., "Seven", "Bell")
    pub name: String,
    /// Count weight: how many instances exist in each column's pool
    pub weight: u8,
    /// Payout multiplier per unit bet when the symbol fills a line
    pub payout: u64,
}

impl Symbol {
    /// Create a symbol
    pub fn new(id: u32, name: impl Into<String>, weight: u8, payout: u64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            payout,
        }
    }
}

/// An ordered set of symbols with their weights and payouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Create a symbol set from a list of symbols
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The classic four-symbol table.
    ///
    /// Rare symbols pay more: Seven has 2 instances per column pool and pays
    /// 5× the line bet, Cherry has 8 instances and pays 2×.
    pub fn classic() -> Self {
        Self {
            symbols: vec![
                Symbol::new(1, "Seven", 2, 5),
                Symbol::new(2, "Bar", 4, 4),
                Symbol::new(3, "Bell", 6, 3),
                Symbol::new(4, "Cherry", 8, 2),
            ],
        }
    }

    /// Get symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Total pool size per column (sum of all weights)
    pub fn total_weight(&self) -> usize {
        self.symbols.iter().map(|s| s.weight as usize).sum()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Validate the set: non-empty, unique ids, positive weights.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.symbols.is_empty() {
            return Err(EngineError::EmptySymbolSet);
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if symbol.weight == 0 {
                return Err(EngineError::ZeroWeight(symbol.id));
            }
            if self.symbols[..i].iter().any(|s| s.id == symbol.id) {
                return Err(EngineError::DuplicateSymbol(symbol.id));
            }
        }
        Ok(())
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_set() {
        let set = SymbolSet::classic();
        assert_eq!(set.len(), 4);
        assert_eq!(set.total_weight(), 20);
        assert_eq!(set.get(1).unwrap().name, "Seven");
        assert_eq!(set.get(1).unwrap().payout, 5);
        assert!(set.get(99).is_none());
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let set = SymbolSet::new(Vec::new());
        assert!(matches!(set.validate(), Err(EngineError::EmptySymbolSet)));
    }

    #[test]
    fn test_validate_duplicate_id() {
        let set = SymbolSet::new(vec![
            Symbol::new(1, "Seven", 2, 5),
            Symbol::new(1, "Bar", 4, 4),
        ]);
        assert!(matches!(
            set.validate(),
            Err(EngineError::DuplicateSymbol(1))
        ));
    }

    #[test]
    fn test_validate_zero_weight() {
        let set = SymbolSet::new(vec![Symbol::new(1, "Seven", 0, 5)]);
        assert!(matches!(set.validate(), Err(EngineError::ZeroWeight(1))));
    }
}
