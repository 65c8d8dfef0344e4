//! Reel spinning — weighted draws without replacement

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::error::EngineError;
use crate::symbols::SymbolSet;

/// The symbol grid produced by one spin.
///
/// Column-major: `columns[c][r]` is the symbol id shown on reel `c`, row `r`.
/// Immutable once produced; a fresh grid is drawn every spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinGrid {
    columns: Vec<Vec<u32>>,
}

impl SpinGrid {
    /// Wrap raw columns (test helper and internal constructor).
    pub fn from_columns(columns: Vec<Vec<u32>>) -> Self {
        Self { columns }
    }

    /// Number of columns (reels)
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (length of the first column, 0 if empty)
    pub fn rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Symbol id at (column, row)
    pub fn symbol_at(&self, col: usize, row: usize) -> Option<u32> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    /// Borrow the raw columns
    pub fn columns(&self) -> &[Vec<u32>] {
        &self.columns
    }

    /// Iterate one row across all columns (display order)
    pub fn row(&self, row: usize) -> impl Iterator<Item = u32> + '_ {
        self.columns.iter().filter_map(move |c| c.get(row).copied())
    }
}

/// Spin the reels: draw a fresh grid of symbols.
///
/// Each column gets its own pool holding every symbol repeated per its
/// weight, and `rows` symbols are drawn from it uniformly at random without
/// replacement. Pools are not shared across columns, so a symbol's frequency
/// in one column never depletes another.
///
/// Fails when the grid is empty or a column pool is smaller than `rows`;
/// both indicate a misconfigured symbol table, not bad input.
pub fn spin_reels<R: Rng>(
    grid: GridSpec,
    symbols: &SymbolSet,
    rng: &mut R,
) -> Result<SpinGrid, EngineError> {
    if grid.rows == 0 || grid.cols == 0 {
        return Err(EngineError::EmptyGrid {
            rows: grid.rows,
            cols: grid.cols,
        });
    }
    symbols.validate()?;

    let rows = grid.rows as usize;
    let pool_size = symbols.total_weight();
    if rows > pool_size {
        return Err(EngineError::PoolExhausted {
            rows: grid.rows,
            pool_size,
        });
    }

    // One pool template, cloned per column.
    let mut template = Vec::with_capacity(pool_size);
    for symbol in &symbols.symbols {
        for _ in 0..symbol.weight {
            template.push(symbol.id);
        }
    }

    let mut columns = Vec::with_capacity(grid.cols as usize);
    for _ in 0..grid.cols {
        let mut pool = template.clone();
        let mut column = Vec::with_capacity(rows);
        for _ in 0..rows {
            let idx = rng.random_range(0..pool.len());
            column.push(pool.swap_remove(idx));
        }
        columns.push(column);
    }

    Ok(SpinGrid { columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_grid_shape() {
        let symbols = SymbolSet::classic();
        for seed in 0..20 {
            let grid = spin_reels(GridSpec::classic_3x3(), &symbols, &mut rng(seed)).unwrap();
            assert_eq!(grid.cols(), 3);
            assert_eq!(grid.rows(), 3);
            for col in grid.columns() {
                assert_eq!(col.len(), 3);
            }
        }
    }

    #[test]
    fn test_weight_conservation() {
        // No symbol may appear in a column more often than its weight.
        let symbols = SymbolSet::classic();
        for seed in 0..200 {
            let grid = spin_reels(GridSpec::classic_3x3(), &symbols, &mut rng(seed)).unwrap();
            for col in grid.columns() {
                for symbol in &symbols.symbols {
                    let count = col.iter().filter(|&&id| id == symbol.id).count();
                    assert!(
                        count <= symbol.weight as usize,
                        "symbol {} drawn {} times with weight {}",
                        symbol.id,
                        count,
                        symbol.weight
                    );
                }
            }
        }
    }

    #[test]
    fn test_exhaustive_pool_draws_everything() {
        // rows == total weight: every pool instance must be drawn exactly once.
        let symbols = SymbolSet::new(vec![
            Symbol::new(1, "Seven", 2, 5),
            Symbol::new(2, "Bar", 1, 4),
        ]);
        let grid = spin_reels(GridSpec { rows: 3, cols: 4 }, &symbols, &mut rng(7)).unwrap();
        for col in grid.columns() {
            assert_eq!(col.iter().filter(|&&id| id == 1).count(), 2);
            assert_eq!(col.iter().filter(|&&id| id == 2).count(), 1);
        }
    }

    #[test]
    fn test_pool_exhausted_rejected() {
        let symbols = SymbolSet::new(vec![Symbol::new(1, "Seven", 2, 5)]);
        let result = spin_reels(GridSpec { rows: 3, cols: 3 }, &symbols, &mut rng(0));
        assert!(matches!(result, Err(EngineError::PoolExhausted { .. })));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let symbols = SymbolSet::classic();
        let result = spin_reels(GridSpec { rows: 0, cols: 3 }, &symbols, &mut rng(0));
        assert!(matches!(result, Err(EngineError::EmptyGrid { .. })));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let symbols = SymbolSet::classic();
        let a = spin_reels(GridSpec::classic_3x3(), &symbols, &mut rng(42)).unwrap();
        let b = spin_reels(GridSpec::classic_3x3(), &symbols, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_column_independence() {
        // Frequencies must be driven by the weights in every column, with no
        // cross-column depletion. Over many spins each column individually
        // sees roughly weight/total of each symbol.
        let symbols = SymbolSet::classic();
        let spec = GridSpec::classic_3x3();
        let trials = 2000;
        let mut r = rng(1234);

        let mut counts = vec![std::collections::HashMap::new(); spec.cols as usize];
        for _ in 0..trials {
            let grid = spin_reels(spec, &symbols, &mut r).unwrap();
            for (c, col) in grid.columns().iter().enumerate() {
                for &id in col {
                    *counts[c].entry(id).or_insert(0usize) += 1;
                }
            }
        }

        let draws_per_column = (trials * spec.rows as usize) as f64;
        let total_weight = symbols.total_weight() as f64;
        for col_counts in &counts {
            for symbol in &symbols.symbols {
                let observed = *col_counts.get(&symbol.id).unwrap_or(&0) as f64 / draws_per_column;
                let expected = symbol.weight as f64 / total_weight;
                assert!(
                    (observed - expected).abs() < 0.05,
                    "symbol {}: observed {:.3}, expected {:.3}",
                    symbol.id,
                    observed,
                    expected
                );
            }
        }
    }
}
