//! Terminal rendering for grids and win reports

use slotsim_core::{SpinOutcome, SymbolSet};

/// Render a grid row-by-row, columns separated by ` | `.
///
/// Symbol ids are shown by name; an id missing from the set (cannot happen
/// with a validated config) falls back to the raw number.
pub fn render_grid(outcome: &SpinOutcome, symbols: &SymbolSet) -> String {
    let mut out = String::new();
    for row in 0..outcome.grid.rows() {
        let cells: Vec<String> = outcome
            .grid
            .row(row)
            .map(|id| {
                symbols
                    .get(id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out
}

/// Render the win report for a spin.
pub fn render_win_report(outcome: &SpinOutcome) -> String {
    let mut out = format!("You won ${}.\n", outcome.total_win);
    if outcome.is_win() {
        let lines: Vec<String> = outcome
            .winning_lines()
            .iter()
            .map(|l| l.to_string())
            .collect();
        out.push_str(&format!("You won on lines: {}\n", lines.join(", ")));
    } else {
        out.push_str("You didn't win on any lines.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotsim_core::{LineEvaluation, LineWin, SpinGrid, SymbolSet};

    fn outcome(columns: Vec<Vec<u32>>, eval: LineEvaluation) -> SpinOutcome {
        SpinOutcome::new(1, SpinGrid::from_columns(columns), 3, 10, eval)
    }

    #[test]
    fn test_render_grid_rows() {
        // Columns are drawn vertically; rendering transposes to rows.
        let o = outcome(
            vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]],
            LineEvaluation {
                line_wins: Vec::new(),
                total_win: 0,
            },
        );
        let text = render_grid(&o, &SymbolSet::classic());
        assert_eq!(text, "Seven | Seven | Seven\nBar | Bar | Bar\nBell | Bell | Bell\n");
    }

    #[test]
    fn test_render_win_report() {
        let o = outcome(
            vec![vec![1, 1, 2], vec![1, 1, 3], vec![1, 1, 4]],
            LineEvaluation {
                line_wins: vec![
                    LineWin {
                        line: 1,
                        symbol_id: 1,
                        symbol_name: "Seven".into(),
                        win_amount: 50,
                    },
                    LineWin {
                        line: 2,
                        symbol_id: 1,
                        symbol_name: "Seven".into(),
                        win_amount: 50,
                    },
                ],
                total_win: 100,
            },
        );
        let text = render_win_report(&o);
        assert!(text.contains("You won $100."));
        assert!(text.contains("You won on lines: 1, 2"));
    }

    #[test]
    fn test_render_no_win_report() {
        let o = outcome(
            vec![vec![1, 2, 3]; 3],
            LineEvaluation {
                line_wins: Vec::new(),
                total_win: 0,
            },
        );
        let text = render_win_report(&o);
        assert!(text.contains("You won $0."));
        assert!(text.contains("You didn't win on any lines."));
    }
}
