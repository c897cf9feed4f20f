//! Error types for quadrille-grid.

use thiserror::Error;

use crate::rule::RuleError;

/// Errors that can occur while building or scanning a grid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// A custom seed row did not match the grid width.
    #[error("seed row has {len} cells, grid width is {expected}")]
    SeedRowLength {
        /// The grid width the row must match.
        expected: usize,
        /// The length that was actually provided.
        len: usize,
    },

    /// A seed row was requested for a grid with no rows.
    #[error("cannot seed a grid with zero height")]
    SeedEmptyGrid,

    /// Cells handed to `Grid::from_cells` did not match the dimensions.
    #[error("expected {expected} cells, got {len}")]
    CellCount {
        /// `width * height` of the requested grid.
        expected: usize,
        /// The number of cells actually provided.
        len: usize,
    },

    /// The cell rule failed, so the scan was abandoned.
    #[error("rule failed at ({x}, {y}), cell {n}: {source}")]
    Rule {
        /// Column of the failing cell.
        x: usize,
        /// Row of the failing cell.
        y: usize,
        /// 1-based linear index of the failing cell.
        n: u64,
        /// The rule's own failure.
        source: RuleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_coordinates() {
        let err = GridError::Rule {
            x: 3,
            y: 7,
            n: 74,
            source: RuleError::new("missing extras slot 0"),
        };
        let text = err.to_string();
        assert!(text.contains("(3, 7)"));
        assert!(text.contains("cell 74"));
        assert!(text.contains("missing extras slot 0"));
    }

    #[test]
    fn test_seed_row_length_display() {
        let err = GridError::SeedRowLength {
            expected: 10,
            len: 7,
        };
        assert_eq!(err.to_string(), "seed row has 7 cells, grid width is 10");
    }
}
