//! Binary grid storage and the read view handed to rules.

use std::ops::{Bound, RangeBounds};

use crate::error::GridError;

/// A finished binary pattern grid.
///
/// Cells are stored row-major, `true` meaning painted. A grid is produced
/// by a scan (or by `from_cells`) and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    /// Cell states in row-major order.
    cells: Vec<bool>,
    /// Width in cells.
    width: usize,
    /// Height in cells.
    height: usize,
}

impl Grid {
    /// Creates an all-unpainted grid. Scans start from this.
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from row-major cells.
    ///
    /// Fails with `GridError::CellCount` unless `cells.len()` is exactly
    /// `width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                len: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the state of a cell. Out-of-bounds reads are unpainted.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            false
        }
    }

    /// Returns the raw cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterates over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Counts painted cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, painted: bool) {
        self.cells[y * self.width + x] = painted;
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [bool] {
        &mut self.cells[y * self.width..(y + 1) * self.width]
    }
}

/// A read-only view of a grid while it is being filled.
///
/// This is what a cell rule sees during a scan. Cells at or behind the
/// scan frontier read back exactly as written (including any seed row);
/// cells ahead of the frontier read as unpainted.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    /// The buffer being filled, row-major.
    cells: &'a [bool],
    /// Width in cells.
    width: usize,
    /// Height in cells.
    height: usize,
    /// Number of cells already written, in scan order.
    decided: usize,
}

impl<'a> GridView<'a> {
    pub(crate) fn new(cells: &'a [bool], width: usize, height: usize, decided: usize) -> Self {
        Self {
            cells,
            width,
            height,
            decided,
        }
    }

    /// Returns the width of the underlying grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the underlying grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells already decided, in scan order.
    pub fn decided(&self) -> usize {
        self.decided
    }

    /// Whether the cell at `(x, y)` has already been decided.
    pub fn is_decided(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && y * self.width + x < self.decided
    }

    /// Gets the state of a cell.
    ///
    /// Out-of-bounds and not-yet-decided cells read as unpainted.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            false
        }
    }

    /// Gets a cell with toroidal wrapping on both axes.
    ///
    /// `get_wrapped(-1, -1)` reads the bottom-right corner. Grids with a
    /// zero dimension read as unpainted everywhere.
    pub fn get_wrapped(&self, x: i64, y: i64) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.cells[y * self.width + x]
    }

    /// Counts painted cells over the whole view.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Counts painted cells in a rectangle of columns `xs` and rows `ys`.
    ///
    /// Ranges are clamped to the grid, so open and oversized ranges are
    /// fine: `population_in(x.., ..y)` counts columns `x` onward in every
    /// row above `y`.
    pub fn population_in(
        &self,
        xs: impl RangeBounds<usize>,
        ys: impl RangeBounds<usize>,
    ) -> usize {
        let (x0, x1) = clamp_range(xs, self.width);
        let (y0, y1) = clamp_range(ys, self.height);
        let mut count = 0;
        for y in y0..y1 {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            count += row[x0..x1].iter().filter(|&&c| c).count();
        }
        count
    }
}

/// Resolves range bounds against a length, clamping both ends.
fn clamp_range(bounds: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let start = match bounds.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match bounds.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    let start = start.min(len);
    let end = end.min(len).max(start);
    (start, end)
}
