//! Row-major scan-and-rule engine for binary pattern grids.
//!
//! A [`Scanner`] walks a grid top-left to bottom-right, asking a
//! [`CellRule`] to decide each cell. The rule sees every cell decided
//! before the current one, which is what makes self-referential patterns
//! possible: running sums, symmetry tests, and other rules that feed on
//! the very grid they are building.
//!
//! - [`Scanner`] - the scan loop, seeding, and progress reporting
//! - [`CellRule`] - the pluggable per-cell decision
//! - [`GridView`] - what a rule sees of the grid mid-scan
//! - [`SeedRow`] - how row 0 is filled before the scan starts
//! - [`Extras`] - caller-supplied values handed to every rule call
//!
//! # Example
//!
//! ```
//! use quadrille_grid::{CellPos, CellRule, Extras, GridView, RuleError, Scanner, SeedRow};
//!
//! /// Inverts the cell directly above.
//! struct Invert;
//!
//! impl CellRule for Invert {
//!     fn evaluate(
//!         &self,
//!         view: &GridView<'_>,
//!         pos: CellPos,
//!         _extras: &Extras,
//!     ) -> Result<bool, RuleError> {
//!         Ok(!view.get_wrapped(pos.x as i64, pos.y as i64 - 1))
//!     }
//! }
//!
//! let grid = Scanner::new(8, 8)
//!     .with_seed_row(SeedRow::Ones)
//!     .run(&Invert)
//!     .expect("rule cannot fail");
//!
//! // Rows alternate all-painted / all-unpainted.
//! assert!(grid.get(0, 0) && !grid.get(0, 1) && grid.get(0, 2));
//! ```

mod error;
mod grid;
mod progress;
mod rule;
mod scan;

pub use error::GridError;
pub use grid::{Grid, GridView};
pub use progress::{ProgressSink, TermProgress};
pub use rule::{CellPos, CellRule, Extra, ExtraKind, Extras, ExtrasError, RuleError};
pub use scan::{Scanner, SeedRow};
