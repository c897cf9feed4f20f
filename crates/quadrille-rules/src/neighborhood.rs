//! Rules that feed on the partially built grid.
//!
//! These are the self-referential rules: what they paint depends on what
//! the scan has already painted, so the same rule can grow very different
//! patterns from different seed rows.

use quadrille_grid::{CellPos, CellRule, Extras, GridView, RuleError};

/// Paints cells by the running count of painted cells above them.
///
/// For cell `(x, y)` the rule counts painted cells in columns `x` onward
/// of every row above `y`, and paints when that count is congruent to
/// `remainder` modulo `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningSum {
    /// The modulus. Zero cannot be evaluated and fails the scan.
    pub modulus: u64,
    /// The remainder class that paints.
    pub remainder: u64,
}

impl RunningSum {
    /// Paints when the count is odd.
    pub fn odd() -> Self {
        Self {
            modulus: 2,
            remainder: 1,
        }
    }

    /// Paints when the count is divisible by `modulus`.
    pub fn divisible_by(modulus: u64) -> Self {
        Self {
            modulus,
            remainder: 0,
        }
    }
}

impl Default for RunningSum {
    fn default() -> Self {
        Self::odd()
    }
}

impl CellRule for RunningSum {
    fn evaluate(
        &self,
        view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        if self.modulus == 0 {
            return Err(RuleError::new("running sum modulus must be nonzero"));
        }
        let count = view.population_in(pos.x.., ..pos.y) as u64;
        Ok(count % self.modulus == self.remainder)
    }
}

/// Paints cells where the previous row is mirror symmetric around `x`.
///
/// Compares cells up to `reach` columns out on each side of
/// `(x, y - 1)`, wrapping toroidally, and paints when every pair matches.
/// Wider reaches demand more symmetry and paint more sparsely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MirrorSymmetric {
    /// How many columns to compare on each side.
    pub reach: usize,
}

impl MirrorSymmetric {
    /// Creates a mirror rule comparing `reach` columns per side.
    pub fn new(reach: usize) -> Self {
        Self { reach }
    }
}

impl Default for MirrorSymmetric {
    fn default() -> Self {
        Self::new(1)
    }
}

impl CellRule for MirrorSymmetric {
    fn evaluate(
        &self,
        view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        let x = pos.x as i64;
        let above = pos.y as i64 - 1;
        for i in 1..=self.reach as i64 {
            if view.get_wrapped(x - i, above) != view.get_wrapped(x + i, above) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Paints cells where exactly one upper-corner neighbor is painted.
///
/// Looks at `(x - 1, y - 1)` and `(x + 1, y - 1)`, wrapping toroidally.
/// From a single painted cell in the seed row this draws the Sierpinski
/// triangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerParity;

impl CellRule for CornerParity {
    fn evaluate(
        &self,
        view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        let x = pos.x as i64;
        let above = pos.y as i64 - 1;
        Ok(view.get_wrapped(x - 1, above) != view.get_wrapped(x + 1, above))
    }
}
