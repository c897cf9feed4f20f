//! The row-major scan engine.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GridError;
use crate::grid::{Grid, GridView};
use crate::progress::ProgressSink;
use crate::rule::{CellPos, CellRule, Extras};

/// How row 0 of a grid is filled before the scan begins.
///
/// Any policy other than `None` fills the whole first row without invoking
/// the rule; the scan then starts at row 1. Seed rows exist for
/// self-referential rules that need something to feed on.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedRow {
    /// No seed row; the rule decides every cell from row 0.
    #[default]
    None,
    /// Row 0 is all unpainted.
    Zeros,
    /// Row 0 is all painted.
    Ones,
    /// Row 0 is drawn uniformly at random.
    Random {
        /// RNG seed. `Some` makes the row reproducible across runs;
        /// `None` draws from entropy.
        seed: Option<u64>,
    },
    /// Row 0 is exactly these cells; the length must equal the grid width.
    Custom(Vec<bool>),
}

/// Scans a grid in row-major order, deciding each cell through a rule.
///
/// The scanner owns the grid while it is being filled. Each cell is
/// decided exactly once, top-left to bottom-right, and the rule is handed
/// a read view of everything decided so far, which is what makes
/// self-referential rules possible.
///
/// # Example
///
/// ```
/// use quadrille_grid::{CellPos, CellRule, Extras, GridView, RuleError, Scanner};
///
/// struct Stripes;
///
/// impl CellRule for Stripes {
///     fn evaluate(
///         &self,
///         _view: &GridView<'_>,
///         pos: CellPos,
///         _extras: &Extras,
///     ) -> Result<bool, RuleError> {
///         Ok(pos.y % 2 == 0)
///     }
/// }
///
/// let grid = Scanner::new(4, 4).run(&Stripes).expect("rule cannot fail");
/// assert_eq!(grid.population(), 8);
/// ```
pub struct Scanner {
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
    /// How row 0 is filled.
    seed_row: SeedRow,
    /// Auxiliary values handed to every rule invocation.
    extras: Extras,
    /// Optional per-cell progress reporting.
    progress: Option<Box<dyn ProgressSink>>,
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("seed_row", &self.seed_row)
            .field("extras", &self.extras)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl Scanner {
    /// Creates a scanner for a `width x height` grid with no seed row, no
    /// extras, and no progress reporting.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed_row: SeedRow::None,
            extras: Extras::new(),
            progress: None,
        }
    }

    /// Sets the seeding policy for row 0.
    pub fn with_seed_row(mut self, seed_row: SeedRow) -> Self {
        self.seed_row = seed_row;
        self
    }

    /// Sets the auxiliary values handed to the rule.
    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    /// Sets a progress sink, called once per rule-decided cell.
    pub fn with_progress(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Returns the grid width this scanner produces.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height this scanner produces.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Runs the scan and returns the finished grid.
    ///
    /// The seed row (if any) is validated before the grid is allocated,
    /// then written without invoking the rule. Every remaining cell is
    /// decided exactly once in row-major order. A rule failure abandons
    /// the scan with `GridError::Rule`; no partial grid is ever returned.
    pub fn run<R: CellRule + ?Sized>(&mut self, rule: &R) -> Result<Grid, GridError> {
        self.validate_seed()?;

        debug!("scanning {}x{} grid", self.width, self.height);

        let mut grid = Grid::blank(self.width, self.height);
        let total = (self.width * self.height) as u64;
        let mut n: u64 = 0;

        let start_row = if matches!(self.seed_row, SeedRow::None) {
            0
        } else {
            self.fill_seed_row(grid.row_mut(0));
            n = self.width as u64;
            1
        };

        for y in start_row..self.height {
            for x in 0..self.width {
                n += 1;
                let view = GridView::new(grid.cells(), self.width, self.height, (n - 1) as usize);
                let pos = CellPos { x, y, n };
                let painted = rule
                    .evaluate(&view, pos, &self.extras)
                    .map_err(|source| GridError::Rule { x, y, n, source })?;
                grid.set(x, y, painted);
                if let Some(sink) = &mut self.progress {
                    sink.emit(n, total);
                }
            }
        }

        debug!("scan complete, population {}", grid.population());
        Ok(grid)
    }

    fn validate_seed(&self) -> Result<(), GridError> {
        match &self.seed_row {
            SeedRow::None => Ok(()),
            SeedRow::Custom(row) if row.len() != self.width => Err(GridError::SeedRowLength {
                expected: self.width,
                len: row.len(),
            }),
            _ if self.height == 0 => Err(GridError::SeedEmptyGrid),
            _ => Ok(()),
        }
    }

    /// Fills row 0 according to the seeding policy. The row length has
    /// already been validated.
    fn fill_seed_row(&self, row: &mut [bool]) {
        match &self.seed_row {
            SeedRow::None => {}
            SeedRow::Zeros => row.fill(false),
            SeedRow::Ones => row.fill(true),
            SeedRow::Random { seed } => {
                let mut rng = match seed {
                    Some(s) => ChaCha8Rng::seed_from_u64(*s),
                    None => ChaCha8Rng::from_entropy(),
                };
                for cell in row.iter_mut() {
                    *cell = rng.gen();
                }
            }
            SeedRow::Custom(cells) => row.copy_from_slice(cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::rule::RuleError;

    /// Never paints; records every position it is invoked at.
    struct Recorder {
        seen: RefCell<Vec<CellPos>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl CellRule for Recorder {
        fn evaluate(
            &self,
            _view: &GridView<'_>,
            pos: CellPos,
            _extras: &Extras,
        ) -> Result<bool, RuleError> {
            self.seen.borrow_mut().push(pos);
            Ok(false)
        }
    }

    /// Paints everything; fails if the frontier contract is violated.
    struct FrontierCheck;

    impl CellRule for FrontierCheck {
        fn evaluate(
            &self,
            view: &GridView<'_>,
            pos: CellPos,
            _extras: &Extras,
        ) -> Result<bool, RuleError> {
            // Everything behind the frontier was painted by this rule.
            if pos.x > 0 && !view.get(pos.x - 1, pos.y) {
                return Err(RuleError::new("cell behind the frontier lost its value"));
            }
            if view.is_decided(pos.x, pos.y) {
                return Err(RuleError::new("current cell counted as decided"));
            }
            // Everything ahead of it still reads unpainted.
            if pos.x + 1 < view.width() && view.get(pos.x + 1, pos.y) {
                return Err(RuleError::new("cell ahead of the frontier already set"));
            }
            Ok(true)
        }
    }

    /// Fails at one specific cell index.
    struct FailAt {
        n: u64,
    }

    impl CellRule for FailAt {
        fn evaluate(
            &self,
            _view: &GridView<'_>,
            pos: CellPos,
            _extras: &Extras,
        ) -> Result<bool, RuleError> {
            if pos.n == self.n {
                Err(RuleError::new("boom"))
            } else {
                Ok(true)
            }
        }
    }

    /// Copies the cell directly above, wrapping at the top.
    struct CopyAbove;

    impl CellRule for CopyAbove {
        fn evaluate(
            &self,
            view: &GridView<'_>,
            pos: CellPos,
            _extras: &Extras,
        ) -> Result<bool, RuleError> {
            Ok(view.get_wrapped(pos.x as i64, pos.y as i64 - 1))
        }
    }

    /// Forwards progress into a shared vector.
    struct SharedProgress {
        calls: Rc<RefCell<Vec<(u64, u64)>>>,
    }

    impl ProgressSink for SharedProgress {
        fn emit(&mut self, current: u64, total: u64) {
            self.calls.borrow_mut().push((current, total));
        }
    }

    // ----

    #[test]
    fn test_unseeded_scan_visits_every_cell_in_order() {
        let rule = Recorder::new();
        let grid = Scanner::new(3, 2).run(&rule).unwrap();

        assert_eq!(grid.population(), 0, "Recorder never paints");

        let seen = rule.seen.into_inner();
        assert_eq!(seen.len(), 6);
        for (i, pos) in seen.iter().enumerate() {
            assert_eq!(pos.n, i as u64 + 1, "n must increase by exactly 1");
            assert_eq!(pos.x, i % 3);
            assert_eq!(pos.y, i / 3);
            assert_eq!(pos.n, 3 * pos.y as u64 + pos.x as u64 + 1);
        }
    }

    #[test]
    fn test_seeded_scan_skips_row_zero() {
        let seed = vec![true, false, true, true];
        let rule = Recorder::new();
        let grid = Scanner::new(4, 3)
            .with_seed_row(SeedRow::Custom(seed.clone()))
            .run(&rule)
            .unwrap();

        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows[0], &seed[..], "row 0 must be exactly the seed");

        let seen = rule.seen.into_inner();
        assert_eq!(seen.len(), 8, "rule must not run on the seed row");
        assert_eq!(seen[0].n, 5, "first decided cell is at n = width + 1");
        assert_eq!(seen[0].y, 1);
    }

    #[test]
    fn test_custom_seed_wrong_length() {
        let mut scanner = Scanner::new(4, 3).with_seed_row(SeedRow::Custom(vec![true; 3]));
        let err = scanner.run(&Recorder::new()).unwrap_err();
        assert_eq!(
            err,
            GridError::SeedRowLength {
                expected: 4,
                len: 3
            }
        );
    }

    #[test]
    fn test_seed_row_on_zero_height() {
        let mut scanner = Scanner::new(4, 0).with_seed_row(SeedRow::Zeros);
        assert_eq!(scanner.run(&Recorder::new()).unwrap_err(), GridError::SeedEmptyGrid);

        // Without a seed row a zero-height scan is just empty.
        let grid = Scanner::new(4, 0).run(&Recorder::new()).unwrap();
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn test_ones_seed_row() {
        let grid = Scanner::new(3, 2)
            .with_seed_row(SeedRow::Ones)
            .run(&Recorder::new())
            .unwrap();
        assert_eq!(grid.rows().next().unwrap(), &[true, true, true]);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_frontier_reads() {
        let grid = Scanner::new(5, 4).run(&FrontierCheck).unwrap();
        assert_eq!(grid.population(), 20, "FrontierCheck paints every cell");
    }

    #[test]
    fn test_seed_row_visible_to_rule() {
        let grid = Scanner::new(4, 3)
            .with_seed_row(SeedRow::Custom(vec![true, false, false, true]))
            .run(&CopyAbove)
            .unwrap();

        // Every row repeats the seed.
        for row in grid.rows() {
            assert_eq!(row, &[true, false, false, true]);
        }
    }

    #[test]
    fn test_random_seed_reproducible() {
        let run = |seed| {
            Scanner::new(64, 2)
                .with_seed_row(SeedRow::Random { seed })
                .run(&CopyAbove)
                .unwrap()
        };

        assert_eq!(run(Some(42)), run(Some(42)));
        assert_ne!(
            run(Some(1)),
            run(Some(2)),
            "different seeds should give different rows at this width"
        );
    }

    #[test]
    fn test_rule_failure_aborts_with_coordinates() {
        let mut scanner = Scanner::new(4, 4);
        let err = scanner.run(&FailAt { n: 7 }).unwrap_err();
        match err {
            GridError::Rule { x, y, n, source } => {
                assert_eq!((x, y, n), (2, 1, 7));
                assert_eq!(source.to_string(), "boom");
            }
            other => panic!("expected a rule failure, got {other:?}"),
        }
    }

    #[test]
    fn test_progress_once_per_decided_cell() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let grid = Scanner::new(3, 2)
            .with_progress(SharedProgress {
                calls: Rc::clone(&calls),
            })
            .run(&Recorder::new())
            .unwrap();
        assert_eq!(grid.width(), 3);

        let calls = calls.borrow();
        let expected: Vec<(u64, u64)> = (1..=6).map(|n| (n, 6)).collect();
        assert_eq!(*calls, expected, "ends with (total, total) when unseeded");
    }

    #[test]
    fn test_progress_skips_seed_row() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        Scanner::new(3, 3)
            .with_seed_row(SeedRow::Zeros)
            .with_progress(SharedProgress {
                calls: Rc::clone(&calls),
            })
            .run(&Recorder::new())
            .unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.first(), Some(&(4, 9)), "first report is n = width + 1");
        assert_eq!(calls.last(), Some(&(9, 9)));
        assert_eq!(calls.len(), 6);
    }

    #[test]
    fn test_extras_reach_the_rule() {
        use crate::rule::Extra;

        /// Paints when n exceeds the threshold in extras slot 0.
        struct Threshold;

        impl CellRule for Threshold {
            fn evaluate(
                &self,
                _view: &GridView<'_>,
                pos: CellPos,
                extras: &Extras,
            ) -> Result<bool, RuleError> {
                let limit = extras.int(0)?;
                Ok(pos.n as i64 > limit)
            }
        }

        let grid = Scanner::new(4, 2)
            .with_extras(Extras::new().with(Extra::Int(5)))
            .run(&Threshold)
            .unwrap();
        assert_eq!(grid.population(), 3, "cells 6, 7, 8 are past the threshold");

        // Missing extras turn into a rule failure with coordinates.
        let err = Scanner::new(4, 2).run(&Threshold).unwrap_err();
        match err {
            GridError::Rule { x, y, n, source } => {
                assert_eq!((x, y, n), (0, 0, 1));
                assert_eq!(source.to_string(), "missing extras slot 0");
            }
            other => panic!("expected a rule failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let mut scanner = Scanner::new(8, 8).with_seed_row(SeedRow::Random { seed: Some(9) });
        let first = scanner.run(&CopyAbove).unwrap();
        let second = scanner.run(&CopyAbove).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_width_scan() {
        let grid = Scanner::new(0, 5).run(&Recorder::new()).unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.cells().len(), 0);
    }
}
