//! Escape-time fractal rules.

use glam::DVec2;
use quadrille_grid::{CellPos, CellRule, Extras, GridView, RuleError};

/// Whether `c` escapes the Mandelbrot iteration within `max_iterations`.
///
/// Iterates `z <- z^2 + c` starting from `z = c` and reports true as soon
/// as `|z| > 2`; past that radius the orbit always diverges.
pub fn escapes(c: DVec2, max_iterations: u32) -> bool {
    let mut z = c;
    for _ in 0..max_iterations {
        if z.length_squared() > 4.0 {
            return true;
        }
        z = DVec2::new(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c;
    }
    false
}

/// Paints cells whose complex-plane point stays bounded under `z^2 + c`.
///
/// Cell `(x, y)` maps into the viewport rectangle spanned by `min` and
/// `max`: `x` runs along the real axis left to right, `y` along the
/// imaginary axis top to bottom. The default viewport frames the whole
/// set.
///
/// # Example
///
/// ```
/// use quadrille_grid::Scanner;
/// use quadrille_rules::Mandelbrot;
///
/// let grid = Scanner::new(60, 40)
///     .run(&Mandelbrot::default())
///     .expect("rule cannot fail");
///
/// // The origin is in the set; it sits two thirds across the viewport.
/// assert!(grid.get(40, 20));
/// // The far corner escapes immediately.
/// assert!(!grid.get(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mandelbrot {
    /// Viewport corner mapped to the top-left cell.
    pub min: DVec2,
    /// Viewport corner mapped just past the bottom-right cell.
    pub max: DVec2,
    /// Iteration budget before a point counts as bounded.
    pub max_iterations: u32,
}

impl Mandelbrot {
    /// Creates a rule over the given viewport.
    pub fn new(min: DVec2, max: DVec2, max_iterations: u32) -> Self {
        Self {
            min,
            max,
            max_iterations,
        }
    }
}

impl Default for Mandelbrot {
    /// The classic framing: real axis -2 to 1, imaginary axis -1 to 1,
    /// 1000 iterations.
    fn default() -> Self {
        Self::new(DVec2::new(-2.0, -1.0), DVec2::new(1.0, 1.0), 1000)
    }
}

impl CellRule for Mandelbrot {
    fn evaluate(
        &self,
        view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        let size = DVec2::new(view.width() as f64, view.height() as f64);
        let uv = DVec2::new(pos.x as f64, pos.y as f64) / size;
        let c = self.min + (self.max - self.min) * uv;
        Ok(!escapes(c, self.max_iterations))
    }
}
