//! Built-in cell rules for quadrille pattern grids.
//!
//! Everything here implements `quadrille_grid::CellRule`:
//!
//! - [`EvenIndex`], [`PrimeIndex`], [`FibonacciIndex`], [`CoprimeIndex`],
//!   [`PairwiseCoprime`] - paint by number-theoretic properties of the
//!   scan position
//! - [`RunningSum`], [`MirrorSymmetric`], [`CornerParity`] - feed on the
//!   partially built grid
//! - [`SequenceMember`], [`SequenceBits`] - look the position up in a
//!   caller-supplied integer sequence
//! - [`Mandelbrot`] - maps cells onto the complex plane
//!
//! # Example
//!
//! ```
//! use quadrille_grid::Scanner;
//! use quadrille_rules::PrimeIndex;
//!
//! let grid = Scanner::new(16, 16).run(&PrimeIndex).expect("rule cannot fail");
//!
//! // n = 2 is prime, n = 1 is not.
//! assert!(grid.get(1, 0));
//! assert!(!grid.get(0, 0));
//! ```

mod fractal;
mod neighborhood;
mod number;
mod sequence;

pub use glam;

pub use fractal::{escapes, Mandelbrot};
pub use neighborhood::{CornerParity, MirrorSymmetric, RunningSum};
pub use number::{
    gcd, is_fibonacci, is_prime, CoprimeIndex, EvenIndex, FibonacciIndex, PairwiseCoprime,
    PrimeIndex,
};
pub use sequence::{SequenceBits, SequenceMember};
