//! Rules driven by the scan index and cell coordinates alone.

use quadrille_grid::{CellPos, CellRule, Extras, GridView, RuleError};

/// Greatest common divisor by Euclid's algorithm. `gcd(n, 0) == n`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Whether `n` is prime. 0 and 1 are not.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Whether `n` is a Fibonacci number.
///
/// Exact test: `n` is Fibonacci iff `5n^2 + 4` or `5n^2 - 4` is a perfect
/// square.
pub fn is_fibonacci(n: u64) -> bool {
    let sq = (n as u128) * (n as u128) * 5;
    is_square(sq + 4) || (sq >= 4 && is_square(sq - 4))
}

fn is_square(v: u128) -> bool {
    let mut root = (v as f64).sqrt() as u128;
    // Walk the float estimate onto the integer square root before testing.
    while root * root > v {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= v {
        root += 1;
    }
    root * root == v
}

/// Paints cells with an even scan index.
///
/// Produces vertical stripes on even grid widths and a checkerboard on
/// odd ones. Mostly useful for eyeballing the scan order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvenIndex;

impl CellRule for EvenIndex {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        Ok(pos.n % 2 == 0)
    }
}

/// Paints cells with a prime scan index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeIndex;

impl CellRule for PrimeIndex {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        Ok(is_prime(pos.n))
    }
}

/// Paints cells whose scan index is a Fibonacci number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FibonacciIndex;

impl CellRule for FibonacciIndex {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        Ok(is_fibonacci(pos.n))
    }
}

/// Paints cells whose scan index is coprime to `x * y`.
///
/// `gcd(n, 0) == n`, so along row 0 and column 0 only the very first cell
/// paints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoprimeIndex;

impl CellRule for CoprimeIndex {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        let xy = (pos.x as u64) * (pos.y as u64);
        Ok(gcd(pos.n, xy) == 1)
    }
}

/// Paints cells where `n`, `x` and `y` are pairwise coprime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairwiseCoprime;

impl CellRule for PairwiseCoprime {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        _extras: &Extras,
    ) -> Result<bool, RuleError> {
        let x = pos.x as u64;
        let y = pos.y as u64;
        Ok(gcd(pos.n, x) == 1 && gcd(pos.n, y) == 1 && gcd(x, y) == 1)
    }
}
