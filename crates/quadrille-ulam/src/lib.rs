//! Ulam sequence generation.
//!
//! An Ulam sequence starts from two seeds `a < b`; every later term is the
//! smallest integer greater than the previous term that is the sum of two
//! *distinct* earlier terms in *exactly one* way. The classic sequence
//! seeded with (1, 2) begins 1, 2, 3, 4, 6, 8, 11, 13, 16, 18, ...
//!
//! # Example
//!
//! ```
//! use quadrille_ulam::ulam_numbers;
//!
//! let first = ulam_numbers(1, 2, 10).expect("valid seeds and length");
//! assert_eq!(first, [1, 2, 3, 4, 6, 8, 11, 13, 16, 18]);
//! ```

use log::debug;
use thiserror::Error;

/// Errors raised when setting up an Ulam sequence.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UlamError {
    /// Seeds must satisfy `0 < a < b`.
    #[error("ulam seeds must satisfy 0 < a < b, got ({a}, {b})")]
    InvalidSeeds {
        /// First seed.
        a: u64,
        /// Second seed.
        b: u64,
    },

    /// At least the two seed terms must be requested.
    #[error("an ulam sequence has at least 2 terms, {0} requested")]
    LengthTooShort(usize),
}

/// Lazily generates an Ulam sequence as an infinite iterator.
///
/// Terms are found by candidate search: starting just past the newest
/// term, each integer is tested for having exactly one representation as
/// a sum of two distinct earlier terms. The next term is always at most
/// the sum of the two largest terms so far, so the search cannot run away.
///
/// # Example
///
/// ```
/// use quadrille_ulam::UlamSequence;
///
/// let seq = UlamSequence::new(2, 3).expect("seeds are valid");
/// let terms: Vec<u64> = seq.take(8).collect();
/// assert_eq!(terms, [2, 3, 5, 7, 8, 9, 13, 14]);
/// ```
#[derive(Debug, Clone)]
pub struct UlamSequence {
    /// Terms generated so far, strictly increasing.
    terms: Vec<u64>,
    /// Index of the next term to hand out.
    next: usize,
}

impl UlamSequence {
    /// Creates a sequence from seeds `a` and `b`.
    ///
    /// Fails with `UlamError::InvalidSeeds` unless `0 < a < b`.
    pub fn new(a: u64, b: u64) -> Result<Self, UlamError> {
        if a == 0 || a >= b {
            return Err(UlamError::InvalidSeeds { a, b });
        }
        Ok(Self {
            terms: vec![a, b],
            next: 0,
        })
    }

    /// Counts representations of `candidate` as a sum of two distinct
    /// terms, stopping at two since only uniqueness matters.
    fn representations(&self, candidate: u64) -> u32 {
        let mut lo = 0;
        let mut hi = self.terms.len() - 1;
        let mut count = 0;
        while lo < hi {
            let sum = self.terms[lo] + self.terms[hi];
            if sum == candidate {
                count += 1;
                if count == 2 {
                    return count;
                }
                lo += 1;
            } else if sum < candidate {
                lo += 1;
            } else {
                hi -= 1;
            }
        }
        count
    }

    /// Appends the next term to the internal list.
    fn grow(&mut self) {
        let mut candidate = self.terms[self.terms.len() - 1] + 1;
        while self.representations(candidate) != 1 {
            candidate += 1;
        }
        self.terms.push(candidate);
    }
}

impl Iterator for UlamSequence {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.terms.len() {
            self.grow();
        }
        let term = self.terms[self.next];
        self.next += 1;
        Some(term)
    }
}

/// Generates the first `count` terms of the Ulam sequence seeded by `(a, b)`.
///
/// Fails unless `0 < a < b` and `count >= 2`.
pub fn ulam_numbers(a: u64, b: u64, count: usize) -> Result<Vec<u64>, UlamError> {
    if count < 2 {
        return Err(UlamError::LengthTooShort(count));
    }
    let seq = UlamSequence::new(a, b)?;
    debug!("generating {} ulam terms from seeds ({}, {})", count, a, b);
    Ok(seq.take(count).collect())
}
