//! Rules driven by caller-supplied integer sequences.
//!
//! Both rules read a sequence out of the scan's extras, so the same rule
//! renders Ulam numbers, primes, or any other precomputed sequence.

use quadrille_grid::{CellPos, CellRule, Extras, GridView, RuleError};

/// Paints cells whose scan index appears in an extras sequence.
///
/// The sequence at `slot` must be sorted ascending; membership is tested
/// by binary search. A missing or mistyped slot fails the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceMember {
    /// Extras slot holding the sorted sequence.
    pub slot: usize,
}

impl SequenceMember {
    /// Creates a membership rule over the sequence at `slot`.
    pub fn new(slot: usize) -> Self {
        Self { slot }
    }
}

impl CellRule for SequenceMember {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        extras: &Extras,
    ) -> Result<bool, RuleError> {
        let seq = extras.int_seq(self.slot)?;
        Ok(seq.binary_search(&pos.n).is_ok())
    }
}

/// Paints cell `(x, y)` when bit `x` of the sequence term at row `y` is set.
///
/// Each row renders one term as its base-2 digits, least significant bit
/// in column 0. Rows past the end of the sequence, and columns past bit
/// 63, are unpainted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceBits {
    /// Extras slot holding the sequence.
    pub slot: usize,
}

impl SequenceBits {
    /// Creates a bit-pattern rule over the sequence at `slot`.
    pub fn new(slot: usize) -> Self {
        Self { slot }
    }
}

impl CellRule for SequenceBits {
    fn evaluate(
        &self,
        _view: &GridView<'_>,
        pos: CellPos,
        extras: &Extras,
    ) -> Result<bool, RuleError> {
        let seq = extras.int_seq(self.slot)?;
        let term = match seq.get(pos.y) {
            Some(&term) => term,
            None => return Ok(false),
        };
        if pos.x >= 64 {
            return Ok(false);
        }
        Ok((term >> pos.x) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use quadrille_grid::{Extra, Extras, GridError, Scanner};
    use quadrille_ulam::ulam_numbers;

    use super::*;

    #[test]
    fn test_sequence_member_paints_ulam_cells() {
        let ulam = ulam_numbers(1, 2, 10).unwrap();
        let grid = Scanner::new(5, 4)
            .with_extras(Extras::new().with(Extra::IntSeq(ulam.clone())))
            .run(&SequenceMember::new(0))
            .unwrap();

        // All ten terms fall within n = 1..=20.
        assert_eq!(grid.population(), 10);
        for n in 1..=20u64 {
            let x = ((n - 1) % 5) as usize;
            let y = ((n - 1) / 5) as usize;
            assert_eq!(grid.get(x, y), ulam.contains(&n), "cell n = {}", n);
        }
    }

    #[test]
    fn test_sequence_member_missing_slot() {
        let err = Scanner::new(3, 3)
            .run(&SequenceMember::new(0))
            .unwrap_err();
        match err {
            GridError::Rule { n, source, .. } => {
                assert_eq!(n, 1);
                assert_eq!(source.to_string(), "missing extras slot 0");
            }
            other => panic!("expected a rule failure, got {other:?}"),
        }
    }

    #[test]
    fn test_sequence_member_mistyped_slot() {
        let err = Scanner::new(3, 3)
            .with_extras(Extras::new().with(Extra::Int(6)))
            .run(&SequenceMember::new(0))
            .unwrap_err();
        match err {
            GridError::Rule { source, .. } => {
                assert_eq!(
                    source.to_string(),
                    "extras slot 0: expected int sequence, got int"
                );
            }
            other => panic!("expected a rule failure, got {other:?}"),
        }
    }

    #[test]
    fn test_sequence_bits_renders_binary_digits() {
        let extras = Extras::new().with(Extra::IntSeq(vec![0b1011, 0b0100]));
        let grid = Scanner::new(6, 4)
            .with_extras(extras)
            .run(&SequenceBits::new(0))
            .unwrap();

        let rows: Vec<&[bool]> = grid.rows().collect();
        // Least significant bit in column 0.
        assert_eq!(rows[0], &[true, true, false, true, false, false]);
        assert_eq!(rows[1], &[false, false, true, false, false, false]);
        // Rows past the end of the sequence stay unpainted.
        assert_eq!(grid.rows().skip(2).flatten().filter(|&&c| c).count(), 0);
    }
}
