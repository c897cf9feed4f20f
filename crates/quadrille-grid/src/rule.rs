//! The pluggable cell rule interface and its auxiliary data.

use std::fmt;

use thiserror::Error;

use crate::grid::GridView;

/// Position of the cell currently being decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    /// Column, 0-based from the left.
    pub x: usize,
    /// Row, 0-based from the top.
    pub y: usize,
    /// 1-based linear index in scan order: `width * y + x + 1`.
    ///
    /// Counts every cell, including a seeded first row, so the first cell
    /// a rule sees after a seed row has `n == width + 1`.
    pub n: u64,
}

/// Decides the state of one cell during a scan.
///
/// The rule sees a read-only view of the grid being filled: cells decided
/// before the current one (and any seed row) read back as written, while
/// cells ahead of the scan read as unpainted. `extras` carries
/// caller-supplied values, identical for every invocation of a scan.
///
/// Rules must be total over valid scan positions. Failure is reserved for
/// genuinely unevaluable configurations (missing extras, a zero modulus);
/// it abandons the whole scan.
pub trait CellRule {
    /// Returns whether the cell at `pos` is painted.
    fn evaluate(
        &self,
        view: &GridView<'_>,
        pos: CellPos,
        extras: &Extras,
    ) -> Result<bool, RuleError>;
}

/// A failure produced by a cell rule.
///
/// Rules construct these with [`RuleError::new`]; extras lookups convert
/// automatically via `?`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RuleError {
    /// Human-readable description of the failure.
    message: String,
}

impl RuleError {
    /// Creates a rule error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ExtrasError> for RuleError {
    fn from(err: ExtrasError) -> Self {
        Self::new(err.to_string())
    }
}

/// Auxiliary values handed unchanged to every rule invocation.
///
/// Values are addressed by slot index, in the order they were added.
///
/// # Example
///
/// ```
/// use quadrille_grid::{Extra, Extras};
///
/// let extras = Extras::new()
///     .with(Extra::Int(3))
///     .with(Extra::IntSeq(vec![1, 2, 3, 4, 6, 8]));
///
/// assert_eq!(extras.int(0), Ok(3));
/// assert_eq!(extras.int_seq(1).map(|s| s.len()), Ok(6));
/// assert!(extras.float(0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extras {
    /// Values in slot order.
    values: Vec<Extra>,
}

impl Extras {
    /// Creates an empty extras list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends a value, builder style.
    pub fn with(mut self, value: Extra) -> Self {
        self.values.push(value);
        self
    }

    /// Appends a value in place.
    pub fn push(&mut self, value: Extra) {
        self.values.push(value);
    }

    /// Gets the value at `slot`, if present.
    pub fn get(&self, slot: usize) -> Option<&Extra> {
        self.values.get(slot)
    }

    /// Gets the integer at `slot`.
    pub fn int(&self, slot: usize) -> Result<i64, ExtrasError> {
        match self.slot(slot)? {
            Extra::Int(v) => Ok(*v),
            other => Err(ExtrasError::Type {
                slot,
                expected: ExtraKind::Int,
                got: other.kind(),
            }),
        }
    }

    /// Gets the float at `slot`.
    pub fn float(&self, slot: usize) -> Result<f64, ExtrasError> {
        match self.slot(slot)? {
            Extra::Float(v) => Ok(*v),
            other => Err(ExtrasError::Type {
                slot,
                expected: ExtraKind::Float,
                got: other.kind(),
            }),
        }
    }

    /// Gets the integer sequence at `slot`.
    pub fn int_seq(&self, slot: usize) -> Result<&[u64], ExtrasError> {
        match self.slot(slot)? {
            Extra::IntSeq(v) => Ok(v),
            other => Err(ExtrasError::Type {
                slot,
                expected: ExtraKind::IntSeq,
                got: other.kind(),
            }),
        }
    }

    fn slot(&self, slot: usize) -> Result<&Extra, ExtrasError> {
        self.values.get(slot).ok_or(ExtrasError::Missing { slot })
    }
}

impl From<Vec<Extra>> for Extras {
    fn from(values: Vec<Extra>) -> Self {
        Self { values }
    }
}

/// A single auxiliary value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extra {
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A sequence of unsigned integers.
    IntSeq(Vec<u64>),
}

impl Extra {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ExtraKind {
        match self {
            Extra::Int(_) => ExtraKind::Int,
            Extra::Float(_) => ExtraKind::Float,
            Extra::IntSeq(_) => ExtraKind::IntSeq,
        }
    }
}

/// The kind of an [`Extra`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraKind {
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Sequence of unsigned integers.
    IntSeq,
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtraKind::Int => "int",
            ExtraKind::Float => "float",
            ExtraKind::IntSeq => "int sequence",
        };
        write!(f, "{}", name)
    }
}

/// Error looking up or typing an extras slot.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExtrasError {
    /// No value at the requested slot.
    #[error("missing extras slot {slot}")]
    Missing {
        /// The slot that was requested.
        slot: usize,
    },

    /// A value was present but had the wrong kind.
    #[error("extras slot {slot}: expected {expected}, got {got}")]
    Type {
        /// The slot that was requested.
        slot: usize,
        /// The kind that was expected.
        expected: ExtraKind,
        /// The kind that was actually present.
        got: ExtraKind,
    },
}
