//! Module `types` provides the basic building blocks shared by every pass:
//! literal/variable newtypes, the flags used by the store, and the error
//! hierarchy threaded through the pipeline.

/// methods on flags used by `Constraint`
pub mod flags;

pub use self::flags::*;

use std::fmt;

/// A variable index. `0` is never a valid value.
pub type VarId = u32;

/// A signed literal: the absolute value is the variable index, the sign is
/// the phase. Negation flips the sign; `0` is never a valid literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit(i32);

impl Lit {
    /// Panics on `0`, matching the invariant that `0` never denotes a literal.
    pub fn new(raw: i32) -> Self {
        assert_ne!(raw, 0, "literal 0 is not valid");
        Lit(raw)
    }
    pub fn var(self) -> VarId {
        self.0.unsigned_abs()
    }
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
    pub fn positive(self) -> Lit {
        Lit(self.0.abs())
    }
}

impl std::ops::Not for Lit {
    type Output = Lit;
    fn not(self) -> Lit {
        Lit(-self.0)
    }
}

impl From<Lit> for i32 {
    fn from(l: Lit) -> i32 {
        l.0
    }
}

impl TryFrom<i32> for Lit {
    type Error = TransformError;
    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        if raw == 0 {
            Err(TransformError::InvalidLiteral {
                literal: raw,
                num_vars: 0,
            })
        } else {
            Ok(Lit(raw))
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can abort the pipeline. Variants map directly onto the two
/// fatal error categories of the transformer's error model: input
/// malformation and (conceptually) resource exhaustion, which in safe Rust
/// is left to the global allocator rather than represented here. Derived
/// inconsistency (an unsatisfiable parity sum) is deliberately NOT a
/// variant of this enum: it is a normal, representable outcome of the
/// pipeline, not an error.
#[derive(Debug)]
pub enum TransformError {
    /// the `p cnf V M` (or similar) header line is missing or malformed.
    InvalidHeader,
    /// a literal fell outside `[-num_vars, num_vars] \ {0}`.
    InvalidLiteral { literal: i32, num_vars: u32 },
    /// the header's declared clause count didn't match what was parsed.
    ClauseCountMismatch { declared: usize, parsed: usize },
    /// input ended before a clause's terminating `0`.
    UnexpectedEof,
    /// a clause line was missing its terminating `0`.
    MissingTerminator,
    /// any lower-level I/O failure (file open, pipe spawn, write).
    Io(std::io::Error),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::InvalidHeader => write!(f, "missing or malformed DIMACS header"),
            TransformError::InvalidLiteral { literal, num_vars } => {
                write!(f, "literal {literal} out of range for {num_vars} variables")
            }
            TransformError::ClauseCountMismatch { declared, parsed } => write!(
                f,
                "header declared {declared} clauses but {parsed} were parsed"
            ),
            TransformError::UnexpectedEof => write!(f, "unexpected end of input"),
            TransformError::MissingTerminator => write!(f, "clause missing terminating 0"),
            TransformError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<std::io::Error> for TransformError {
    fn from(e: std::io::Error) -> Self {
        TransformError::Io(e)
    }
}

/// The general fallible-with-value return shape used by parsing/emission.
pub type TransformResult<T> = Result<T, TransformError>;
