//! Unification failure.
//!
//! There is exactly one failure kind. The variants only record why the
//! terms could not be made equal, for diagnostics.

use std::fmt;

use crate::backend::models::{Term, Variable};

/// Two terms cannot be made equal under any binding
#[derive(Debug, Clone, PartialEq)]
pub enum UnifyError {
    /// Different shapes, types or unequal ground values
    Mismatch { left: Term, right: Term },

    /// Composites of the same kind with different sizes
    ArityMismatch { left: usize, right: usize },

    /// Binding `var` to `term` would create a cycle (only reported when the
    /// occurs-check is enabled)
    OccursCheck { var: Variable, term: Term },
}

impl UnifyError {
    pub(crate) fn mismatch(left: &Term, right: &Term) -> Self {
        UnifyError::Mismatch {
            left: left.clone(),
            right: right.clone(),
        }
    }
}

impl fmt::Display for UnifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnifyError::Mismatch { left, right } => {
                write!(f, "Cannot unify {} with {}", left, right)
            }
            UnifyError::ArityMismatch { left, right } => {
                write!(f, "Arity mismatch: {} vs {}", left, right)
            }
            UnifyError::OccursCheck { var, term } => {
                write!(f, "Occurs check: {} occurs in {}", var, term)
            }
        }
    }
}

impl std::error::Error for UnifyError {}
