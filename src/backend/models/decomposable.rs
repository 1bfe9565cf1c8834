//! Capability interface for foreign composite terms.
//!
//! Any term representation can take part in traversal and unification by
//! exposing a tag and an ordered argument list, and by rebuilding itself
//! from new arguments. The engine never looks past this trait.

use std::fmt::Debug;
use std::sync::Arc;

use super::Term;

/// A composite term that can be taken apart and put back together.
///
/// # Implementing
///
/// ```
/// use std::sync::Arc;
/// use unific::{Decomposable, Term};
///
/// #[derive(Debug)]
/// struct Pair(Vec<Term>);
///
/// impl Decomposable for Pair {
///     fn tag(&self) -> &str {
///         "pair"
///     }
///     fn args(&self) -> &[Term] {
///         &self.0
///     }
///     fn rebuild(&self, args: Vec<Term>) -> Arc<dyn Decomposable> {
///         Arc::new(Pair(args))
///     }
/// }
///
/// let pair = Term::composite(Pair(vec![Term::Long(1), Term::Long(2)]));
/// assert_eq!(pair.to_string(), "pair(1, 2)");
/// ```
pub trait Decomposable: Debug + Send + Sync {
    /// Identifies the kind of composite. Two composites only unify when
    /// their tags are equal.
    fn tag(&self) -> &str;

    /// The ordered sub-terms
    fn args(&self) -> &[Term];

    /// Build a composite of the same kind from new sub-terms
    fn rebuild(&self, args: Vec<Term>) -> Arc<dyn Decomposable>;

    /// Number of sub-terms
    #[inline]
    fn arity(&self) -> usize {
        self.args().len()
    }
}

/// A named compound term, `name(arg, ...)`.
///
/// Provided for consumers that do not bring their own composite type.
#[derive(Debug, Clone, PartialEq)]
pub struct Functor {
    pub name: String,
    pub args: Vec<Term>,
}

impl Functor {
    pub fn new(name: impl Into<String>, args: Vec<Term>) -> Self {
        Functor {
            name: name.into(),
            args,
        }
    }
}

impl Decomposable for Functor {
    fn tag(&self) -> &str {
        &self.name
    }

    fn args(&self) -> &[Term] {
        &self.args
    }

    fn rebuild(&self, args: Vec<Term>) -> Arc<dyn Decomposable> {
        Arc::new(Functor {
            name: self.name.clone(),
            args,
        })
    }
}
