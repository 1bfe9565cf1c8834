//! Binding environment for unification.
//!
//! An `Environment` maps variables to terms. It behaves as an immutable
//! value: `extend` returns a new environment and leaves the receiver alone.
//! The one exception is `rename`, which records its old→new variable
//! bindings in place and therefore takes `&mut self`.
//!
//! # Copy-on-Write
//!
//! Bindings live behind a single `Arc`. Cloning an environment is one atomic
//! increment; the first write to a shared environment copies the map via
//! `Arc::make_mut`. Every environment is a self-contained snapshot: no
//! environment ever observes writes made through another.
//!
//! # Cycles
//!
//! Nothing prevents a chain of bindings from looping back on itself (see
//! `UnifyConfig::occurs_check`). `instantiate` does not terminate on a
//! cyclic environment.


use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use tracing::trace;

use super::eval::traverse::{collect_variables, traverse};
use super::models::{Term, VarList, Variable};

/// A mapping from variables to terms, extended by copy-on-write.
///
/// Invariant: no binding has the wildcard as its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: Arc<HashMap<Variable, Term>>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: Arc::new(HashMap::new()),
        }
    }

    /// Create an environment from a caller-supplied set of bindings.
    /// Pairs whose value is the wildcard are dropped.
    pub fn from_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (Variable, Term)>,
    {
        Environment::new().extend(bindings)
    }

    /// The term bound to `var`, if any
    #[inline]
    pub fn lookup(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// True iff `var` has no binding
    #[inline]
    pub fn is_fresh(&self, var: &Variable) -> bool {
        !self.bindings.contains_key(var)
    }

    /// Return a copy of this environment plus `mapping`.
    ///
    /// Pairs whose value is the wildcard are silently dropped. The receiver
    /// is left unchanged.
    pub fn extend<I>(&self, mapping: I) -> Environment
    where
        I: IntoIterator<Item = (Variable, Term)>,
    {
        let mut next = self.clone();
        let mut mapping = mapping
            .into_iter()
            .filter(|(_, term)| !term.is_wildcard())
            .peekable();

        if mapping.peek().is_some() {
            Arc::make_mut(&mut next.bindings).extend(mapping);
        }
        next
    }

    /// Return a copy of this environment with `var` bound to `term`
    #[inline]
    pub fn bind(&self, var: Variable, term: Term) -> Environment {
        self.extend(std::iter::once((var, term)))
    }

    /// Substitute bound variables throughout `term`, chasing binding chains
    /// until a fresh variable or a non-variable term is reached.
    pub fn instantiate(&self, term: &Term) -> Term {
        instantiate_in(&self.bindings, term)
    }

    /// Alpha-rename `term`.
    ///
    /// Every fresh variable is replaced by a new variable with the same
    /// display name, and the old→new binding is recorded in this
    /// environment so repeated occurrences get the same replacement. Bound
    /// variables are instantiated.
    pub fn rename(&mut self, term: &Term) -> Term {
        let bindings = Arc::make_mut(&mut self.bindings);
        traverse(term, &mut |v: &Variable| match bindings.get(v).cloned() {
            Some(bound) => instantiate_in(bindings, &bound),
            None => {
                let renamed = v.renamed();
                trace!(target: "unific::environment::rename", from = %v, to = ?renamed);
                bindings.insert(v.clone(), Term::Var(renamed.clone()));
                Term::Var(renamed)
            }
        })
    }

    /// The distinct fresh variables reachable from `term`, in first-encounter
    /// order. Bound variables are looked through, not reported.
    pub fn variables(&self, term: &Term) -> VarList {
        collect_variables(&self.instantiate(term))
    }

    /// Number of bindings
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings, ordered by variable creation
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings.iter().sorted_by(|a, b| a.0.cmp(b.0))
    }
}

fn instantiate_in(bindings: &HashMap<Variable, Term>, term: &Term) -> Term {
    traverse(term, &mut |v: &Variable| match bindings.get(v) {
        Some(bound) => instantiate_in(bindings, bound),
        None => Term::Var(v.clone()),
    })
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        write!(
            f,
            "{{ {} }}",
            self.iter().map(|(k, v)| format!("{} => {}", k, v)).join(", ")
        )
    }
}

impl FromIterator<(Variable, Term)> for Environment {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        Environment::from_bindings(iter)
    }
}
