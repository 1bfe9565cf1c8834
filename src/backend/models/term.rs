use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use super::{Decomposable, Functor, Variable};

/// A term that unification operates on.
///
/// Ground scalars are opaque. Sequences, maps and foreign composites are
/// decomposed member-wise. `String` is a scalar even though it could be
/// iterated.
#[derive(Debug, Clone)]
pub enum Term {
    /// A logical variable
    Var(Variable),
    /// Matches anything and is never bound
    Wildcard,
    /// Nil/empty
    Nil,
    /// A boolean literal
    Bool(bool),
    /// An integer literal
    Long(i64),
    /// A floating point literal
    Float(f64),
    /// A symbolic constant (e.g. a record key)
    Atom(String),
    /// A string literal
    String(String),
    /// An ordered sequence
    Seq(Vec<Term>),
    /// An associative container with unique keys, iterated in insertion order
    Map(Vec<(Term, Term)>),
    /// A foreign composite accessed through [`Decomposable`]
    Functor(Arc<dyn Decomposable>),
}

impl Term {
    /// A term holding a fresh variable named `name`
    pub fn var(name: &str) -> Self {
        Term::Var(Variable::new(name))
    }

    #[inline]
    pub fn wildcard() -> Self {
        Term::Wildcard
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Term::String(s.into())
    }

    pub fn seq(items: impl IntoIterator<Item = Term>) -> Self {
        Term::Seq(items.into_iter().collect())
    }

    /// Build a map from entries in order.
    ///
    /// Re-inserting a key that is already present replaces its value and
    /// keeps the original position.
    pub fn map(entries: impl IntoIterator<Item = (Term, Term)>) -> Self {
        let mut out: Vec<(Term, Term)> = Vec::new();
        for (key, value) in entries {
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Term::Map(out)
    }

    pub fn functor(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Functor(Arc::new(Functor::new(name, args)))
    }

    /// Wrap any [`Decomposable`] as a term
    pub fn composite<D: Decomposable + 'static>(inner: D) -> Self {
        Term::Functor(Arc::new(inner))
    }

    #[inline]
    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Term::Wildcard)
    }

    /// Check if this term is an opaque scalar (never decomposed)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Term::Nil
                | Term::Bool(_)
                | Term::Long(_)
                | Term::Float(_)
                | Term::Atom(_)
                | Term::String(_)
        )
    }

    /// Check if this term is a sequence, map or foreign composite
    pub fn is_composite(&self) -> bool {
        matches!(self, Term::Seq(_) | Term::Map(_) | Term::Functor(_))
    }

    /// True iff the term contains no variables and no wildcard
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) | Term::Wildcard => false,
            Term::Seq(items) => items.iter().all(Term::is_ground),
            Term::Map(entries) => entries.iter().all(|(k, v)| k.is_ground() && v.is_ground()),
            Term::Functor(f) => f.args().iter().all(Term::is_ground),
            _ => true,
        }
    }

    /// True iff `var` appears anywhere inside this term
    pub fn occurs(&self, var: &Variable) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::Seq(items) => items.iter().any(|t| t.occurs(var)),
            Term::Map(entries) => entries.iter().any(|(k, v)| k.occurs(var) || v.occurs(var)),
            Term::Functor(f) => f.args().iter().any(|t| t.occurs(var)),
            _ => false,
        }
    }

    /// Look up a value in a map term by key
    pub fn get(&self, key: &Term) -> Option<&Term> {
        match self {
            Term::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Wildcard, Term::Wildcard) => true,
            (Term::Nil, Term::Nil) => true,
            (Term::Bool(a), Term::Bool(b)) => a == b,
            (Term::Long(a), Term::Long(b)) => a == b,
            (Term::Float(a), Term::Float(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::String(a), Term::String(b)) => a == b,
            (Term::Seq(a), Term::Seq(b)) => a == b,
            (Term::Map(a), Term::Map(b)) => a == b,
            (Term::Functor(a), Term::Functor(b)) => a.tag() == b.tag() && a.args() == b.args(),
            _ => false,
        }
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Long(n)
    }
}

impl From<f64> for Term {
    fn from(x: f64) -> Self {
        Term::Float(x)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Bool(b)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::String(s.to_string())
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Var(v)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::Seq(items)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::Wildcard => write!(f, "_"),
            Term::Nil => write!(f, "nil"),
            Term::Bool(b) => write!(f, "{}", b),
            Term::Long(n) => write!(f, "{}", n),
            Term::Float(x) => write!(f, "{}", x),
            Term::Atom(s) => write!(f, ":{}", s),
            Term::String(s) => write!(f, "{:?}", s),
            Term::Seq(items) => write!(f, "[{}]", items.iter().join(", ")),
            Term::Map(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .map(|(k, v)| format!("{} => {}", k, v))
                    .join(", ")
            ),
            Term::Functor(c) => write!(f, "{}({})", c.tag(), c.args().iter().join(", ")),
        }
    }
}
