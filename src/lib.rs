/// Unific - structural unification for logic variables
///
/// This library computes the most general unifier (MGU) of two terms that
/// may contain logical variables, or reports that none exists. It is the
/// primitive a logic-programming engine, a type checker or a pattern-based
/// query layer is built on.
///
/// # Architecture
///
/// 1. **Term Model** (`backend::models`)
///    - `Term`: variables, the wildcard, ground scalars, sequences, maps
///      and foreign composites
///    - `Variable`: identity-distinct placeholders with a display name
///    - `Decomposable`: the capability a foreign composite implements
///
/// 2. **Binding Environment** (`backend::environment`)
///    - Copy-on-write map from variables to terms
///    - `instantiate`, `rename`, `variables` built on a generic traversal
///
/// 3. **Unifier** (`backend::eval`)
///    - `unify(a, b, &env)` returns a new environment or a `UnifyError`
///    - Optional occurs-check and per-unifier tracing
///
/// # Example
///
/// ```rust
/// use unific::backend::*;
///
/// let v = Variable::new("v");
/// let pattern = Term::seq(vec![Term::Long(1), Term::Var(v.clone()), Term::Long(3)]);
/// let value = Term::seq(vec![Term::Long(1), Term::Long(2), Term::Long(3)]);
///
/// let env = unify(&pattern, &value, &Environment::new()).unwrap();
/// assert_eq!(env.instantiate(&Term::Var(v)), Term::Long(2));
///
/// assert!(unify(&Term::Long(42), &Term::Long(35), &Environment::new()).is_err());
/// ```
///
/// # Limitations
///
/// - No occurs-check unless enabled through `UnifyConfig`; a cyclic binding
///   makes `instantiate` loop forever
/// - Maps are unified entry by entry in iteration order, not by key

pub mod backend;
pub mod config;
pub mod query;

pub use backend::{
    unify, Decomposable, Environment, Functor, Term, TraceLevel, Unifier, UnifyError,
    UnifyResult, Variable,
};
pub use config::{ConfigError, UnifyConfig};
pub use query::{Record, RecordSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The shared wildcard term
#[inline]
pub fn wildcard() -> Term {
    Term::Wildcard
}
