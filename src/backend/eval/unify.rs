//! Syntactic unification (Robinson-style, no occurs-check by default).
//!
//! `Unifier::unify` dereferences both operands against the environment and
//! then either binds a fresh variable, compares scalars, or walks two
//! composites of the same kind member by member, threading the environment
//! through each step. The first failing member aborts the whole call; the
//! caller gets back either the complete new environment or a `UnifyError`,
//! never a partially extended one.
//!
//! Maps are paired positionally by iteration order, not by key. Two maps
//! holding the same entries in a different order do not unify unless the
//! entries happen to unify pairwise.
//!
//! Integers and floats compare numerically, so `42` unifies with `42.0`.
//! `NaN` is never equal to anything and so never unifies, not even with
//! itself.

use tracing::{debug, trace};

use super::errors::UnifyError;
use crate::backend::environment::Environment;
use crate::backend::models::{Term, Variable};
use crate::backend::trace::TraceLevel;
use crate::config::UnifyConfig;

/// Result of a unification attempt
pub type UnifyResult = Result<Environment, UnifyError>;

/// Runs unification with a fixed verbosity and occurs-check policy
#[derive(Debug, Clone, Default)]
pub struct Unifier {
    trace: TraceLevel,
    occurs_check: bool,
}

impl Unifier {
    /// A silent unifier without occurs-check
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &UnifyConfig) -> Self {
        Unifier {
            trace: TraceLevel::new(config.trace_level),
            occurs_check: config.occurs_check,
        }
    }

    pub fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }

    pub fn with_trace_level(mut self, level: TraceLevel) -> Self {
        self.trace = level;
        self
    }

    /// Set the trace level, or raise it by one when `level` is `None`
    pub fn trace(&mut self, level: Option<u8>) {
        self.trace.trace(level);
    }

    /// Turn tracing off
    pub fn untrace(&mut self) {
        self.trace.untrace();
    }

    #[inline]
    pub fn trace_level(&self) -> TraceLevel {
        self.trace
    }

    #[inline]
    pub fn occurs_check(&self) -> bool {
        self.occurs_check
    }

    /// Compute the most general unifier of `a` and `b` on top of `env`.
    ///
    /// Returns the extended environment; `env` itself is never modified.
    pub fn unify(&self, a: &Term, b: &Term, env: &Environment) -> UnifyResult {
        if self.trace.shows(TraceLevel::CALLS) {
            debug!(target: "unific::unify", "unifying {} and {}", a, b);
        }

        let result = self.unify_instantiated(&env.instantiate(a), &env.instantiate(b), env);

        if self.trace.shows(TraceLevel::RESULTS) {
            match &result {
                Ok(next) => trace!(target: "unific::unify", "unified {} and {}: {}", a, b, next),
                Err(e) => trace!(target: "unific::unify", "failed: {}", e),
            }
        }
        result
    }

    /// Unify each pair in turn, threading the environment left to right
    pub fn unify_all(&self, pairs: &[(Term, Term)], env: &Environment) -> UnifyResult {
        self.unify_members(pairs.iter().map(|(a, b)| (a, b)), env)
    }

    fn unify_members<'t, I>(&self, pairs: I, env: &Environment) -> UnifyResult
    where
        I: IntoIterator<Item = (&'t Term, &'t Term)>,
    {
        pairs
            .into_iter()
            .try_fold(env.clone(), |acc, (a, b)| self.unify(a, b, &acc))
    }

    fn unify_instantiated(&self, a: &Term, b: &Term, env: &Environment) -> UnifyResult {
        match (a, b) {
            // Wildcard matches anything and is never bound
            (Term::Wildcard, _) | (_, Term::Wildcard) => Ok(env.clone()),

            // Binding a variable to itself would create a one-step cycle
            (Term::Var(x), Term::Var(y)) if x == y => Ok(env.clone()),

            // Any remaining variable is fresh; a var-var pair binds the left one
            (Term::Var(x), _) => self.bind(x, b, env),
            (_, Term::Var(y)) => self.bind(y, a, env),

            (Term::Seq(xs), Term::Seq(ys)) => {
                check_arity(xs.len(), ys.len())?;
                self.unify_members(xs.iter().zip(ys.iter()), env)
            }

            // Entries pair up by position; each key/value pair unifies like
            // a two-element sequence.
            (Term::Map(xs), Term::Map(ys)) => {
                check_arity(xs.len(), ys.len())?;
                self.unify_members(
                    xs.iter()
                        .zip(ys.iter())
                        .flat_map(|((ka, va), (kb, vb))| [(ka, kb), (va, vb)]),
                    env,
                )
            }

            (Term::Functor(f), Term::Functor(g)) => {
                if f.tag() != g.tag() {
                    return Err(UnifyError::mismatch(a, b));
                }
                check_arity(f.arity(), g.arity())?;
                self.unify_members(f.args().iter().zip(g.args().iter()), env)
            }

            // Ground scalars (strings included) compare atomically
            _ if a.is_scalar() && b.is_scalar() => {
                if scalars_equal(a, b) {
                    Ok(env.clone())
                } else {
                    Err(UnifyError::mismatch(a, b))
                }
            }

            _ => Err(UnifyError::mismatch(a, b)),
        }
    }

    fn bind(&self, var: &Variable, term: &Term, env: &Environment) -> UnifyResult {
        if self.occurs_check && term.occurs(var) {
            return Err(UnifyError::OccursCheck {
                var: var.clone(),
                term: term.clone(),
            });
        }
        Ok(env.bind(var.clone(), term.clone()))
    }
}

/// Scalar equality, with integers and floats compared by value
fn scalars_equal(a: &Term, b: &Term) -> bool {
    match (a, b) {
        (Term::Long(l), Term::Float(f)) | (Term::Float(f), Term::Long(l)) => *l as f64 == *f,
        _ => a == b,
    }
}

#[inline]
fn check_arity(left: usize, right: usize) -> Result<(), UnifyError> {
    if left == right {
        Ok(())
    } else {
        Err(UnifyError::ArityMismatch { left, right })
    }
}

/// Unify `a` and `b` on top of `env` with a silent default `Unifier`
pub fn unify(a: &Term, b: &Term, env: &Environment) -> UnifyResult {
    Unifier::new().unify(a, b, env)
}
