// Backend module for unification
//
// - `models`: terms, variables and the `Decomposable` extension point
// - `environment`: copy-on-write variable bindings
// - `eval`: traversal and the unifier
// - `trace`: per-unifier diagnostic verbosity

pub mod environment;
pub mod eval;
pub mod models;
pub mod trace;

pub use environment::Environment;
pub use eval::{unify, Unifier, UnifyError, UnifyResult};
pub use models::*;
pub use trace::TraceLevel;
