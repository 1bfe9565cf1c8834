//! Traversal and unification.
//!
//! - `traverse`: generic rebuild-with-callback walk used by `instantiate`
//!   and `rename`, plus variable collection
//! - `unify`: the unification algorithm and its `Unifier` driver
//! - `errors`: the single failure kind

pub mod errors;
pub mod traverse;
pub mod unify;

#[cfg(test)]
mod tests;

pub use errors::UnifyError;
pub use traverse::{collect_variables, traverse, visit_variables};
pub use unify::{unify, Unifier, UnifyResult};
