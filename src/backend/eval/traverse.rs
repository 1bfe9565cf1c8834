//! Generic term traversal.
//!
//! A single recursive walker, parameterised by a per-variable callback,
//! underlies `instantiate` and `rename`:
//! - the wildcard is returned unchanged
//! - a variable is replaced by whatever the callback returns
//! - scalars (strings included) are returned unchanged
//! - sequences, maps and foreign composites are rebuilt from their
//!   traversed members

use std::collections::HashSet;

use crate::backend::models::{Term, VarList, Variable};

/// Rebuild `term`, replacing every variable with `on_var(variable)`.
pub fn traverse<F>(term: &Term, on_var: &mut F) -> Term
where
    F: FnMut(&Variable) -> Term,
{
    match term {
        Term::Wildcard => Term::Wildcard,
        Term::Var(v) => on_var(v),
        Term::Seq(items) => Term::Seq(items.iter().map(|t| traverse(t, on_var)).collect()),
        // Keys are traversed too; they may hold variables.
        Term::Map(entries) => Term::Map(
            entries
                .iter()
                .map(|(k, v)| (traverse(k, on_var), traverse(v, on_var)))
                .collect(),
        ),
        Term::Functor(f) => {
            let args = f.args().iter().map(|t| traverse(t, on_var)).collect();
            Term::Functor(f.rebuild(args))
        }
        // All other values pass through unchanged
        _ => term.clone(),
    }
}

/// Visit every variable occurrence in `term`, left to right, without
/// rebuilding anything.
pub fn visit_variables<F>(term: &Term, visit: &mut F)
where
    F: FnMut(&Variable),
{
    match term {
        Term::Var(v) => visit(v),
        Term::Seq(items) => items.iter().for_each(|t| visit_variables(t, visit)),
        Term::Map(entries) => entries.iter().for_each(|(k, v)| {
            visit_variables(k, visit);
            visit_variables(v, visit);
        }),
        Term::Functor(f) => f.args().iter().for_each(|t| visit_variables(t, visit)),
        _ => {}
    }
}

/// Distinct variables of `term` in first-encounter order
pub fn collect_variables(term: &Term) -> VarList {
    let mut seen = HashSet::new();
    let mut vars = VarList::new();
    visit_variables(term, &mut |v: &Variable| {
        if seen.insert(v.clone()) {
            vars.push(v.clone());
        }
    });
    vars
}
