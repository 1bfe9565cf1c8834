//! Tests for the unification algorithm.

use super::*;
use crate::backend::environment::Environment;
use crate::backend::models::{Term, Variable};
use crate::backend::trace::TraceLevel;
use crate::config::UnifyConfig;

fn empty() -> Environment {
    Environment::new()
}

fn longs(ns: &[i64]) -> Term {
    Term::seq(ns.iter().map(|n| Term::Long(*n)))
}

#[test]
fn test_ground_scalars() {
    assert_eq!(unify(&Term::Long(42), &Term::Long(42), &empty()), Ok(empty()));
    assert_eq!(
        unify(&Term::string("abc"), &Term::string("abc"), &empty()),
        Ok(empty())
    );
    assert!(unify(&Term::Long(42), &Term::Long(35), &empty()).is_err());
    assert!(unify(&Term::string("abc"), &Term::string("abd"), &empty()).is_err());
    assert!(unify(&Term::atom("abc"), &Term::string("abc"), &empty()).is_err());
}

#[test]
fn test_long_and_float_compare_by_value() {
    assert_eq!(unify(&Term::Long(42), &Term::Float(42.0), &empty()), Ok(empty()));
    assert_eq!(unify(&Term::Float(42.0), &Term::Long(42), &empty()), Ok(empty()));

    let err = unify(&Term::Long(42), &Term::Float(42.5), &empty()).unwrap_err();
    assert!(matches!(err, UnifyError::Mismatch { .. }));
    assert!(unify(&Term::Float(1.0), &Term::Long(2), &empty()).is_err());

    // Through a binding
    let v = Variable::new("v");
    let env = unify(&Term::Var(v.clone()), &Term::Long(40), &empty()).unwrap();
    assert!(unify(&Term::Var(v.clone()), &Term::Float(40.0), &env).is_ok());
    assert!(unify(&Term::Var(v), &Term::Float(40.1), &env).is_err());
}

#[test]
fn test_nan_never_unifies() {
    let nan = Term::Float(f64::NAN);
    assert!(unify(&nan, &nan.clone(), &empty()).is_err());
    assert!(unify(&nan, &Term::Long(0), &empty()).is_err());
}

#[test]
fn test_string_is_not_a_sequence() {
    let chars = Term::seq(vec![Term::string("a"), Term::string("b")]);
    assert!(unify(&Term::string("ab"), &chars, &empty()).is_err());
}

#[test]
fn test_variable_binds_either_side() {
    let v = Variable::new("v");

    let env = unify(&Term::Var(v.clone()), &Term::Long(42), &empty()).unwrap();
    assert_eq!(env.instantiate(&Term::Var(v.clone())), Term::Long(42));

    let env = unify(&Term::Long(42), &Term::Var(v.clone()), &empty()).unwrap();
    assert_eq!(env.lookup(&v), Some(&Term::Long(42)));
}

#[test]
fn test_var_var_binds_left_to_right() {
    let a = Variable::new("a");
    let b = Variable::new("b");

    let env = unify(&Term::Var(a.clone()), &Term::Var(b.clone()), &empty()).unwrap();

    assert_eq!(env.lookup(&a), Some(&Term::Var(b.clone())));
    assert!(env.is_fresh(&b));
}

#[test]
fn test_variable_with_itself_adds_nothing() {
    let v = Variable::new("v");
    let env = unify(&Term::Var(v.clone()), &Term::Var(v.clone()), &empty()).unwrap();
    assert!(env.is_empty());
}

#[test]
fn test_rebinding_bound_variable() {
    let v = Variable::new("v1");
    let env = unify(&Term::Var(v.clone()), &Term::Long(42), &empty()).unwrap();

    assert!(unify(&Term::Var(v.clone()), &Term::Long(42), &env).is_ok());
    assert!(unify(&Term::Var(v), &Term::Long(35), &env).is_err());
}

#[test]
fn test_wildcard_never_bound() {
    let v = Variable::new("v");

    assert_eq!(unify(&Term::Wildcard, &Term::Long(42), &empty()), Ok(empty()));
    assert_eq!(
        unify(&Term::Wildcard, &Term::Var(v.clone()), &empty()),
        Ok(empty())
    );
    assert_eq!(unify(&longs(&[1, 2, 3]), &Term::Wildcard, &empty()), Ok(empty()));

    let bound = unify(&Term::Var(v.clone()), &Term::Long(42), &empty()).unwrap();
    assert_eq!(unify(&Term::Var(v), &Term::Wildcard, &bound), Ok(bound.clone()));
}

#[test]
fn test_wildcard_inside_sequence() {
    let pattern = Term::seq(vec![Term::Long(1), Term::Wildcard, Term::Long(3)]);
    assert_eq!(unify(&pattern, &longs(&[1, 2, 3]), &empty()), Ok(empty()));
}

#[test]
fn test_sequences() {
    assert!(unify(&longs(&[1, 2, 3]), &longs(&[1, 2, 3]), &empty()).is_ok());

    let err = unify(&longs(&[1, 2, 3]), &longs(&[1, 2, 3, 4]), &empty()).unwrap_err();
    assert_eq!(err, UnifyError::ArityMismatch { left: 3, right: 4 });

    let v = Variable::new("v");
    let pattern = Term::seq(vec![Term::Long(1), Term::Var(v.clone()), Term::Long(3)]);
    let env = unify(&longs(&[1, 2, 3]), &pattern, &empty()).unwrap();
    assert_eq!(env.lookup(&v), Some(&Term::Long(2)));
}

#[test]
fn test_nested_sequences() {
    let pair = |k: &str, n: i64| Term::seq(vec![Term::string(k), Term::Long(n)]);
    let ab = Term::seq(vec![pair("a", 1), pair("b", 2)]);
    let xy = Term::seq(vec![pair("x", 3), pair("y", 4)]);

    assert!(unify(&ab, &ab.clone(), &empty()).is_ok());
    assert!(unify(&ab, &xy, &empty()).is_err());

    let v = Variable::new("middle");
    let full = Term::seq(vec![longs(&[1, 2]), longs(&[3, 4]), longs(&[5, 6])]);
    let holed = Term::seq(vec![longs(&[1, 2]), Term::Var(v.clone()), longs(&[5, 6])]);
    let env = unify(&full, &holed, &empty()).unwrap();
    assert_eq!(env.instantiate(&Term::Var(v)), longs(&[3, 4]));
}

#[test]
fn test_sequence_and_map_never_unify() {
    let seq = Term::seq(vec![Term::seq(vec![Term::atom("a"), Term::Long(1)])]);
    let map = Term::map(vec![(Term::atom("a"), Term::Long(1))]);
    assert!(unify(&seq, &map, &empty()).is_err());
}

#[test]
fn test_maps() {
    let a1 = Term::map(vec![(Term::string("a"), Term::Long(1))]);
    assert!(unify(&a1, &a1.clone(), &empty()).is_ok());

    let a2 = Term::map(vec![(Term::string("a"), Term::Long(2))]);
    let a3 = Term::map(vec![(Term::string("a"), Term::Long(3))]);
    assert!(unify(&a2, &a3, &empty()).is_err());
}

#[test]
fn test_map_keys_and_values_may_hold_variables() {
    let k = Variable::new("k");
    let v = Variable::new("v");
    let pattern = Term::map(vec![(Term::Var(k.clone()), Term::Var(v.clone()))]);
    let record = Term::map(vec![(Term::atom("age"), Term::Long(40))]);

    let env = unify(&pattern, &record, &empty()).unwrap();
    assert_eq!(env.lookup(&k), Some(&Term::atom("age")));
    assert_eq!(env.lookup(&v), Some(&Term::Long(40)));
}

#[test]
fn test_map_unification_is_positional() {
    let ab = Term::map(vec![
        (Term::atom("a"), Term::Long(1)),
        (Term::atom("b"), Term::Long(2)),
    ]);
    let ba = Term::map(vec![
        (Term::atom("b"), Term::Long(2)),
        (Term::atom("a"), Term::Long(1)),
    ]);

    // Same entries, different insertion order: entries pair by position,
    // so :a meets :b and the maps do not unify.
    assert_eq!(
        unify(&ab, &ba, &empty()),
        Err(UnifyError::mismatch(&Term::atom("a"), &Term::atom("b")))
    );
}

#[test]
fn test_map_size_mismatch() {
    let one = Term::map(vec![(Term::atom("a"), Term::Long(1))]);
    let two = Term::map(vec![
        (Term::atom("a"), Term::Long(1)),
        (Term::atom("b"), Term::Long(2)),
    ]);
    assert_eq!(
        unify(&one, &two, &empty()),
        Err(UnifyError::ArityMismatch { left: 1, right: 2 })
    );
}

#[test]
fn test_functors() {
    let x = Variable::new("x");
    let fact = Term::functor("parent", vec![Term::atom("tom"), Term::atom("bob")]);
    let goal = Term::functor("parent", vec![Term::atom("tom"), Term::Var(x.clone())]);

    let env = unify(&goal, &fact, &empty()).unwrap();
    assert_eq!(env.lookup(&x), Some(&Term::atom("bob")));

    let other = Term::functor("sibling", vec![Term::atom("tom"), Term::atom("bob")]);
    assert!(matches!(
        unify(&goal, &other, &empty()),
        Err(UnifyError::Mismatch { .. })
    ));

    let short = Term::functor("parent", vec![Term::atom("tom")]);
    assert_eq!(
        unify(&goal, &short, &empty()),
        Err(UnifyError::ArityMismatch { left: 2, right: 1 })
    );
}

#[test]
fn test_functor_and_sequence_never_unify() {
    let f = Term::functor("f", vec![Term::Long(1)]);
    assert!(unify(&f, &longs(&[1]), &empty()).is_err());
}

#[test]
fn test_variable_chains() {
    let v1 = Variable::new("v1");
    let v2 = Variable::new("v2");
    let (t1, t2) = (Term::Var(v1), Term::Var(v2));

    let linked = unify(&t1, &t2, &empty()).unwrap();
    let bound = unify(&t1, &Term::Long(42), &linked).unwrap();
    assert!(unify(&t2, &Term::Long(42), &bound).is_ok());
    assert!(unify(&t2, &Term::Long(35), &bound).is_err());

    let bound = unify(&t1, &Term::Long(42), &empty()).unwrap();
    let linked = unify(&t1, &t2, &bound).unwrap();
    assert!(unify(&t2, &Term::Long(42), &linked).is_ok());
    assert!(unify(&t2, &Term::Long(35), &linked).is_err());
}

#[test]
fn test_failure_leaves_environment_untouched() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let base = Environment::new().bind(Variable::new("z"), Term::Long(0));

    // x binds before the mismatch at the last position
    let left = Term::seq(vec![Term::Var(x.clone()), Term::Var(y.clone()), Term::Long(1)]);
    let right = longs(&[7, 8, 9]);

    assert!(unify(&left, &right, &base).is_err());
    assert_eq!(base.len(), 1);
    assert!(base.is_fresh(&x));
    assert!(base.is_fresh(&y));
}

#[test]
fn test_unify_all_threads_environment() {
    let x = Variable::new("x");
    let pairs = vec![
        (Term::Var(x.clone()), Term::Long(1)),
        (Term::Var(x.clone()), Term::Long(1)),
    ];
    let env = Unifier::new().unify_all(&pairs, &empty()).unwrap();
    assert_eq!(env.lookup(&x), Some(&Term::Long(1)));

    let clash = vec![
        (Term::Var(x.clone()), Term::Long(1)),
        (Term::Var(x), Term::Long(2)),
    ];
    assert!(Unifier::new().unify_all(&clash, &empty()).is_err());
}

#[test]
fn test_occurs_check_disabled_by_default() {
    let x = Variable::new("x");
    let cyclic = Term::seq(vec![Term::Var(x.clone())]);

    let env = unify(&Term::Var(x.clone()), &cyclic, &empty()).unwrap();
    assert_eq!(env.lookup(&x), Some(&cyclic));
}

#[test]
fn test_occurs_check_when_enabled() {
    let x = Variable::new("x");
    let y = Variable::new("y");
    let unifier = Unifier::new().with_occurs_check(true);

    // Direct
    let cyclic = Term::seq(vec![Term::Var(x.clone())]);
    assert_eq!(
        unifier.unify(&Term::Var(x.clone()), &cyclic, &empty()),
        Err(UnifyError::OccursCheck {
            var: x.clone(),
            term: cyclic.clone(),
        })
    );

    // Through an earlier binding
    let env = unifier
        .unify(&Term::Var(y.clone()), &Term::functor("f", vec![Term::Var(x.clone())]), &empty())
        .unwrap();
    assert!(matches!(
        unifier.unify(&Term::Var(x), &Term::seq(vec![Term::Var(y)]), &env),
        Err(UnifyError::OccursCheck { .. })
    ));
}

#[test]
fn test_from_config() {
    let config = UnifyConfig::default().with_trace_level(2).with_occurs_check(true);
    let unifier = Unifier::from_config(&config);

    assert_eq!(unifier.trace_level(), TraceLevel::RESULTS);
    assert!(unifier.occurs_check());
}

#[test]
fn test_with_trace_level() {
    let unifier = Unifier::new().with_trace_level(TraceLevel::CALLS);
    assert_eq!(unifier.trace_level(), TraceLevel::CALLS);
    assert!(!unifier.occurs_check());
}

#[test]
fn test_tracing_does_not_change_results() {
    let v = Variable::new("v");
    let left = Term::seq(vec![Term::Long(1), Term::Var(v.clone())]);
    let right = longs(&[1, 2]);

    let mut unifier = Unifier::new();
    let quiet = unifier.unify(&left, &right, &empty());

    unifier.trace(Some(3));
    let loud = tracing::subscriber::with_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish(),
        || unifier.unify(&left, &right, &empty()),
    );

    unifier.untrace();
    assert!(unifier.trace_level().is_silent());
    assert_eq!(quiet, loud);
}
