//! Pattern queries over an in-memory record set.
//!
//! Records are maps from key atoms to ground values, all built with the
//! same key order. A query names a few fields; every other key is filled
//! with the wildcard, and the pattern is built in the record set's key
//! order so that positional map unification lines keys up.

use tracing::debug;

use crate::backend::{Environment, Term, Unifier};

/// A record: key atoms mapped to ground values
pub type Record = Term;

/// Records sharing a fixed key order
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    keys: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Self {
        RecordSet {
            keys: keys.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    /// Add a record from `(key, value)` fields. Fields are stored in the
    /// set's key order; keys the set does not know are ignored and missing
    /// keys become `Nil`.
    pub fn insert<K: AsRef<str>>(&mut self, fields: impl IntoIterator<Item = (K, Term)>) {
        let fields: Vec<(String, Term)> = fields
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v))
            .collect();
        let record = self.layout(|key| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Term::Nil)
        });
        self.records.push(record);
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the pattern for `fields`: every key in order, wildcard where
    /// the query says nothing.
    pub fn pattern<K: AsRef<str>>(&self, fields: &[(K, Term)]) -> Term {
        self.layout(|key| {
            fields
                .iter()
                .find(|(k, _)| k.as_ref() == key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Term::Wildcard)
        })
    }

    /// Every record that unifies with the pattern for `fields`
    pub fn query<K: AsRef<str>>(&self, unifier: &Unifier, fields: &[(K, Term)]) -> Vec<&Record> {
        let pattern = self.pattern(fields);
        debug!(target: "unific::query", %pattern, "querying {} records", self.records.len());

        let env = Environment::new();
        self.records
            .iter()
            .filter(|record| unifier.unify(record, &pattern, &env).is_ok())
            .collect()
    }

    fn layout(&self, mut value_for: impl FnMut(&str) -> Term) -> Term {
        Term::map(
            self.keys
                .iter()
                .map(|key| (Term::atom(key.as_str()), value_for(key.as_str()))),
        )
    }

    /// The demo people database
    pub fn people() -> Self {
        let mut db = RecordSet::new(["first", "last", "age", "occupation"]);
        for (first, last, age, occupation) in [
            ("John", "Smith", 40, "yak shaver"),
            ("Joe", "Bloe", 30, "cat herder"),
            ("Jack", "White", 40, "telephone sanitizer"),
            ("John", "NotSmith", 90, "inspirational speaker"),
        ] {
            db.insert([
                ("first", Term::string(first)),
                ("last", Term::string(last)),
                ("age", Term::Long(age)),
                ("occupation", Term::string(occupation)),
            ]);
        }
        db
    }
}

/// The string value stored under `key`, if there is one
pub fn field<'r>(record: &'r Record, key: &str) -> Option<&'r str> {
    match record.get(&Term::atom(key)) {
        Some(Term::String(s)) => Some(s.as_str()),
        _ => None,
    }
}
