//! Logical variables.
//!
//! A variable is identified by a process-wide sequence number handed out by
//! an atomic counter. The display name is only useful for pretty-printing:
//! two variables created with the same name are distinct.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Display name given to variables created without one
pub const DEFAULT_VAR_NAME: &str = "new_var";

/// Global counter for variable identities
static VARIABLE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A logical variable.
///
/// Cloning is cheap (the name is shared) and preserves identity.
/// Ordering follows creation order.
#[derive(Clone)]
pub struct Variable {
    id: u64,
    name: Arc<str>,
}

impl Variable {
    /// Create a fresh variable with the given display name
    pub fn new(name: &str) -> Self {
        Variable {
            id: VARIABLE_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: Arc::from(name),
        }
    }

    /// Create a fresh variable named `new_var`
    pub fn anonymous() -> Self {
        Self::new(DEFAULT_VAR_NAME)
    }

    /// Create a fresh variable sharing this variable's display name
    pub fn renamed(&self) -> Self {
        Variable {
            id: VARIABLE_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: Arc::clone(&self.name),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}#{}", self.name, self.id)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}
