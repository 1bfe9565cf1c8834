//! Verbosity control for unification diagnostics.
//!
//! A `TraceLevel` is owned by whoever runs unification (normally a
//! `Unifier`), so there is no process-wide trace state. Output goes
//! through the `tracing` facade; install a subscriber to see it.

/// Diagnostic verbosity. Zero is silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TraceLevel(u8);

impl TraceLevel {
    pub const SILENT: TraceLevel = TraceLevel(0);

    /// One line per `unify` call, naming both operands
    pub const CALLS: TraceLevel = TraceLevel(1);

    /// Also report the resulting bindings or the failure
    pub const RESULTS: TraceLevel = TraceLevel(2);

    #[inline]
    pub const fn new(level: u8) -> Self {
        TraceLevel(level)
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_silent(self) -> bool {
        self.0 == 0
    }

    /// Set the level, or raise it by one when `level` is `None`
    pub fn trace(&mut self, level: Option<u8>) {
        self.0 = match level {
            Some(n) => n,
            None => self.0.saturating_add(1),
        };
    }

    /// Back to silent
    pub fn untrace(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub fn shows(self, wanted: TraceLevel) -> bool {
        !self.is_silent() && self >= wanted
    }
}

impl From<u8> for TraceLevel {
    fn from(level: u8) -> Self {
        TraceLevel(level)
    }
}
