pub mod decomposable;
pub mod term;
pub mod variable;

pub use decomposable::{Decomposable, Functor};
pub use term::Term;
pub use variable::{Variable, DEFAULT_VAR_NAME};

use smallvec::SmallVec;

/// Variables collected from a term, in first-encounter order.
/// Most terms mention only a handful, so these stay on the stack.
pub type VarList = SmallVec<[Variable; 8]>;
