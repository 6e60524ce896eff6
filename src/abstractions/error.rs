/*!

Error kinds for the core, matching the four failure categories of the design: malformed-problem
errors that are always fatal, and lookup failures that a caller can recover from.

`DomainError`, `BindingError`, and `ArithmeticError` indicate a contract violation — an
unstratified axiom set, a negative initial literal, a misused grouped-vector builder, a
division by zero in a cost expression — and are propagated, never swallowed. `LookupError`
is the normal way a probe into a not-yet-populated repository fails; callers are expected to
match on it and possibly populate the missing entry themselves.

*/

use thiserror::Error;

use crate::abstractions::IString;

#[derive(Debug, Error)]
pub enum DomainError {
  #[error("axiom set is not stratifiable: derived predicate `{predicate}` depends on its own negation")]
  UnstratifiedAxioms { predicate: IString },

  #[error("unsupported construct: {description}")]
  UnsupportedConstruct { description: String },

  #[error("negative literal `{atom}` in the initial state is not permitted")]
  NegativeInitialLiteral { atom: String },

  #[error("duplicate predicate name `{name}`")]
  DuplicatePredicateName { name: IString },
}

#[derive(Debug, Error)]
pub enum BindingError {
  #[error("grouped-vector input is not sorted by group id at position {position}")]
  UnsortedGroupInput { position: usize },

  #[error("group id {group_id} is out of bounds (num_groups = {num_groups})")]
  GroupIndexOutOfBounds { group_id: usize, num_groups: usize },
}

#[derive(Debug, Error)]
pub enum ArithmeticError {
  #[error("division by zero while evaluating a function expression")]
  DivisionByZero,

  #[error("undefined operator `{operator}` in a function expression")]
  UndefinedOperator { operator: String },
}

#[derive(Debug, Error)]
pub enum LookupError {
  #[error("no object interned at index {0:?}")]
  Object(crate::abstractions::Index),

  #[error("no atom interned at index {0:?}")]
  Atom(crate::abstractions::Index),

  #[error("no state interned at index {0:?}")]
  State(crate::abstractions::Index),

  #[error("index {index:?} exceeds the current population of {kind}")]
  OutOfRange { kind: &'static str, index: crate::abstractions::Index },
}

/// Aggregate error type for boundaries (such as problem loading) that must return a single
/// error type. The core itself prefers the specific error enums above.
#[derive(Debug, Error)]
pub enum MimirError {
  #[error(transparent)]
  Domain(#[from] DomainError),

  #[error(transparent)]
  Binding(#[from] BindingError),

  #[error(transparent)]
  Arithmetic(#[from] ArithmeticError),

  #[error(transparent)]
  Lookup(#[from] LookupError),
}
