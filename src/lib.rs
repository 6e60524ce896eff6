/*!

Mimir is a classical-planning toolkit for PDDL problems. This crate is the planner's core loop:

  - an interned-term repository with structural deduplication (`repository`),
  - a lifted grounder / applicable-action generator built on a consistency-graph and k-partite
    maximum-clique enumeration (`grounding`),
  - a state repository and successor function, with derived atoms computed by forward-chaining
    axioms (`state`, `axiom_eval`).

PDDL surface-syntax parsing, search-algorithm policy, plan I/O, and benchmark harnesses are
out of scope; this crate only specifies the contracts a thin algorithm layer consumes from the
core (see `observer` for the statistics-event contract).

*/

#![allow(dead_code)]

pub mod abstractions;
pub mod core;
pub mod repository;
pub mod grounding;
pub mod axiom_eval;
pub mod state;
pub mod observer;

// Re-exported so that consumers can write `mimir::log::info!(...)` and `mimir::IString`,
// matching the re-export shape of the teacher this crate is modeled on.
pub use abstractions::{log, IString};
pub use abstractions::error::{ArithmeticError, BindingError, DomainError, LookupError, MimirError};
pub use abstractions::Index;
