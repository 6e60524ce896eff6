/*!

The lifted grounder (spec §4): turns a schema with free variables into the ground actions/axioms
applicable in a given state, without ever materializing the full ground action space up front.

  - `assignment_set` — per-predicate witness bitsets for pairwise consistency checks (§4.3).
  - `consistency_graph` — the k-partite static consistency graph built from those witnesses (§4.4).
  - `clique` — enumerates one-vertex-per-partition cliques of that graph: candidate bindings (§4.4).
  - `lifted_grounder` — combines the two into `ApplicableActionGenerator`, verifying each candidate
    exactly against the current state before emitting a `GroundAction` (§4.5).

*/

pub mod assignment_set;
pub mod clique;
pub mod consistency_graph;
pub mod lifted_grounder;

pub use assignment_set::{AssignmentSet, Edge, LiteralView, Vertex};
pub use clique::enumerate_cliques;
pub use consistency_graph::{StaticConsistencyGraph, UnaryMembership};
pub use lifted_grounder::{ground_axiom, ApplicableActionGenerator, FormalismTables};
