/*!

Axioms mirror actions (lifted `AxiomSchema` → ground `GroundAxiom`) but additionally require a
stratification pass before grounding: an axiom set with a negative dependency cycle has no well-
defined fixed point and is rejected up front (spec §4.6, §9).

*/

pub mod axiom_schema;
pub mod ground_axiom;
pub mod stratification;

pub use axiom_schema::{AxiomSchema, AxiomSchemaIndex};
pub use ground_axiom::GroundAxiom;
pub use stratification::compute_axiom_strata;
