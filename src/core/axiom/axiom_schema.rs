/*!

An `AxiomSchema` is a Horn-like rule `head ← conditions`, where `head` is a literal over a
derived predicate and `conditions` is a conjunction of static/fluent/derived literals (spec §3).
Like an `ActionSchema`, it is lifted (has free parameter variables) until the grounder binds it.

*/

use crate::abstractions::{IString, Index};
use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
use crate::core::term::VariableIndex;

pub type AxiomSchemaIndex = Index;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AxiomSchema {
  pub index: AxiomSchemaIndex,
  pub name: IString,
  pub parameters: Vec<VariableIndex>,

  /// The derived atom this axiom concludes. PDDL axiom heads are never negated.
  pub head: derived_kind::Literal,

  pub static_conditions: Vec<static_kind::Literal>,
  pub fluent_conditions: Vec<fluent_kind::Literal>,
  pub derived_conditions: Vec<derived_kind::Literal>,
}

impl AxiomSchema {
  pub fn arity(&self) -> usize {
    self.parameters.len()
  }
}
