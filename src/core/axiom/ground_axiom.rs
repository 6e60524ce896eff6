/*!

`GroundAxiom` mirrors `GroundAction` (spec §3): a flat precondition over fluent/derived ground
atoms, but with a single derived-atom effect in place of an action's STRIPS/conditional effects,
since an axiom only ever concludes one derived atom.

*/

use crate::abstractions::Bitset;
use crate::core::action::{GroundSimpleEffect, StripsPrecondition};
use crate::core::axiom::axiom_schema::AxiomSchemaIndex;
use crate::core::term::ObjectIndex;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroundAxiom {
  pub schema: AxiomSchemaIndex,
  pub binding: Vec<ObjectIndex>,
  pub precondition: StripsPrecondition,
  pub effect: GroundSimpleEffect,
}

impl GroundAxiom {
  pub fn is_applicable(&self, fluent_atoms: &Bitset, derived_atoms: &Bitset) -> bool {
    self.precondition.is_satisfied(fluent_atoms, derived_atoms)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abstractions::Index;

  #[test]
  fn applicability_delegates_to_precondition() {
    let mut precondition = StripsPrecondition::new();
    precondition.positive_fluent.set(0);
    let axiom = GroundAxiom {
      schema: Index::new(0),
      binding: vec![Index::new(0)],
      precondition,
      effect: GroundSimpleEffect { is_negated: false, atom_index: 0 },
    };

    let mut fluent_atoms = Bitset::new();
    assert!(!axiom.is_applicable(&fluent_atoms, &Bitset::new()));
    fluent_atoms.set(0);
    assert!(axiom.is_applicable(&fluent_atoms, &Bitset::new()));
  }
}
