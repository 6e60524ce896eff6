/*!

A `State` is a point in the search space: the fluent atoms true in it, plus the derived atoms a
fixpoint of the axioms computes from that fluent set (spec §4.6, §4.7). Two states with the same
fluent atoms are the same state — identity and deduplication are defined purely over
`fluent_atoms`; `derived_atoms` is a deterministic function of it, never itself compared or
hashed (spec §4.6, §9).

*/

use crate::abstractions::{Bitset, Index};

pub type StateIndex = Index;

#[derive(Clone, Debug)]
pub struct State {
  pub index: StateIndex,
  pub fluent_atoms: Bitset,
  pub derived_atoms: Bitset,
}

impl State {
  pub fn new(index: StateIndex, fluent_atoms: Bitset, derived_atoms: Bitset) -> Self {
    State { index, fluent_atoms, derived_atoms }
  }

  #[inline(always)]
  pub fn holds_fluent(&self, atom_index: usize) -> bool {
    self.fluent_atoms.contains(atom_index)
  }

  #[inline(always)]
  pub fn holds_derived(&self, atom_index: usize) -> bool {
    self.derived_atoms.contains(atom_index)
  }
}
