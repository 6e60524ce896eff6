/*!

A set of small natural numbers (ground-atom indices, assignment ranks, object indices) backed
by `bit_set::BitSet`. This is the concrete backing type behind every "Bitset" mentioned in the
design: `AssignmentSet`'s witness bits, `State::fluent_atoms`/`derived_atoms`, and
`GroundAction`'s precondition/effect sets.

The public contract required by the design is narrow — "a set of ground-atom indices with fast
union, difference, and subset tests" — so this wrapper exposes exactly that, plus the handful of
mutators the grounder and state repository need, rather than re-exporting the whole of
`bit_set::BitSet`.

*/

use std::fmt::{Debug, Formatter};

use bit_set::BitSet;

use crate::abstractions::Index;

#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct Bitset(BitSet);

impl Bitset {
  #[inline(always)]
  pub fn new() -> Self {
    Bitset(BitSet::new())
  }

  #[inline(always)]
  pub fn with_capacity(bits: usize) -> Self {
    Bitset(BitSet::with_capacity(bits))
  }

  #[inline(always)]
  pub fn set(&mut self, index: usize) {
    if index >= self.0.capacity() {
      self.0.reserve_len(index + 1);
    }
    self.0.insert(index);
  }

  #[inline(always)]
  pub fn unset(&mut self, index: usize) {
    self.0.remove(index);
  }

  #[inline(always)]
  pub fn contains(&self, index: usize) -> bool {
    self.0.contains(index)
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn clear(&mut self) {
    self.0.clear();
  }

  /// `self := self \ other` (set difference), used when applying an action's STRIPS delete
  /// effect before its add effect.
  #[inline(always)]
  pub fn subtract_assign(&mut self, other: &Bitset) {
    self.0.difference_with(&other.0);
  }

  /// `self := self ∪ other`.
  #[inline(always)]
  pub fn union_assign(&mut self, other: &Bitset) {
    self.0.union_with(&other.0);
  }

  /// `self ⊆ other`, i.e. every bit set in `self` is also set in `other`.
  #[inline(always)]
  pub fn is_subset_of(&self, other: &Bitset) -> bool {
    self.0.is_subset(&other.0)
  }

  /// `self ∩ other = ∅`.
  #[inline(always)]
  pub fn is_disjoint(&self, other: &Bitset) -> bool {
    self.0.is_disjoint(&other.0)
  }

  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter()
  }

  pub fn iter_indices(&self) -> impl Iterator<Item = Index> + '_ {
    self.0.iter().map(Index::from)
  }

  pub fn union(&self, other: &Bitset) -> Bitset {
    let mut result = self.clone();
    result.union_assign(other);
    result
  }

  pub fn difference(&self, other: &Bitset) -> Bitset {
    let mut result = self.clone();
    result.subtract_assign(other);
    result
  }

  pub fn from_indices(indices: impl IntoIterator<Item = Index>) -> Self {
    let mut bitset = Bitset::new();
    for index in indices {
      bitset.set(index.as_usize());
    }
    bitset
  }
}

impl Debug for Bitset {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.0.iter()).finish()
  }
}

impl FromIterator<usize> for Bitset {
  fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
    let mut bitset = Bitset::new();
    for index in iter {
      bitset.set(index);
    }
    bitset
  }
}
