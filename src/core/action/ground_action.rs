/*!

A `GroundAction` is a flat, cache-friendly record of one (schema, binding) grounding: precondition
bitsets over fluent/derived ground-atom indices, an unconditional STRIPS effect, and a list of
conditional effects that each carry their own precondition bitsets. Ground actions are hash-keyed
by `(schema_index, binding)` and, once constructed, are never mutated (spec §3 ownership model).

A precondition on *static* atoms is never stored as a bitset here — static consistency is an
invariant of the binding enforced at grounding time by the static consistency graph (spec §4.5),
so by the time a `GroundAction` exists its static precondition is known to hold.

*/

use crate::abstractions::Bitset;
use crate::core::action::action_schema::ActionSchemaIndex;
use crate::core::term::ObjectIndex;

/// The fluent/derived precondition bitsets shared by `GroundAction` (the whole action's
/// precondition) and by each `GroundConditionalEffect`/`GroundAxiom` (that construct's own,
/// separately-checked precondition).
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct StripsPrecondition {
  pub positive_fluent: Bitset,
  pub negative_fluent: Bitset,
  pub positive_derived: Bitset,
  pub negative_derived: Bitset,
}

impl StripsPrecondition {
  pub fn new() -> Self {
    Self::default()
  }

  /// Whether this precondition holds given the fluent and derived atom bitsets of a state.
  pub fn is_satisfied(&self, fluent_atoms: &Bitset, derived_atoms: &Bitset) -> bool {
    self.positive_fluent.is_subset_of(fluent_atoms)
      && self.positive_derived.is_subset_of(derived_atoms)
      && self.negative_fluent.is_disjoint(fluent_atoms)
      && self.negative_derived.is_disjoint(derived_atoms)
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StripsEffect {
  pub positive: Bitset,
  pub negative: Bitset,
}

impl StripsEffect {
  pub fn new() -> Self {
    StripsEffect { positive: Bitset::new(), negative: Bitset::new() }
  }
}

impl Default for StripsEffect {
  fn default() -> Self {
    Self::new()
  }
}

/// `{is_negated, atom_index}`, a single unconditional simple effect, used both for a ground
/// conditional effect's payload and for a ground axiom's derived-atom effect.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroundSimpleEffect {
  pub is_negated: bool,
  pub atom_index: usize,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroundConditionalEffect {
  pub precondition: StripsPrecondition,
  pub effect: GroundSimpleEffect,
}

impl GroundConditionalEffect {
  /// A conditional effect fires based on the *pre*-state, never on a partially-updated
  /// in-progress successor (spec §4.7 step 3).
  pub fn is_applicable(&self, fluent_atoms: &Bitset, derived_atoms: &Bitset) -> bool {
    self.precondition.is_satisfied(fluent_atoms, derived_atoms)
  }
}

pub type Binding = Vec<ObjectIndex>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroundAction {
  pub schema: ActionSchemaIndex,
  pub binding: Binding,
  pub strips_precondition: StripsPrecondition,
  pub strips_effect: StripsEffect,
  pub conditional_effects: Vec<GroundConditionalEffect>,
}

impl GroundAction {
  pub fn is_applicable(&self, fluent_atoms: &Bitset, derived_atoms: &Bitset) -> bool {
    self.strips_precondition.is_satisfied(fluent_atoms, derived_atoms)
  }
}
