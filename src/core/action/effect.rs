/*!

An action's effect has three parts: unconditional STRIPS literals (`SimpleEffect`),
`when <condition> then <effect>` conditional effects, and `forall <params> when <condition>
then <effect>` universal effects.

Per the resolved Open Question in SPEC_FULL.md §9, universal effects are their own list
(`ActionSchema::universal_effects`), not folded into `conditional_effects` with synthetic
extra parameters at the type level — only the lifted grounder unrolls them, at grounding time,
into one `GroundConditionalEffect` per static-consistent combination of the universal
parameters (spec §4.5 last bullet).

*/

use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
use crate::core::term::VariableIndex;

/// An unconditional STRIPS effect literal over a fluent atom.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SimpleEffect {
  pub is_negated: bool,
  pub atom: fluent_kind::AtomIndex,
}

impl SimpleEffect {
  pub fn new(is_negated: bool, atom: fluent_kind::AtomIndex) -> Self {
    SimpleEffect { is_negated, atom }
  }
}

/// `when (conditions) then effect`, scoped to the owning schema's own parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConditionalEffect {
  pub static_conditions: Vec<static_kind::Literal>,
  pub fluent_conditions: Vec<fluent_kind::Literal>,
  pub derived_conditions: Vec<derived_kind::Literal>,
  pub effect: SimpleEffect,
}

/// `forall (parameters) when (conditions) then effect`. `parameters` are variables local to
/// this effect, disjoint from the owning schema's own parameter list; the grounder
/// instantiates them per static-consistent combination of objects.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UniversalEffect {
  pub parameters: Vec<VariableIndex>,
  pub static_conditions: Vec<static_kind::Literal>,
  pub fluent_conditions: Vec<fluent_kind::Literal>,
  pub derived_conditions: Vec<derived_kind::Literal>,
  pub effect: SimpleEffect,
}
