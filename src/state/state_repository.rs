/*!

`StateRepository` is the single owner of every `State` reached during search (spec §4.6, §5): it
builds the initial state from a problem's positive fluent initial literals, computes a ground
action's successor, and — critically — deduplicates states purely by their fluent bitset, so the
same fluent set reached by two different action sequences is always the same `StateIndex`.

Applying a ground action's effect follows spec §4.7 precisely:

  1. Apply the unconditional STRIPS effect: delete, then add (so an atom both deleted and added
     by the same effect ends up present, matching `Bitset`'s own delete-before-add contract).
  2. Decide which conditional effects fire by checking each one's own precondition against the
     *pre*-state bitsets — never against the state as it is being mutated.
  3. Apply every triggered conditional effect, again delete before add.
  4. Recompute derived atoms from the new fluent set by forward-chaining axioms to a fixed point.

*/

use crate::abstractions::{Bitset, HashMap};
use crate::axiom_eval::AxiomEvaluator;
use crate::core::action::{GroundAction, GroundSimpleEffect};
use crate::core::axiom::AxiomSchema;
use crate::core::problem::Problem;
use crate::grounding::lifted_grounder::FormalismTables;
use crate::repository::Repositories;
use crate::state::state::{State, StateIndex};

pub struct StateRepository {
  states: Vec<State>,
  index_by_fluent_atoms: HashMap<Bitset, StateIndex>,
  reached_fluent_atoms: Bitset,
  reached_derived_atoms: Bitset,
}

impl StateRepository {
  pub fn new() -> Self {
    StateRepository {
      states: Vec::new(),
      index_by_fluent_atoms: HashMap::new(),
      reached_fluent_atoms: Bitset::new(),
      reached_derived_atoms: Bitset::new(),
    }
  }

  pub fn get(&self, index: StateIndex) -> &State {
    &self.states[index.as_usize()]
  }

  /// The union of fluent atoms set in any state this repository has ever produced.
  pub fn reached_fluent_atoms(&self) -> &Bitset {
    &self.reached_fluent_atoms
  }

  /// The union of derived atoms set in any state this repository has ever produced.
  pub fn reached_derived_atoms(&self) -> &Bitset {
    &self.reached_derived_atoms
  }

  fn get_or_create(&mut self, fluent_atoms: Bitset, derived_atoms: Bitset) -> StateIndex {
    if let Some(&existing) = self.index_by_fluent_atoms.get(&fluent_atoms) {
      return existing;
    }

    let index = StateIndex::from(self.states.len());
    self.reached_fluent_atoms.union_assign(&fluent_atoms);
    self.reached_derived_atoms.union_assign(&derived_atoms);
    self.index_by_fluent_atoms.insert(fluent_atoms.clone(), index);
    self.states.push(State::new(index, fluent_atoms, derived_atoms));
    index
  }

  /// Builds the initial state from a problem's positive fluent initial literals (negative ones
  /// are rejected at problem-construction time, so every literal here is a simple `set`), then
  /// computes its derived atoms.
  #[allow(clippy::too_many_arguments)]
  pub fn initial_state(
    &mut self,
    problem: &Problem,
    evaluator: &AxiomEvaluator,
    axioms: &[AxiomSchema],
    strata: &[u32],
    tables: &FormalismTables,
    repositories: &mut Repositories,
    static_membership: &Bitset,
  ) -> StateIndex {
    let mut fluent_atoms = Bitset::new();
    for literal in &problem.fluent_initial_literals {
      fluent_atoms.set(literal.atom.as_usize());
    }

    let mut derived_atoms = Bitset::new();
    evaluator.evaluate_to_fixpoint(axioms, strata, tables, repositories, static_membership, &fluent_atoms, &mut derived_atoms);

    self.get_or_create(fluent_atoms, derived_atoms)
  }

  #[allow(clippy::too_many_arguments)]
  pub fn successor(
    &mut self,
    state_index: StateIndex,
    action: &GroundAction,
    evaluator: &AxiomEvaluator,
    axioms: &[AxiomSchema],
    strata: &[u32],
    tables: &FormalismTables,
    repositories: &mut Repositories,
    static_membership: &Bitset,
  ) -> StateIndex {
    let pre_state = self.get(state_index);
    let pre_fluent = pre_state.fluent_atoms.clone();
    let pre_derived = pre_state.derived_atoms.clone();

    let triggered: Vec<GroundSimpleEffect> = action
      .conditional_effects
      .iter()
      .filter(|conditional| conditional.is_applicable(&pre_fluent, &pre_derived))
      .map(|conditional| conditional.effect)
      .collect();

    let mut next_fluent = pre_fluent;
    next_fluent.subtract_assign(&action.strips_effect.negative);
    next_fluent.union_assign(&action.strips_effect.positive);

    for effect in &triggered {
      if effect.is_negated {
        next_fluent.unset(effect.atom_index);
      }
    }
    for effect in &triggered {
      if !effect.is_negated {
        next_fluent.set(effect.atom_index);
      }
    }

    let mut next_derived = Bitset::new();
    evaluator.evaluate_to_fixpoint(axioms, strata, tables, repositories, static_membership, &next_fluent, &mut next_derived);

    self.get_or_create(next_fluent, next_derived)
  }
}

impl Default for StateRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abstractions::{IString, Index};
  use crate::core::action::{GroundConditionalEffect, StripsEffect, StripsPrecondition};
  use crate::core::predicate::fluent_kind;
  use crate::core::problem::{get_or_create_problem, Domain};
  use crate::grounding::consistency_graph::UnaryMembership;

  fn empty_domain() -> Domain {
    Domain {
      name: IString::from("domain"),
      static_predicates: Vec::new(),
      fluent_predicates: Vec::new(),
      derived_predicates: Vec::new(),
      function_skeletons: Vec::new(),
      action_schemas: Vec::new(),
      axiom_schemas: Vec::new(),
    }
  }

  fn empty_tables() -> FormalismTables<'static> {
    FormalismTables { variables: &[], static_atoms: &[], fluent_atoms: &[], derived_atoms: &[] }
  }

  #[test]
  fn successor_deletes_before_adding_and_fires_conditional_effects_from_pre_state() {
    let problem = get_or_create_problem(
      Index::new(0),
      IString::from("problem"),
      empty_domain(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      vec![fluent_kind::GroundLiteral::new(true, Index::new(0))],
      Vec::new(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      None,
    )
    .unwrap();

    let tables = empty_tables();
    let unary_membership = UnaryMembership::build(&[]);
    let evaluator = AxiomEvaluator::new(&[], &tables, 0, &unary_membership, &[]);
    let mut repositories = Repositories::new();
    let static_membership = Bitset::new();
    let strata: Vec<u32> = Vec::new();

    let mut state_repository = StateRepository::new();
    let initial =
      state_repository.initial_state(&problem, &evaluator, &[], &strata, &tables, &mut repositories, &static_membership);
    assert!(state_repository.get(initial).holds_fluent(0));

    let mut conditional_precondition = StripsPrecondition::new();
    conditional_precondition.positive_fluent.set(0);

    let mut strips_effect = StripsEffect::new();
    strips_effect.negative.set(0);
    strips_effect.positive.set(1);

    let action = GroundAction {
      schema: Index::new(0),
      binding: Vec::new(),
      strips_precondition: StripsPrecondition::new(),
      strips_effect,
      conditional_effects: vec![GroundConditionalEffect {
        precondition: conditional_precondition,
        effect: crate::core::action::GroundSimpleEffect { is_negated: false, atom_index: 2 },
      }],
    };

    let successor = state_repository.successor(initial, &action, &evaluator, &[], &strata, &tables, &mut repositories, &static_membership);
    let successor_state = state_repository.get(successor);

    assert!(!successor_state.holds_fluent(0));
    assert!(successor_state.holds_fluent(1));
    assert!(successor_state.holds_fluent(2));

    let repeated = state_repository.successor(initial, &action, &evaluator, &[], &strata, &tables, &mut repositories, &static_membership);
    assert_eq!(successor, repeated);
  }
}
