/*!

`Repositories` bundles one `Interner` per interned node type a problem needs, and is the single
mutable owner of all of them (spec §5: "the interning repository is mutated by exactly one
owner"). It is a plain struct, not a singleton — each `Problem` gets its own.

Canonicalization ahead of interning is mandatory for every commutative constructor (spec §4.1):
sort multi-operand function-expression children by index, sort literal conjunctions by atom
index, and sort an action's conditional effects by polarity (negated first) then by atom index.
Doing this before `get_or_create` is what makes `(+ a b)` and `(+ b a)` collide to one node, and
what makes two syntactically-reordered-but-semantically-equal schemas collide as well.

*/

use crate::abstractions::Index;
use crate::core::action::effect::ConditionalEffect;
use crate::core::function::function_skeleton::FunctionSkeletonIndex;
use crate::core::function::{Function, FunctionExpression, GroundFunction, MultiOperator};
use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
use crate::core::term::{ObjectIndex, Term};
use crate::repository::interner::Interner;

/// Sorts a conjunction of literals by atom index in place, the canonicalization spec §4.1
/// requires of action/axiom condition lists before they are compared for schema equality.
pub fn sort_literals_by_atom<L>(literals: &mut [L], atom_of: impl Fn(&L) -> Index) {
  literals.sort_by_key(atom_of);
}

/// Sorts a multi-operand sum/product's operand list by index, so `(+ a b)` and `(+ b a)` hash
/// to the same `FunctionExpression` node.
pub fn sort_operands_by_index(operands: &mut [Index]) {
  operands.sort();
}

/// Sorts an action's conditional effects first by polarity (negated effects first), then by the
/// effect atom's index, so that two effect lists differing only in source order intern alike.
pub fn sort_conditional_effects(effects: &mut [ConditionalEffect]) {
  effects.sort_by_key(|effect| (!effect.effect.is_negated, effect.effect.atom));
}

pub struct Repositories {
  pub static_atoms: Interner<(static_kind::PredicateIndex, Vec<Term>), static_kind::Atom>,
  pub fluent_atoms: Interner<(fluent_kind::PredicateIndex, Vec<Term>), fluent_kind::Atom>,
  pub derived_atoms: Interner<(derived_kind::PredicateIndex, Vec<Term>), derived_kind::Atom>,

  pub static_ground_atoms: Interner<(static_kind::PredicateIndex, Vec<ObjectIndex>), static_kind::GroundAtom>,
  pub fluent_ground_atoms: Interner<(fluent_kind::PredicateIndex, Vec<ObjectIndex>), fluent_kind::GroundAtom>,
  pub derived_ground_atoms: Interner<(derived_kind::PredicateIndex, Vec<ObjectIndex>), derived_kind::GroundAtom>,

  pub functions: Interner<(FunctionSkeletonIndex, Vec<Term>), Function>,
  pub ground_functions: Interner<(FunctionSkeletonIndex, Vec<ObjectIndex>), GroundFunction>,
  pub function_expressions: Interner<FunctionExpression, FunctionExpression>,
}

impl Repositories {
  pub fn new() -> Self {
    Repositories {
      static_atoms: Interner::new(),
      fluent_atoms: Interner::new(),
      derived_atoms: Interner::new(),
      static_ground_atoms: Interner::new(),
      fluent_ground_atoms: Interner::new(),
      derived_ground_atoms: Interner::new(),
      functions: Interner::new(),
      ground_functions: Interner::new(),
      function_expressions: Interner::new(),
    }
  }

  pub fn get_or_create_static_atom(&mut self, predicate: static_kind::PredicateIndex, terms: Vec<Term>) -> static_kind::AtomIndex {
    let key = (predicate, terms.clone());
    self.static_atoms.get_or_create(key, |index| static_kind::Atom::new(index, predicate, terms))
  }

  pub fn get_or_create_fluent_atom(&mut self, predicate: fluent_kind::PredicateIndex, terms: Vec<Term>) -> fluent_kind::AtomIndex {
    let key = (predicate, terms.clone());
    self.fluent_atoms.get_or_create(key, |index| fluent_kind::Atom::new(index, predicate, terms))
  }

  pub fn get_or_create_derived_atom(&mut self, predicate: derived_kind::PredicateIndex, terms: Vec<Term>) -> derived_kind::AtomIndex {
    let key = (predicate, terms.clone());
    self.derived_atoms.get_or_create(key, |index| derived_kind::Atom::new(index, predicate, terms))
  }

  pub fn get_or_create_static_ground_atom(
    &mut self,
    predicate: static_kind::PredicateIndex,
    objects: Vec<ObjectIndex>,
  ) -> static_kind::AtomIndex {
    let key = (predicate, objects.clone());
    self.static_ground_atoms.get_or_create(key, |index| static_kind::GroundAtom::new(index, predicate, objects))
  }

  pub fn get_or_create_fluent_ground_atom(
    &mut self,
    predicate: fluent_kind::PredicateIndex,
    objects: Vec<ObjectIndex>,
  ) -> fluent_kind::AtomIndex {
    let key = (predicate, objects.clone());
    self.fluent_ground_atoms.get_or_create(key, |index| fluent_kind::GroundAtom::new(index, predicate, objects))
  }

  pub fn get_or_create_derived_ground_atom(
    &mut self,
    predicate: derived_kind::PredicateIndex,
    objects: Vec<ObjectIndex>,
  ) -> derived_kind::AtomIndex {
    let key = (predicate, objects.clone());
    self.derived_ground_atoms.get_or_create(key, |index| derived_kind::GroundAtom::new(index, predicate, objects))
  }

  pub fn get_or_create_function(&mut self, skeleton: FunctionSkeletonIndex, terms: Vec<Term>) -> Index {
    let key = (skeleton, terms.clone());
    self.functions.get_or_create(key, |index| Function::new(index, skeleton, terms))
  }

  pub fn get_or_create_ground_function(&mut self, skeleton: FunctionSkeletonIndex, objects: Vec<ObjectIndex>) -> Index {
    let key = (skeleton, objects.clone());
    self.ground_functions.get_or_create(key, |index| GroundFunction::new(index, skeleton, objects))
  }

  /// Interns a commutative multi-operand expression, canonicalizing operand order first so
  /// that two source-order-permuted expressions collide.
  pub fn get_or_create_multi_op(&mut self, operator: MultiOperator, mut operands: Vec<Index>) -> Index {
    sort_operands_by_index(&mut operands);
    self.function_expressions.get_or_create_value(FunctionExpression::MultiOp { operator, operands })
  }

  pub fn get_or_create_number(&mut self, value: f64) -> Index {
    self.function_expressions.get_or_create_value(FunctionExpression::number(value))
  }
}

impl Default for Repositories {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::action::effect::SimpleEffect;

  #[test]
  fn get_or_create_static_atom_is_idempotent() {
    let mut repositories = Repositories::new();
    let first = repositories.get_or_create_static_atom(Index::new(0), vec![Term::Object(Index::new(0))]);
    let second = repositories.get_or_create_static_atom(Index::new(0), vec![Term::Object(Index::new(0))]);
    assert_eq!(first, second);
    assert_eq!(repositories.static_atoms.len(), 1);
  }

  #[test]
  fn two_atoms_with_different_terms_get_distinct_indices_and_correct_stored_index() {
    let mut repositories = Repositories::new();
    let first = repositories.get_or_create_static_atom(Index::new(0), vec![Term::Object(Index::new(0))]);
    let second = repositories.get_or_create_static_atom(Index::new(0), vec![Term::Object(Index::new(1))]);
    assert_ne!(first, second);
    assert_eq!(repositories.static_atoms.get_by_index(second).unwrap().index, second);
  }

  #[test]
  fn multi_op_sum_canonicalizes_operand_order() {
    let mut repositories = Repositories::new();
    let a = repositories.get_or_create_number(1.0);
    let b = repositories.get_or_create_number(2.0);
    let forward = repositories.get_or_create_multi_op(MultiOperator::Sum, vec![a, b]);
    let backward = repositories.get_or_create_multi_op(MultiOperator::Sum, vec![b, a]);
    assert_eq!(forward, backward);
  }

  #[test]
  fn conditional_effects_sort_negated_first_then_by_atom() {
    let mut effects = vec![
      ConditionalEffect {
        static_conditions: Vec::new(),
        fluent_conditions: Vec::new(),
        derived_conditions: Vec::new(),
        effect: SimpleEffect::new(false, Index::new(5)),
      },
      ConditionalEffect {
        static_conditions: Vec::new(),
        fluent_conditions: Vec::new(),
        derived_conditions: Vec::new(),
        effect: SimpleEffect::new(true, Index::new(1)),
      },
    ];
    sort_conditional_effects(&mut effects);
    assert!(effects[0].effect.is_negated);
    assert!(!effects[1].effect.is_negated);
  }
}
