/*!

`AssignmentSet` packs, for one predicate, a bit per possible partial variable-to-object
assignment of arity ≤ 2 that is witnessed by some ground atom of that predicate in the current
population (spec §4.3). The rank-packing formula below is the normative definition taken from
`original_source/src/search/applicable_action_generators/dense_lifted/assignment_set.cpp`
(spec.md §3 only describes the shape, not the formula; see SPEC_FULL.md §4.3).

This supports pairwise consistency checks only: an atom of arity > 2 contributes no witness, so
a literal over such a predicate is never ruled out here (spec §4.3 "sufficient for filtering but
not for proving a full assignment consistent" — full consistency for arity > 2 static conditions
is checked directly during the one place it can occur, §4.5).

*/

use crate::abstractions::{Bitset, Index};
use crate::core::term::{ObjectIndex, Term, Variable};

/// `(parameter_index, object_index)`: a single vertex of the static consistency graph, and the
/// unit of a "vertex-consistent" check.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Vertex {
  pub parameter_index: u32,
  pub object_index: ObjectIndex,
}

/// An unordered pair of vertices from different parameters, the unit of an "edge-consistent"
/// check.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Edge {
  pub source: Vertex,
  pub target: Vertex,
}

fn rank(first_position: i64, first_object: i64, second_position: i64, second_object: i64, arity: i64, num_objects: i64) -> usize {
  let first = 1;
  let second = first * (arity + 1);
  let third = second * (arity + 1);
  let fourth = third * (num_objects + 1);
  let value = first * (first_position + 1) + second * (second_position + 1) + third * (first_object + 1) + fourth * (second_object + 1);
  value as usize
}

fn num_assignments(arity: i64, num_objects: i64) -> usize {
  let first = 1;
  let second = first * (arity + 1);
  let third = second * (arity + 1);
  let fourth = third * (num_objects + 1);
  (first * arity + second * arity + third * num_objects + fourth * num_objects + 1) as usize
}

/// A flat witness bitset for one predicate of a given arity.
#[derive(Clone, Debug)]
pub struct AssignmentSet {
  arity: u32,
  num_objects: usize,
  witnesses: Bitset,
}

impl AssignmentSet {
  pub fn new(arity: u32, num_objects: usize) -> Self {
    let capacity = num_assignments(arity as i64, num_objects as i64);
    AssignmentSet { arity, num_objects, witnesses: Bitset::with_capacity(capacity) }
  }

  fn rank_of(&self, first_position: Option<(usize, ObjectIndex)>, second_position: Option<(usize, ObjectIndex)>) -> usize {
    let (p1, o1) = first_position.map(|(p, o)| (p as i64, o.as_usize() as i64)).unwrap_or((-1, -1));
    let (p2, o2) = second_position.map(|(p, o)| (p as i64, o.as_usize() as i64)).unwrap_or((-1, -1));
    rank(p1, o1, p2, o2, self.arity as i64, self.num_objects as i64)
  }

  /// Records every witness contributed by one ground atom's argument list: every unary
  /// `(position, object)` and every pairwise `(position_i, object_i, position_j, object_j)`
  /// with `i < j` (spec §4.3).
  pub fn insert_ground_atom(&mut self, objects: &[ObjectIndex]) {
    for first_position in 0..objects.len() {
      let first = (first_position, objects[first_position]);
      self.witnesses.set(self.rank_of(Some(first), None));

      for second_position in (first_position + 1)..objects.len() {
        let second = (second_position, objects[second_position]);
        self.witnesses.set(self.rank_of(Some(second), None));
        self.witnesses.set(self.rank_of(Some(first), Some(second)));
      }
    }
  }

  fn is_witnessed(&self, first_position: Option<(usize, ObjectIndex)>, second_position: Option<(usize, ObjectIndex)>) -> bool {
    self.witnesses.contains(self.rank_of(first_position, second_position))
  }
}

/// A partially-bound literal's argument list, reduced to what a vertex/edge consistency check
/// needs: its terms, its predicate's arity, its predicate's position in the assignment-set
/// table, and its polarity. Each kind module's own `Literal`/`Atom` pair is adapted to this view
/// by the lifted grounder rather than duplicating the check three times.
pub struct LiteralView<'a> {
  pub terms: &'a [Term],
  pub variables: &'a [Variable],
  pub predicate_index: usize,
  pub predicate_arity: u32,
  pub is_negated: bool,
}

fn parameter_index_of(variables: &[Variable], term: &Term) -> Option<u32> {
  match term {
    Term::Variable(index) => Some(variables[index.as_usize()].parameter_index),
    Term::Object(_) => None,
  }
}

fn bound_position(terms: &[Term], variables: &[Variable], parameter_index: u32) -> Option<usize> {
  terms.iter().position(|term| parameter_index_of(variables, term) == Some(parameter_index))
}

/// `vertexConsistent` (spec §4.3): checks every literal whose predicate mentions the vertex's
/// parameter against the witness for that single binding.
pub fn literal_all_consistent_vertex(literals: &[LiteralView], assignment_sets: &[AssignmentSet], vertex: Vertex) -> bool {
  for literal in literals {
    let position = match bound_position(literal.terms, literal.variables, vertex.parameter_index) {
      Some(position) => position,
      None => continue,
    };

    let witnessed = assignment_sets[literal.predicate_index].is_witnessed(Some((position, vertex.object_index)), None);
    if !literal.is_negated && !witnessed {
      return false;
    }
    if literal.is_negated && witnessed && literal.predicate_arity == 1 {
      return false;
    }
  }
  true
}

/// `edgeConsistent` (spec §4.3): like the vertex check, but a literal may additionally be bound
/// by a constant object term (always contributes) or by either endpoint's variable.
pub fn literal_all_consistent_edge(literals: &[LiteralView], assignment_sets: &[AssignmentSet], edge: Edge) -> bool {
  for literal in literals {
    let mut positions: Vec<(usize, ObjectIndex)> = Vec::with_capacity(2);

    for (index, term) in literal.terms.iter().enumerate() {
      match term {
        Term::Object(object) if literal.predicate_arity <= 2 => {
          positions.push((index, *object));
        }
        Term::Variable(variable) => {
          let parameter_index = literal.variables[variable.as_usize()].parameter_index;
          if parameter_index == edge.source.parameter_index {
            positions.push((index, edge.source.object_index));
          } else if parameter_index == edge.target.parameter_index {
            positions.push((index, edge.target.object_index));
          }
        }
        _ => {}
      }
      if positions.len() >= 2 {
        break;
      }
    }

    if positions.is_empty() {
      continue;
    }

    let first = positions[0];
    let second = positions.get(1).copied();
    let witnessed = assignment_sets[literal.predicate_index].is_witnessed(Some(first), second);

    if !literal.is_negated && !witnessed {
      return false;
    }
    if literal.is_negated && witnessed && (literal.predicate_arity == 1 || (literal.predicate_arity == 2 && second.is_some())) {
      return false;
    }
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unary_witness_round_trips() {
    let mut set = AssignmentSet::new(1, 3);
    set.insert_ground_atom(&[Index::new(2)]);
    assert!(set.is_witnessed(Some((0, Index::new(2))), None));
    assert!(!set.is_witnessed(Some((0, Index::new(1))), None));
  }

  #[test]
  fn binary_witness_records_unary_and_pairwise() {
    let mut set = AssignmentSet::new(2, 4);
    set.insert_ground_atom(&[Index::new(0), Index::new(1)]);
    assert!(set.is_witnessed(Some((0, Index::new(0))), None));
    assert!(set.is_witnessed(Some((1, Index::new(1))), None));
    assert!(set.is_witnessed(Some((0, Index::new(0))), Some((1, Index::new(1)))));
    assert!(!set.is_witnessed(Some((0, Index::new(1))), Some((1, Index::new(0)))));
  }

  fn single_variable(name: &str, parameter_index: u32) -> Variable {
    Variable { index: Index::new(0), name: crate::abstractions::IString::from(name), parameter_index }
  }

  #[test]
  fn negative_unary_literal_is_ruled_out_when_witnessed() {
    let mut sets = vec![AssignmentSet::new(1, 3)];
    sets[0].insert_ground_atom(&[Index::new(2)]);

    let variables = vec![single_variable("?x", 0)];
    let terms = vec![Term::Variable(Index::new(0))];
    let literal = LiteralView { terms: &terms, variables: &variables, predicate_index: 0, predicate_arity: 1, is_negated: true };
    let vertex = Vertex { parameter_index: 0, object_index: Index::new(2) };

    assert!(!literal_all_consistent_vertex(std::slice::from_ref(&literal), &sets, vertex));
  }

  #[test]
  fn positive_literal_with_no_witness_fails_vertex_check() {
    let sets = vec![AssignmentSet::new(1, 3)];
    let variables = vec![single_variable("?x", 0)];
    let terms = vec![Term::Variable(Index::new(0))];
    let literal = LiteralView { terms: &terms, variables: &variables, predicate_index: 0, predicate_arity: 1, is_negated: false };
    let vertex = Vertex { parameter_index: 0, object_index: Index::new(2) };

    assert!(!literal_all_consistent_vertex(std::slice::from_ref(&literal), &sets, vertex));
  }
}
