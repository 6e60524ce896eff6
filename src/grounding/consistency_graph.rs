/*!

The static consistency graph for one schema: a k-partite graph whose partitions are the schema's
parameters and whose vertices are `(parameter, object)` pairs consistent with every unary static
condition mentioning that parameter (spec §4.4). An edge joins two vertices from different
partitions when the pair is consistent with every binary static condition mentioning both
parameters. A maximal k-clique using one vertex per partition is exactly a binding that satisfies
every static condition — the lifted grounder enumerates these with `grounding::clique`.

**(SUPPLEMENT)** `original_source/.../consistency_graph.cpp` prunes each parameter's vertex set
with a cheap unary-static-literal membership table built directly from the ground static atoms,
before falling back to the general assignment-set-backed check for edges (SPEC_FULL.md §4.4).
`UnaryMembership` below is that fast path.

*/

use crate::abstractions::Set;
use crate::core::term::{ObjectIndex, Term, Variable};
use crate::core::predicate::static_kind;
use crate::grounding::assignment_set::{literal_all_consistent_edge, literal_all_consistent_vertex, AssignmentSet, Edge, LiteralView, Vertex};

/// `(predicate_index, object_index)` membership table for ground static atoms of arity 1, built
/// once per problem and consulted while constructing each schema's vertex set.
pub struct UnaryMembership(Set<(usize, ObjectIndex)>);

impl UnaryMembership {
  pub fn build(static_ground_atoms: &[static_kind::GroundAtom]) -> Self {
    let mut table = Set::new();
    for atom in static_ground_atoms {
      if atom.objects.len() == 1 {
        table.insert((atom.predicate.as_usize(), atom.objects[0]));
      }
    }
    UnaryMembership(table)
  }

  fn satisfies(&self, literal: &LiteralView, object: ObjectIndex) -> bool {
    let witnessed = self.0.contains(&(literal.predicate_index, object));
    if literal.is_negated { !witnessed } else { witnessed }
  }
}

#[derive(Clone, Debug)]
pub struct StaticConsistencyGraph {
  /// One partition per schema parameter; `partitions[p]` is the ordered list of vertices
  /// surviving the unary-static-condition filter for parameter `p`.
  pub partitions: Vec<Vec<Vertex>>,
  /// Adjacency, indexed the same way as a flattened `partitions` would be addressed by
  /// `(partition, position)`; see `has_edge`.
  pub(crate) edges: Set<(Vertex, Vertex)>,
}

impl StaticConsistencyGraph {
  /// Builds the graph for one schema: `num_parameters` partitions over `num_objects` objects,
  /// filtered first by the cheap unary membership table, then by `edge_consistent` against the
  /// general assignment set for every pair of parameters.
  pub fn build(
    num_parameters: u32,
    num_objects: usize,
    unary_static_literals: &[LiteralView],
    binary_static_literals: &[LiteralView],
    unary_membership: &UnaryMembership,
    static_assignment_sets: &[AssignmentSet],
  ) -> Self {
    let mut partitions: Vec<Vec<Vertex>> = Vec::with_capacity(num_parameters as usize);
    for parameter_index in 0..num_parameters {
      let relevant: Vec<&LiteralView> =
        unary_static_literals.iter().filter(|literal| mentions(literal, parameter_index)).collect();

      let mut vertices = Vec::new();
      for object in 0..num_objects {
        let object_index = ObjectIndex::from(object);
        if relevant.iter().all(|literal| unary_membership.satisfies(literal, object_index)) {
          vertices.push(Vertex { parameter_index, object_index });
        }
      }
      partitions.push(vertices);
    }

    let mut edges = Set::new();
    for source_partition in 0..partitions.len() {
      for target_partition in (source_partition + 1)..partitions.len() {
        for &source in &partitions[source_partition] {
          for &target in &partitions[target_partition] {
            let edge = Edge { source, target };
            if literal_all_consistent_edge(binary_static_literals, static_assignment_sets, edge)
              && literal_all_consistent_vertex(unary_static_literals, static_assignment_sets, source)
              && literal_all_consistent_vertex(unary_static_literals, static_assignment_sets, target)
            {
              edges.insert((source, target));
              edges.insert((target, source));
            }
          }
        }
      }
    }

    StaticConsistencyGraph { partitions, edges }
  }

  pub fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
    self.edges.contains(&(a, b))
  }

  pub fn num_partitions(&self) -> usize {
    self.partitions.len()
  }
}

fn mentions(literal: &LiteralView, parameter_index: u32) -> bool {
  literal.terms.iter().any(|term| match term {
    Term::Variable(index) => literal.variables[index.as_usize()].parameter_index == parameter_index,
    Term::Object(_) => false,
  })
}
