/*!

Enumerates every maximal k-clique of a `StaticConsistencyGraph` that uses exactly one vertex
from each partition — the set of object bindings consistent with every static condition of a
schema (spec §4.4, §4.5). This is the Bron–Kerbosch pattern specialized to a k-partite graph: one
vertex is drawn per partition in turn, and a branch is abandoned the moment it becomes impossible
to still fill every remaining partition (a clique here is only valid once it uses every partition
exactly once — a partial selection that skips a partition is never completed into one).

Partitions and, within a partition, vertices are visited in ascending index order, so results are
emitted in the fixed, reproducible order spec §5's determinism requirement calls for.

*/

use crate::grounding::assignment_set::Vertex;
use crate::grounding::consistency_graph::StaticConsistencyGraph;

/// Enumerates every full binding (one object per parameter) consistent with the graph's edges,
/// in ascending lexicographic order by `(parameter_index, object_index)`.
pub fn enumerate_cliques(graph: &StaticConsistencyGraph) -> Vec<Vec<Vertex>> {
  let mut results = Vec::new();
  let mut current = Vec::with_capacity(graph.num_partitions());
  search(graph, 0, &mut current, &mut results);
  results
}

fn search(graph: &StaticConsistencyGraph, partition: usize, current: &mut Vec<Vertex>, results: &mut Vec<Vec<Vertex>>) {
  if partition == graph.num_partitions() {
    results.push(current.clone());
    return;
  }

  // An empty partition has no object consistent with the schema's unary static conditions for
  // that parameter, so no full clique can ever be completed from here.
  if graph.partitions[partition].is_empty() {
    return;
  }

  for &candidate in &graph.partitions[partition] {
    if current.iter().all(|&chosen| graph.has_edge(chosen, candidate)) {
      current.push(candidate);
      search(graph, partition + 1, current, results);
      current.pop();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abstractions::Index;
  use crate::core::predicate::static_kind;
  use crate::core::term::Term;
  use crate::core::term::Variable;
  use crate::grounding::assignment_set::{AssignmentSet, LiteralView};
  use crate::grounding::consistency_graph::UnaryMembership;

  #[test]
  fn two_parameter_schema_enumerates_edge_consistent_pairs_only() {
    // Parameters 0 and 1 each range over objects {0,1}; only the pair (0,1)/(1,0) is "edge
    // consistent" here (simulated directly via a hand-built graph with no unary filtering).
    let membership = UnaryMembership::build(&[]);
    let unary: Vec<LiteralView> = Vec::new();

    let mut binary_set = AssignmentSet::new(2, 2);
    binary_set.insert_ground_atom(&[Index::new(0), Index::new(1)]);

    let variables = vec![Variable { index: Index::new(0), name: crate::abstractions::IString::from("?x"), parameter_index: 0 },
                          Variable { index: Index::new(1), name: crate::abstractions::IString::from("?y"), parameter_index: 1 }];
    let terms = vec![Term::Variable(Index::new(0)), Term::Variable(Index::new(1))];
    let binary_literal =
      LiteralView { terms: &terms, variables: &variables, predicate_index: 0, predicate_arity: 2, is_negated: false };

    let graph = StaticConsistencyGraph::build(2, 2, &unary, std::slice::from_ref(&binary_literal), &membership, std::slice::from_ref(&binary_set));

    let cliques = enumerate_cliques(&graph);
    assert_eq!(cliques.len(), 1);
    assert_eq!(
      cliques[0],
      vec![
        Vertex { parameter_index: 0, object_index: Index::new(0) },
        Vertex { parameter_index: 1, object_index: Index::new(1) },
      ]
    );
  }

  #[test]
  fn empty_partition_yields_no_cliques() {
    let graph = StaticConsistencyGraph { partitions: vec![Vec::new()], edges: Default::default() };
    assert!(enumerate_cliques(&graph).is_empty());
  }
}
