/*!

Forward-chains axioms to a fixed point for one state (spec §4.6). `compute_axiom_strata` assigns
every axiom a stratum; `AxiomEvaluator` then evaluates strata in ascending order, iterating each
stratum's axioms to a fixed point (no new derived atom produced in a full pass) before advancing,
since a negative dependency on a predicate requires its whole extension to already be complete.

Grounding an axiom body reuses the lifted grounder's own machinery (`grounding::lifted_grounder`):
a precomputed static consistency graph per axiom schema, clique enumeration as the candidate
fast-path, and the same exact re-verification of static conditions the assignment set's witness
bitsets cannot themselves guarantee for arity > 2 predicates.

*/

use crate::abstractions::Bitset;
use crate::core::axiom::AxiomSchema;
use crate::core::term::ObjectIndex;
use crate::grounding::assignment_set::{AssignmentSet, LiteralView};
use crate::grounding::clique::enumerate_cliques;
use crate::grounding::consistency_graph::{StaticConsistencyGraph, UnaryMembership};
use crate::grounding::lifted_grounder::{all_static_conditions_hold, ground_axiom, literal_view, FormalismTables};
use crate::repository::Repositories;

struct GroundedAxiomSchema {
  static_graph: StaticConsistencyGraph,
}

/// Precomputes the static consistency graph for every axiom schema, then forward-chains them to
/// a fixed point, stratum by stratum.
pub struct AxiomEvaluator {
  grounded: Vec<GroundedAxiomSchema>,
}

impl AxiomEvaluator {
  pub fn new(
    axioms: &[AxiomSchema],
    tables: &FormalismTables,
    num_objects: usize,
    unary_membership: &UnaryMembership,
    static_assignment_sets: &[AssignmentSet],
  ) -> Self {
    let grounded = axioms
      .iter()
      .map(|axiom| {
        let (unary, binary): (Vec<_>, Vec<_>) = axiom
          .static_conditions
          .iter()
          .filter_map(|literal| literal_view(literal, tables))
          .partition(|literal: &LiteralView| literal.predicate_arity <= 1);

        let graph = StaticConsistencyGraph::build(
          axiom.parameters.len() as u32,
          num_objects,
          &unary,
          &binary,
          unary_membership,
          static_assignment_sets,
        );
        GroundedAxiomSchema { static_graph: graph }
      })
      .collect();

    AxiomEvaluator { grounded }
  }

  /// Evaluates every stratum in ascending order, setting bits in `derived_atoms` until a full
  /// pass over a stratum's axioms adds nothing new, then moving to the next stratum.
  #[allow(clippy::too_many_arguments)]
  pub fn evaluate_to_fixpoint(
    &self,
    axioms: &[AxiomSchema],
    strata: &[u32],
    tables: &FormalismTables,
    repositories: &mut Repositories,
    static_membership: &Bitset,
    fluent_atoms: &Bitset,
    derived_atoms: &mut Bitset,
  ) {
    let num_strata = strata.iter().copied().max().map(|max| max + 1).unwrap_or(0);

    for stratum in 0..num_strata {
      loop {
        let mut changed = false;

        for (axiom_index, axiom) in axioms.iter().enumerate() {
          if strata[axiom_index] != stratum {
            continue;
          }
          let grounded = &self.grounded[axiom_index];

          for clique in enumerate_cliques(&grounded.static_graph) {
            let mut binding: Vec<ObjectIndex> = vec![ObjectIndex::new(0); axiom.parameters.len()];
            for vertex in &clique {
              binding[vertex.parameter_index as usize] = vertex.object_index;
            }

            if !all_static_conditions_hold(&axiom.static_conditions, tables, &binding, repositories, static_membership) {
              continue;
            }

            let ground = ground_axiom(axiom, &binding, tables, repositories);
            if !ground.is_applicable(fluent_atoms, derived_atoms) {
              continue;
            }
            if !derived_atoms.contains(ground.effect.atom_index) {
              derived_atoms.set(ground.effect.atom_index);
              changed = true;
            }
          }
        }

        if !changed {
          break;
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abstractions::{IString, Index};
  use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
  use crate::core::term::{Term, Variable};

  fn variable(index: u32, name: &str, parameter_index: u32) -> Variable {
    Variable { index: Index::new(index), name: IString::from(name), parameter_index }
  }

  /// reachable(?x) <- at(?x); reachable(?y) <- reachable(?x) & edge(?x,?y). Three objects
  /// a=0,b=1,c=2; edge(a,b), edge(b,c); at(a) holds. Expects reachable = {a,b,c}.
  #[test]
  fn two_axiom_chain_reaches_every_connected_object() {
    let variables = vec![
      variable(0, "?x0", 0),
      variable(1, "?x1", 0),
      variable(2, "?y1", 1),
    ];

    let static_atoms = vec![static_kind::Atom::new(Index::new(0), Index::new(0), vec![Term::Variable(Index::new(1)), Term::Variable(Index::new(2))])];
    let fluent_atoms_table = vec![fluent_kind::Atom::new(Index::new(0), Index::new(0), vec![Term::Variable(Index::new(0))])];
    let derived_atoms_table = vec![
      derived_kind::Atom::new(Index::new(0), Index::new(0), vec![Term::Variable(Index::new(0))]),
      derived_kind::Atom::new(Index::new(1), Index::new(0), vec![Term::Variable(Index::new(2))]),
      derived_kind::Atom::new(Index::new(2), Index::new(0), vec![Term::Variable(Index::new(1))]),
    ];

    let tables =
      FormalismTables { variables: &variables, static_atoms: &static_atoms, fluent_atoms: &fluent_atoms_table, derived_atoms: &derived_atoms_table };

    let base_axiom = AxiomSchema {
      index: Index::new(0),
      name: IString::from("reachable-base"),
      parameters: vec![Index::new(0)],
      head: derived_kind::Literal::new(true, Index::new(0)),
      static_conditions: Vec::new(),
      fluent_conditions: vec![fluent_kind::Literal::new(true, Index::new(0))],
      derived_conditions: Vec::new(),
    };
    let step_axiom = AxiomSchema {
      index: Index::new(1),
      name: IString::from("reachable-step"),
      parameters: vec![Index::new(1), Index::new(2)],
      head: derived_kind::Literal::new(true, Index::new(1)),
      static_conditions: vec![static_kind::Literal::new(true, Index::new(0))],
      fluent_conditions: Vec::new(),
      derived_conditions: vec![derived_kind::Literal::new(true, Index::new(2))],
    };
    let axioms = vec![base_axiom, step_axiom];
    let strata = vec![0, 0];

    let mut repositories = Repositories::new();
    let at_a = repositories.get_or_create_fluent_ground_atom(Index::new(0), vec![Index::new(0)]);
    let mut fluent_bits = Bitset::new();
    fluent_bits.set(at_a.as_usize());

    let mut edge_assignment_set = AssignmentSet::new(2, 3);
    edge_assignment_set.insert_ground_atom(&[Index::new(0), Index::new(1)]);
    edge_assignment_set.insert_ground_atom(&[Index::new(1), Index::new(2)]);
    let edge_ab = repositories.get_or_create_static_ground_atom(Index::new(0), vec![Index::new(0), Index::new(1)]);
    let edge_bc = repositories.get_or_create_static_ground_atom(Index::new(0), vec![Index::new(1), Index::new(2)]);

    let mut static_bits = Bitset::new();
    static_bits.set(edge_ab.as_usize());
    static_bits.set(edge_bc.as_usize());

    let unary_membership = UnaryMembership::build(&[]);
    let evaluator = AxiomEvaluator::new(&axioms, &tables, 3, &unary_membership, std::slice::from_ref(&edge_assignment_set));

    let mut derived_bits = Bitset::new();
    evaluator.evaluate_to_fixpoint(&axioms, &strata, &tables, &mut repositories, &static_bits, &fluent_bits, &mut derived_bits);

    let reachable_a = repositories.get_or_create_derived_ground_atom(Index::new(0), vec![Index::new(0)]);
    let reachable_b = repositories.get_or_create_derived_ground_atom(Index::new(0), vec![Index::new(1)]);
    let reachable_c = repositories.get_or_create_derived_ground_atom(Index::new(0), vec![Index::new(2)]);

    assert!(derived_bits.contains(reachable_a.as_usize()));
    assert!(derived_bits.contains(reachable_b.as_usize()));
    assert!(derived_bits.contains(reachable_c.as_usize()));
  }
}
