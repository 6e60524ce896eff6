/*!

Axioms are evaluated layer by layer: derived predicates are assigned a *stratum* from their
dependency graph, and axioms in lower strata reach a fixed point before higher strata begin
(spec §4.6). A derived predicate that depends on itself (directly or transitively) only through
*positive* literals may share a stratum with its dependency; a *negative* dependency on a
predicate requires that predicate to be in a strictly lower stratum, since its extension must be
complete before the negated test is meaningful. A cycle containing a negative edge has no
consistent stratum assignment and is rejected with `DomainError::UnstratifiedAxioms`.

The dependency graph itself is not in the distilled specification's data model (only the
consequence — "axioms are assigned a stratum" — is), so the relaxation algorithm below is an
original design: it treats stratum assignment as a shortest-longest-path fixed point, which is
the standard formulation for stratified Datalog negation and generalizes directly to PDDL axioms.

*/

use crate::abstractions::{error::DomainError, HashMap};
use crate::core::axiom::axiom_schema::AxiomSchema;
use crate::core::predicate::derived_kind;

type PredicateIndex = derived_kind::PredicateIndex;

/// One dependency edge `from -> to` extracted from an axiom body: `to`'s head predicate depends
/// on `from`, either positively (same stratum permitted) or negatively (strictly lower required).
struct Edge {
  from: PredicateIndex,
  to: PredicateIndex,
  negative: bool,
}

fn collect_edges(axioms: &[AxiomSchema], atoms: &[derived_kind::Atom]) -> Vec<Edge> {
  let mut edges = Vec::new();
  for axiom in axioms {
    let head_predicate = atoms[axiom.head.atom.as_usize()].predicate;
    for condition in &axiom.derived_conditions {
      let body_predicate = atoms[condition.atom.as_usize()].predicate;
      edges.push(Edge { from: body_predicate, to: head_predicate, negative: condition.is_negated() });
    }
  }
  edges
}

/// Computes a stratum number for every derived predicate named by `atoms`, then returns one
/// stratum per axiom (the stratum of its head predicate). Predicates with no incoming dependency
/// edges sit in stratum 0.
pub fn compute_axiom_strata(
  axioms: &[AxiomSchema],
  atoms: &[derived_kind::Atom],
  predicates: &[derived_kind::Predicate],
) -> Result<Vec<u32>, DomainError> {
  let edges = collect_edges(axioms, atoms);
  let mut stratum: HashMap<PredicateIndex, u32> = HashMap::new();

  // Relaxation: stratum[to] >= stratum[from] (positive edge) or > stratum[from] (negative edge).
  // A consistent stratification is a fixed point of these constraints; `predicates.len()` rounds
  // of relaxation suffice for any acyclic-in-negative-edges dependency graph, the same bound
  // Bellman-Ford uses to detect a negative cycle.
  let mut changed = true;
  let mut rounds = 0;
  let mut offending_edge: Option<&Edge> = None;
  while changed {
    changed = false;
    for edge in &edges {
      let from_stratum = *stratum.get(&edge.from).unwrap_or(&0);
      let required = if edge.negative { from_stratum + 1 } else { from_stratum };
      let to_stratum = stratum.entry(edge.to).or_insert(0);
      if required > *to_stratum {
        *to_stratum = required;
        changed = true;
        offending_edge = Some(edge);
      }
    }
    rounds += 1;
    if changed && rounds > predicates.len() {
      let predicate_name = offending_edge
        .map(|edge| predicates[edge.to.as_usize()].name.clone())
        .unwrap_or_else(|| crate::abstractions::IString::from("<unknown>"));
      return Err(DomainError::UnstratifiedAxioms { predicate: predicate_name });
    }
  }

  let mut axiom_strata = Vec::with_capacity(axioms.len());
  for axiom in axioms {
    let head_predicate = atoms[axiom.head.atom.as_usize()].predicate;
    axiom_strata.push(*stratum.get(&head_predicate).unwrap_or(&0));
  }
  Ok(axiom_strata)
}
