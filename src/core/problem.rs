/*!

`Problem` aggregates everything produced by loading one PDDL domain+problem pair: the domain's
schemas and predicate tables, the problem's objects, its initial state split by predicate kind,
numeric-fluent initial values, its goal condition (also split by kind), and an optional
optimization metric used only to rank plans, never to prune search (spec §3, SPEC_FULL.md §3).

`get_or_create_problem` resolves the Open Question left by two inconsistent constructor
signatures in the source headers (SPEC_FULL.md §9): this one takes `derived_predicates`
positioned right after `objects`, matching the fuller of the two.

*/

use crate::abstractions::{error::DomainError, IString, Index};
use crate::core::action::ActionSchema;
use crate::core::axiom::AxiomSchema;
use crate::core::function::{FunctionExpressionIndex, FunctionSkeleton, NumericFluent};
use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
use crate::core::term::Object;

pub type ProblemIndex = Index;

/// Everything that belongs to the domain rather than to a particular problem instance: its
/// schemas and its three predicate tables. A domain may be shared conceptually across several
/// problems, but per the single-owner-per-problem scheduling model (spec §5) each `Problem`
/// here owns its own copy rather than sharing a reference.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Domain {
  pub name: IString,
  pub static_predicates: Vec<static_kind::Predicate>,
  pub fluent_predicates: Vec<fluent_kind::Predicate>,
  pub derived_predicates: Vec<derived_kind::Predicate>,
  pub function_skeletons: Vec<FunctionSkeleton>,
  pub action_schemas: Vec<ActionSchema>,
  pub axiom_schemas: Vec<AxiomSchema>,
}

/// The plan-ranking expression named by a problem's `:metric` directive. Never consulted while
/// deciding applicability or computing successors (spec §3 Non-goals) — only a planner sitting on
/// top of this toolkit would read it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct OptimizationMetric {
  pub minimize: bool,
  pub expression: FunctionExpressionIndex,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Problem {
  pub index: ProblemIndex,
  pub name: IString,
  pub domain: Domain,
  pub objects: Vec<Object>,
  /// Derived predicates declared at problem scope, in addition to any declared by the domain.
  pub derived_predicates: Vec<derived_kind::Predicate>,

  pub static_initial_literals: Vec<static_kind::GroundLiteral>,
  pub fluent_initial_literals: Vec<fluent_kind::GroundLiteral>,
  pub derived_initial_literals: Vec<derived_kind::GroundLiteral>,
  pub numeric_fluents: Vec<NumericFluent>,

  pub static_goal: Vec<static_kind::GroundLiteral>,
  pub fluent_goal: Vec<fluent_kind::GroundLiteral>,
  pub derived_goal: Vec<derived_kind::GroundLiteral>,

  pub optimization_metric: Option<OptimizationMetric>,
}

/// Constructs a `Problem`, rejecting a negative fluent initial literal as a contract violation
/// (spec §4.6: "Negative initial literals are a fatal error") rather than as a routine lookup
/// failure — callers at the problem-load boundary are expected to let this propagate and abort
/// the load, not to retry or recover.
#[allow(clippy::too_many_arguments)]
pub fn get_or_create_problem(
  index: ProblemIndex,
  name: IString,
  domain: Domain,
  objects: Vec<Object>,
  derived_predicates: Vec<derived_kind::Predicate>,
  static_initial_literals: Vec<static_kind::GroundLiteral>,
  fluent_initial_literals: Vec<fluent_kind::GroundLiteral>,
  derived_initial_literals: Vec<derived_kind::GroundLiteral>,
  numeric_fluents: Vec<NumericFluent>,
  static_goal: Vec<static_kind::GroundLiteral>,
  fluent_goal: Vec<fluent_kind::GroundLiteral>,
  derived_goal: Vec<derived_kind::GroundLiteral>,
  optimization_metric: Option<OptimizationMetric>,
) -> Result<Problem, DomainError> {
  if let Some(literal) = fluent_initial_literals.iter().find(|literal| literal.is_negated()) {
    return Err(DomainError::NegativeInitialLiteral { atom: format!("{:?}", literal.atom) });
  }

  Ok(Problem {
    index,
    name,
    domain,
    objects,
    derived_predicates,
    static_initial_literals,
    fluent_initial_literals,
    derived_initial_literals,
    numeric_fluents,
    static_goal,
    fluent_goal,
    derived_goal,
    optimization_metric,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

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

  #[test]
  fn negative_fluent_initial_literal_is_rejected() {
    // spec §8 scenario (iv).
    let negative_literal = fluent_kind::GroundLiteral::new(false, Index::new(0));
    let result = get_or_create_problem(
      Index::new(0),
      IString::from("problem"),
      empty_domain(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      vec![negative_literal],
      Vec::new(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      None,
    );
    assert!(matches!(result, Err(DomainError::NegativeInitialLiteral { .. })));
  }

  #[test]
  fn positive_only_problem_is_accepted() {
    let positive_literal = fluent_kind::GroundLiteral::new(true, Index::new(0));
    let result = get_or_create_problem(
      Index::new(0),
      IString::from("problem"),
      empty_domain(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      vec![positive_literal],
      Vec::new(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      Vec::new(),
      None,
    );
    assert!(result.is_ok());
  }
}
