//! End-to-end scenarios exercising interning, lifted grounding, and state transition together,
//! the way a domain loader -> grounder -> search loop pipeline would use this crate.

use mimir::abstractions::{Bitset, IString, Index};
use mimir::core::action::{ActionSchema, SimpleEffect};
use mimir::core::predicate::{fluent_kind, static_kind};
use mimir::core::problem::{get_or_create_problem, Domain};
use mimir::core::term::{Object, Term, Variable};
use mimir::axiom_eval::AxiomEvaluator;
use mimir::grounding::{AssignmentSet, ApplicableActionGenerator, FormalismTables, UnaryMembership};
use mimir::repository::Repositories;
use mimir::state::StateRepository;

/// A two-object, one-action domain: `move(?x, ?y)` requires `at(?x)` (fluent) and `adjacent(?x,
/// ?y)` (static), and moves the agent from `?x` to `?y`. Objects are `a` (0) and `b` (1); the
/// only static fact is `adjacent(a, b)`. Mirrors spec §8 scenario (i)/(ii): grounding finds
/// exactly the one applicable instantiation, and applying it produces the expected successor.
#[test]
fn move_action_grounds_to_one_instantiation_and_its_successor_moves_the_agent() {
  let objects = vec![Object::new(Index::new(0), IString::from("a")), Object::new(Index::new(1), IString::from("b"))];

  let variables = vec![
    Variable::new(Index::new(0), IString::from("?x"), 0),
    Variable::new(Index::new(1), IString::from("?y"), 1),
  ];

  let static_atoms = vec![static_kind::Atom::new(Index::new(0), Index::new(0), vec![Term::Variable(Index::new(0)), Term::Variable(Index::new(1))])];
  let fluent_atoms_table = vec![
    fluent_kind::Atom::new(Index::new(0), Index::new(0), vec![Term::Variable(Index::new(0))]),
    fluent_kind::Atom::new(Index::new(1), Index::new(0), vec![Term::Variable(Index::new(1))]),
  ];
  let derived_atoms_table: Vec<mimir::core::predicate::derived_kind::Atom> = Vec::new();

  let tables = FormalismTables {
    variables: &variables,
    static_atoms: &static_atoms,
    fluent_atoms: &fluent_atoms_table,
    derived_atoms: &derived_atoms_table,
  };

  let move_schema = ActionSchema {
    index: Index::new(0),
    name: IString::from("move"),
    parameters: vec![Index::new(0), Index::new(1)],
    original_arity: 2,
    static_conditions: vec![static_kind::Literal::new(true, Index::new(0))],
    fluent_conditions: vec![fluent_kind::Literal::new(true, Index::new(0))],
    derived_conditions: Vec::new(),
    simple_effects: vec![SimpleEffect::new(true, Index::new(0)), SimpleEffect::new(false, Index::new(1))],
    conditional_effects: Vec::new(),
    universal_effects: Vec::new(),
    cost_expression: None,
  };

  let domain = Domain {
    name: IString::from("corridor"),
    static_predicates: Vec::new(),
    fluent_predicates: Vec::new(),
    derived_predicates: Vec::new(),
    function_skeletons: Vec::new(),
    action_schemas: vec![move_schema],
    axiom_schemas: Vec::new(),
  };

  let mut repositories = Repositories::new();
  let adjacent_ab = repositories.get_or_create_static_ground_atom(Index::new(0), vec![Index::new(0), Index::new(1)]);
  let at_a = repositories.get_or_create_fluent_ground_atom(Index::new(0), vec![Index::new(0)]);

  let problem = get_or_create_problem(
    Index::new(0),
    IString::from("corridor-problem"),
    domain.clone(),
    objects,
    Vec::new(),
    vec![static_kind::GroundLiteral::new(true, adjacent_ab)],
    vec![fluent_kind::GroundLiteral::new(true, at_a)],
    Vec::new(),
    Vec::new(),
    Vec::new(),
    Vec::new(),
    Vec::new(),
    None,
  )
  .expect("positive-only initial literals are accepted");

  let mut static_membership = Bitset::new();
  static_membership.set(adjacent_ab.as_usize());

  let mut adjacency_witnesses = AssignmentSet::new(2, 2);
  adjacency_witnesses.insert_ground_atom(&[Index::new(0), Index::new(1)]);

  let unary_membership = UnaryMembership::build(&[]);
  let mut action_generator =
    ApplicableActionGenerator::new(&domain.action_schemas, &tables, problem.objects.len(), &unary_membership, std::slice::from_ref(&adjacency_witnesses));

  let axiom_evaluator = AxiomEvaluator::new(&domain.axiom_schemas, &tables, problem.objects.len(), &unary_membership, &[]);
  let strata: Vec<u32> = Vec::new();

  let mut state_repository = StateRepository::new();
  let initial = state_repository.initial_state(
    &problem,
    &axiom_evaluator,
    &domain.axiom_schemas,
    &strata,
    &tables,
    &mut repositories,
    &static_membership,
  );
  let initial_state = state_repository.get(initial);

  let applicable = action_generator.generate(
    &domain.action_schemas,
    &tables,
    &mut repositories,
    &static_membership,
    &initial_state.fluent_atoms,
    &initial_state.derived_atoms,
  );

  assert_eq!(applicable.len(), 1, "adjacent(a,b) is the only static fact, so only move(a,b) should ground");
  let move_action = &applicable[0];
  assert_eq!(move_action.binding, vec![Index::new(0), Index::new(1)]);

  let successor = state_repository.successor(
    initial,
    move_action,
    &axiom_evaluator,
    &domain.axiom_schemas,
    &strata,
    &tables,
    &mut repositories,
    &static_membership,
  );
  let successor_state = state_repository.get(successor);

  let at_b = repositories.get_or_create_fluent_ground_atom(Index::new(0), vec![Index::new(1)]);
  assert!(!successor_state.holds_fluent(at_a.as_usize()), "move deletes at(a)");
  assert!(successor_state.holds_fluent(at_b.as_usize()), "move adds at(b)");
  assert_ne!(successor, initial, "moving changes the fluent bitset, so it must be a new state");
}

/// Applying `move(a, b)` a second time from the fresh state has no applicable grounding, because
/// `at(a)` no longer holds and `adjacent` has no edge starting at `b` — spec §4.5's exact
/// re-verification against the *current* state, not just the precomputed static graph.
#[test]
fn no_static_fact_means_no_applicable_action() {
  let variables: Vec<Variable> = Vec::new();
  let static_atoms: Vec<static_kind::Atom> = Vec::new();
  let fluent_atoms_table: Vec<fluent_kind::Atom> = Vec::new();
  let derived_atoms_table: Vec<mimir::core::predicate::derived_kind::Atom> = Vec::new();
  let tables = FormalismTables {
    variables: &variables,
    static_atoms: &static_atoms,
    fluent_atoms: &fluent_atoms_table,
    derived_atoms: &derived_atoms_table,
  };

  let move_schema = ActionSchema {
    index: Index::new(0),
    name: IString::from("move"),
    parameters: vec![Index::new(0)],
    original_arity: 1,
    static_conditions: vec![static_kind::Literal::new(true, Index::new(0))],
    fluent_conditions: Vec::new(),
    derived_conditions: Vec::new(),
    simple_effects: Vec::new(),
    conditional_effects: Vec::new(),
    universal_effects: Vec::new(),
    cost_expression: None,
  };
  // Variable-less parameter list is nonsensical for a real schema; this schema is unreachable
  // because its single static condition references an atom index that was never interned, so
  // the unary membership table can never witness it — exercising the empty-partition short
  // circuit in `clique::enumerate_cliques` end to end.
  let schemas = vec![move_schema];

  let unary_membership = UnaryMembership::build(&[]);
  let mut generator = ApplicableActionGenerator::new(&schemas, &tables, 0, &unary_membership, &[]);
  let mut repositories = Repositories::new();

  let actions = generator.generate(&schemas, &tables, &mut repositories, &Bitset::new(), &Bitset::new(), &Bitset::new());
  assert!(actions.is_empty());
}
