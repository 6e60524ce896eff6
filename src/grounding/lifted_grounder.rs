/*!

`ApplicableActionGenerator::generate` is the lifted grounder's external interface (spec §4.5,
§6): given a state, it enumerates every `GroundAction` whose precondition holds. For each schema
it precomputes a `StaticConsistencyGraph` from the schema's arity-≤2 static conditions once, at
construction time (since static facts never change), and re-enumerates the graph's cliques on
every call — each clique is a full parameter binding consistent with those conditions. A clique
is only a fast pre-filter: it does not check arity > 2 static conditions, nor fluent/derived
conditions at all, so every candidate binding is re-verified exactly against the current state
before a `GroundAction` is emitted (SPEC_FULL.md §4.3, §4.4).

Ground actions are cached by `(SchemaIndex, Binding)` (SPEC_FULL.md §4.5) so that re-deriving the
same grounding for a later state is a hash lookup, not a rebuild.

*/

use crate::abstractions::{Bitset, HashMap};
use crate::core::action::{ActionSchema, ActionSchemaIndex, Binding, GroundAction, GroundConditionalEffect, GroundSimpleEffect, StripsEffect, StripsPrecondition};
use crate::core::axiom::{AxiomSchema, GroundAxiom};
use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
use crate::core::term::{ObjectIndex, Term, Variable};
use crate::grounding::assignment_set::{AssignmentSet, LiteralView};
use crate::grounding::clique::enumerate_cliques;
use crate::grounding::consistency_graph::{StaticConsistencyGraph, UnaryMembership};
use crate::repository::Repositories;

fn bind_terms(terms: &[Term], variables: &[Variable], binding: &[ObjectIndex]) -> Vec<ObjectIndex> {
  terms
    .iter()
    .map(|term| match term {
      Term::Object(object) => *object,
      Term::Variable(variable) => binding[variables[variable.as_usize()].parameter_index as usize],
    })
    .collect()
}

fn static_literal_holds(
  literal: &static_kind::Literal,
  atoms: &[static_kind::Atom],
  variables: &[Variable],
  binding: &[ObjectIndex],
  repositories: &mut Repositories,
  static_membership: &Bitset,
) -> bool {
  let atom = &atoms[literal.atom.as_usize()];
  let objects = bind_terms(&atom.terms, variables, binding);
  let index = repositories.get_or_create_static_ground_atom(atom.predicate, objects);
  static_membership.contains(index.as_usize()) != literal.is_negated()
}

fn fluent_literal_holds(
  literal: &fluent_kind::Literal,
  atoms: &[fluent_kind::Atom],
  variables: &[Variable],
  binding: &[ObjectIndex],
  repositories: &mut Repositories,
  fluent_atoms: &Bitset,
) -> bool {
  let atom = &atoms[literal.atom.as_usize()];
  let objects = bind_terms(&atom.terms, variables, binding);
  let index = repositories.get_or_create_fluent_ground_atom(atom.predicate, objects);
  fluent_atoms.contains(index.as_usize()) != literal.is_negated()
}

fn derived_literal_holds(
  literal: &derived_kind::Literal,
  atoms: &[derived_kind::Atom],
  variables: &[Variable],
  binding: &[ObjectIndex],
  repositories: &mut Repositories,
  derived_atoms: &Bitset,
) -> bool {
  let atom = &atoms[literal.atom.as_usize()];
  let objects = bind_terms(&atom.terms, variables, binding);
  let index = repositories.get_or_create_derived_ground_atom(atom.predicate, objects);
  derived_atoms.contains(index.as_usize()) != literal.is_negated()
}

/// The tables a grounding pass needs to resolve lifted literals into ground atoms: the problem's
/// variable table and its three atom tables.
pub struct FormalismTables<'a> {
  pub variables: &'a [Variable],
  pub static_atoms: &'a [static_kind::Atom],
  pub fluent_atoms: &'a [fluent_kind::Atom],
  pub derived_atoms: &'a [derived_kind::Atom],
}

/// The full exact re-verification a static consistency graph's clique fast-path cannot itself
/// provide for predicates of arity > 2 (SPEC_FULL.md §4.4 supplement). Shared by the action
/// grounder and `axiom_eval`, since both ground a conjunction of static literals the same way.
pub(crate) fn all_static_conditions_hold(
  static_conditions: &[static_kind::Literal],
  tables: &FormalismTables,
  binding: &[ObjectIndex],
  repositories: &mut Repositories,
  static_membership: &Bitset,
) -> bool {
  static_conditions
    .iter()
    .all(|literal| static_literal_holds(literal, tables.static_atoms, tables.variables, binding, &mut *repositories, static_membership))
}

fn all_conditions_hold(
  static_conditions: &[static_kind::Literal],
  fluent_conditions: &[fluent_kind::Literal],
  derived_conditions: &[derived_kind::Literal],
  tables: &FormalismTables,
  binding: &[ObjectIndex],
  repositories: &mut Repositories,
  static_membership: &Bitset,
  fluent_atoms: &Bitset,
  derived_atoms: &Bitset,
) -> bool {
  all_static_conditions_hold(static_conditions, tables, binding, repositories, static_membership)
    && fluent_conditions.iter().all(|literal| fluent_literal_holds(literal, tables.fluent_atoms, tables.variables, binding, repositories, fluent_atoms))
    && derived_conditions
      .iter()
      .all(|literal| derived_literal_holds(literal, tables.derived_atoms, tables.variables, binding, repositories, derived_atoms))
}

fn build_precondition(
  fluent_conditions: &[fluent_kind::Literal],
  derived_conditions: &[derived_kind::Literal],
  tables: &FormalismTables,
  binding: &[ObjectIndex],
  repositories: &mut Repositories,
) -> StripsPrecondition {
  let mut precondition = StripsPrecondition::new();
  for literal in fluent_conditions {
    let atom = &tables.fluent_atoms[literal.atom.as_usize()];
    let objects = bind_terms(&atom.terms, tables.variables, binding);
    let index = repositories.get_or_create_fluent_ground_atom(atom.predicate, objects);
    if literal.is_negated() {
      precondition.negative_fluent.set(index.as_usize());
    } else {
      precondition.positive_fluent.set(index.as_usize());
    }
  }
  for literal in derived_conditions {
    let atom = &tables.derived_atoms[literal.atom.as_usize()];
    let objects = bind_terms(&atom.terms, tables.variables, binding);
    let index = repositories.get_or_create_derived_ground_atom(atom.predicate, objects);
    if literal.is_negated() {
      precondition.negative_derived.set(index.as_usize());
    } else {
      precondition.positive_derived.set(index.as_usize());
    }
  }
  precondition
}

fn cartesian_product_of_objects(num_parameters: usize, num_objects: usize) -> Vec<Vec<usize>> {
  let mut results = vec![Vec::new()];
  for _ in 0..num_parameters {
    let mut next = Vec::with_capacity(results.len() * num_objects);
    for partial in &results {
      for object in 0..num_objects {
        let mut extended = partial.clone();
        extended.push(object);
        next.push(extended);
      }
    }
    results = next;
  }
  results
}

pub struct GroundedSchema {
  pub schema_index: ActionSchemaIndex,
  pub static_graph: StaticConsistencyGraph,
}

pub struct ApplicableActionGenerator {
  num_objects: usize,
  grounded_schemas: Vec<GroundedSchema>,
  cache: HashMap<(ActionSchemaIndex, Binding), GroundAction>,
}

impl ApplicableActionGenerator {
  /// Precomputes one `StaticConsistencyGraph` per schema from its arity-≤2 static conditions.
  pub fn new(
    schemas: &[ActionSchema],
    tables: &FormalismTables,
    num_objects: usize,
    unary_membership: &UnaryMembership,
    static_assignment_sets: &[AssignmentSet],
  ) -> Self {
    let grounded_schemas = schemas
      .iter()
      .map(|schema| {
        let (unary, binary): (Vec<_>, Vec<_>) = schema
          .static_conditions
          .iter()
          .filter_map(|literal| literal_view(literal, tables))
          .partition(|literal: &LiteralView| literal.predicate_arity <= 1);

        let graph = StaticConsistencyGraph::build(
          schema.parameters.len() as u32,
          num_objects,
          &unary,
          &binary,
          unary_membership,
          static_assignment_sets,
        );
        GroundedSchema { schema_index: schema.index, static_graph: graph }
      })
      .collect();

    ApplicableActionGenerator { num_objects, grounded_schemas, cache: HashMap::new() }
  }

  /// Enumerates every applicable ground action in the given state.
  #[allow(clippy::too_many_arguments)]
  pub fn generate(
    &mut self,
    schemas: &[ActionSchema],
    tables: &FormalismTables,
    repositories: &mut Repositories,
    static_membership: &Bitset,
    fluent_atoms: &Bitset,
    derived_atoms: &Bitset,
  ) -> Vec<GroundAction> {
    let mut actions = Vec::new();

    for grounded in &self.grounded_schemas {
      let schema = &schemas[grounded.schema_index.as_usize()];
      for clique in enumerate_cliques(&grounded.static_graph) {
        let mut binding: Vec<ObjectIndex> = vec![ObjectIndex::new(0); schema.parameters.len()];
        for vertex in &clique {
          binding[vertex.parameter_index as usize] = vertex.object_index;
        }

        if let Some(cached) = self.cache.get(&(schema.index, binding.clone())) {
          actions.push(cached.clone());
          continue;
        }

        let conditions_hold = all_conditions_hold(
          &schema.static_conditions,
          &schema.fluent_conditions,
          &schema.derived_conditions,
          tables,
          &binding,
          repositories,
          static_membership,
          fluent_atoms,
          derived_atoms,
        );
        if !conditions_hold {
          continue;
        }

        if let Some(action) = self.ground_action(schema, &binding, tables, repositories, static_membership) {
          self.cache.insert((schema.index, binding.clone()), action.clone());
          actions.push(action);
        }
      }
    }

    actions
  }

  fn ground_action(
    &self,
    schema: &ActionSchema,
    binding: &[ObjectIndex],
    tables: &FormalismTables,
    repositories: &mut Repositories,
    static_membership: &Bitset,
  ) -> Option<GroundAction> {
    let strips_precondition = build_precondition(&schema.fluent_conditions, &schema.derived_conditions, tables, binding, repositories);

    let mut strips_effect = StripsEffect::new();
    for simple_effect in &schema.simple_effects {
      let atom = &tables.fluent_atoms[simple_effect.atom.as_usize()];
      let objects = bind_terms(&atom.terms, tables.variables, binding);
      let index = repositories.get_or_create_fluent_ground_atom(atom.predicate, objects);
      if simple_effect.is_negated {
        strips_effect.negative.set(index.as_usize());
      } else {
        strips_effect.positive.set(index.as_usize());
      }
    }

    let mut conditional_effects = Vec::new();
    for conditional in &schema.conditional_effects {
      if !conditional
        .static_conditions
        .iter()
        .all(|literal| static_literal_holds(literal, tables.static_atoms, tables.variables, binding, &mut *repositories, static_membership))
      {
        continue;
      }
      let precondition = build_precondition(&conditional.fluent_conditions, &conditional.derived_conditions, tables, binding, repositories);
      let atom = &tables.fluent_atoms[conditional.effect.atom.as_usize()];
      let objects = bind_terms(&atom.terms, tables.variables, binding);
      let atom_index = repositories.get_or_create_fluent_ground_atom(atom.predicate, objects);
      conditional_effects.push(GroundConditionalEffect {
        precondition,
        effect: GroundSimpleEffect { is_negated: conditional.effect.is_negated, atom_index: atom_index.as_usize() },
      });
    }

    for universal in &schema.universal_effects {
      for extra in cartesian_product_of_objects(universal.parameters.len(), self.num_objects) {
        let mut full_binding = binding.to_vec();
        for (offset, &object_local_index) in extra.iter().enumerate() {
          let parameter = universal.parameters[offset];
          let parameter_index = tables.variables[parameter.as_usize()].parameter_index as usize;
          if full_binding.len() <= parameter_index {
            full_binding.resize(parameter_index + 1, ObjectIndex::new(0));
          }
          full_binding[parameter_index] = ObjectIndex::from(object_local_index);
        }

        let static_ok = universal
          .static_conditions
          .iter()
          .all(|literal| static_literal_holds(literal, tables.static_atoms, tables.variables, &full_binding, &mut *repositories, static_membership));
        if !static_ok {
          continue;
        }

        let precondition = build_precondition(&universal.fluent_conditions, &universal.derived_conditions, tables, &full_binding, repositories);
        let atom = &tables.fluent_atoms[universal.effect.atom.as_usize()];
        let objects = bind_terms(&atom.terms, tables.variables, &full_binding);
        let atom_index = repositories.get_or_create_fluent_ground_atom(atom.predicate, objects);
        conditional_effects.push(GroundConditionalEffect {
          precondition,
          effect: GroundSimpleEffect { is_negated: universal.effect.is_negated, atom_index: atom_index.as_usize() },
        });
      }
    }

    Some(GroundAction { schema: schema.index, binding: binding.to_vec(), strips_precondition, strips_effect, conditional_effects })
  }
}

pub(crate) fn literal_view<'a>(literal: &'a static_kind::Literal, tables: &FormalismTables<'a>) -> Option<LiteralView<'a>> {
  let atom = tables.static_atoms.get(literal.atom.as_usize())?;
  Some(LiteralView {
    terms: &atom.terms,
    variables: tables.variables,
    predicate_index: atom.predicate.as_usize(),
    predicate_arity: atom.terms.len() as u32,
    is_negated: literal.is_negated(),
  })
}

/// Grounds an axiom schema against a binding the same way an action schema's body is checked;
/// used by `axiom_eval` to materialize `GroundAxiom`s for one stratum.
pub fn ground_axiom(
  axiom: &AxiomSchema,
  binding: &[ObjectIndex],
  tables: &FormalismTables,
  repositories: &mut Repositories,
) -> GroundAxiom {
  let precondition = build_precondition(&axiom.fluent_conditions, &axiom.derived_conditions, tables, binding, repositories);
  let head_atom = &tables.derived_atoms[axiom.head.atom.as_usize()];
  let objects = bind_terms(&head_atom.terms, tables.variables, binding);
  let atom_index = repositories.get_or_create_derived_ground_atom(head_atom.predicate, objects);
  GroundAxiom {
    schema: axiom.index,
    binding: binding.to_vec(),
    precondition,
    effect: GroundSimpleEffect { is_negated: false, atom_index: atom_index.as_usize() },
  }
}
