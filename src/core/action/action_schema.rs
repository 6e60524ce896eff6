/*!

An `ActionSchema` is a parameterized action: it becomes a ground `GroundAction` once its
parameters are bound to objects (see `grounding::lifted_grounder`).

*/

use crate::abstractions::{IString, Index};
use crate::core::action::effect::{ConditionalEffect, SimpleEffect, UniversalEffect};
use crate::core::function::FunctionExpressionIndex;
use crate::core::predicate::{derived_kind, fluent_kind, static_kind};
use crate::core::term::VariableIndex;

pub type ActionSchemaIndex = Index;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ActionSchema {
  pub index: ActionSchemaIndex,
  pub name: IString,
  pub parameters: Vec<VariableIndex>,
  /// The arity before any compilation pass added extra parameters (spec §3). A schema whose
  /// `parameters.len()` differs from `original_arity` arose from some compilation step (e.g.
  /// a universal-effect unrolling pushed synthetic parameters onto the schema itself); plan
  /// pretty-printers must report `original_arity` and print only the first `original_arity`
  /// binding entries (spec §8 scenario (vi)).
  pub original_arity: u32,

  pub static_conditions: Vec<static_kind::Literal>,
  pub fluent_conditions: Vec<fluent_kind::Literal>,
  pub derived_conditions: Vec<derived_kind::Literal>,

  pub simple_effects: Vec<SimpleEffect>,
  pub conditional_effects: Vec<ConditionalEffect>,
  pub universal_effects: Vec<UniversalEffect>,

  pub cost_expression: Option<FunctionExpressionIndex>,
}

impl ActionSchema {
  pub fn arity(&self) -> usize {
    self.parameters.len()
  }

  /// The binding entries a plan pretty-printer should show: the prefix of a full binding
  /// corresponding to the schema's original (pre-compilation) parameters.
  pub fn printable_binding<'a, T>(&self, binding: &'a [T]) -> &'a [T] {
    &binding[..(self.original_arity as usize).min(binding.len())]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abstractions::IString;

  fn schema_with_arity(parameters: usize, original_arity: u32) -> ActionSchema {
    ActionSchema {
      index: Index::new(0),
      name: IString::from("move"),
      parameters: (0..parameters).map(|i| Index::new(i as u32)).collect(),
      original_arity,
      static_conditions: Vec::new(),
      fluent_conditions: Vec::new(),
      derived_conditions: Vec::new(),
      simple_effects: Vec::new(),
      conditional_effects: Vec::new(),
      universal_effects: Vec::new(),
      cost_expression: None,
    }
  }

  #[test]
  fn printable_binding_truncates_to_original_arity() {
    // spec §8 scenario (vi): original_arity=2 but compiled arity=3; only the first two
    // binding entries are printed.
    let schema = schema_with_arity(3, 2);
    let binding = vec!["a", "b", "c"];
    assert_eq!(schema.printable_binding(&binding), &["a", "b"]);
  }
}
