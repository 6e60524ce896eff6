/*!

An action has two lives: an `ActionSchema` with free variables, and a `GroundAction` produced by
binding those variables to objects (`grounding::lifted_grounder`). This module holds both, plus
the effect types shared between them.

*/

pub mod effect;
pub mod action_schema;
pub mod ground_action;

pub use effect::{ConditionalEffect, SimpleEffect, UniversalEffect};
pub use action_schema::{ActionSchema, ActionSchemaIndex};
pub use ground_action::{
  Binding, GroundAction, GroundConditionalEffect, GroundSimpleEffect, StripsEffect, StripsPrecondition,
};
