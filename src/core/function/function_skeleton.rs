/*!

A `FunctionSkeleton` is to numeric fluents what a `Predicate` is to atoms: a named, arity-tagged
symbol. `cost_expression`s (see `core::action::ActionSchema`) and goal metrics reference
function skeletons through `Function`/`GroundFunction`.

*/

use std::fmt::{Display, Formatter};

use crate::abstractions::{IString, Index};

pub type FunctionSkeletonIndex = Index;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSkeleton {
  pub index: FunctionSkeletonIndex,
  pub name: IString,
  pub parameter_names: Vec<IString>,
  pub arity: u32,
}

impl FunctionSkeleton {
  pub fn new(index: FunctionSkeletonIndex, name: IString, parameter_names: Vec<IString>) -> Self {
    let arity = parameter_names.len() as u32;
    FunctionSkeleton { index, name, parameter_names, arity }
  }
}

impl Display for FunctionSkeleton {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}/{}", self.name, self.arity)
  }
}
