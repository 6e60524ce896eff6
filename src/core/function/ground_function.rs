use crate::abstractions::Index;
use crate::core::function::function_skeleton::FunctionSkeletonIndex;
use crate::core::term::ObjectIndex;

pub type GroundFunctionIndex = Index;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroundFunction {
  pub index: GroundFunctionIndex,
  pub skeleton: FunctionSkeletonIndex,
  pub objects: Vec<ObjectIndex>,
}

impl GroundFunction {
  pub fn new(index: GroundFunctionIndex, skeleton: FunctionSkeletonIndex, objects: Vec<ObjectIndex>) -> Self {
    GroundFunction { index, skeleton, objects }
  }
}

/// A problem's `:init` block assigns a numeric value to some ground functions (a PDDL
/// `NumericFluent`, e.g. `(= (fuel truck1) 10)`). Functions with no assignment are undefined
/// and evaluating an expression that reaches one is an `ArithmeticError`, not a zero default.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NumericFluent {
  pub function: GroundFunctionIndex,
  pub value: f64,
}
