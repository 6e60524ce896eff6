/*!

`Function` is the numeric-fluent analogue of `Atom`: a function skeleton applied to a
(possibly non-ground) term list. `GroundFunction` is its fully-bound counterpart, the
analogue of `GroundAtom`.

*/

use crate::abstractions::Index;
use crate::core::function::function_skeleton::FunctionSkeletonIndex;
use crate::core::term::{ObjectIndex, Term};

pub type FunctionIndex = Index;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Function {
  pub index: FunctionIndex,
  pub skeleton: FunctionSkeletonIndex,
  pub terms: Vec<Term>,
}

impl Function {
  pub fn new(index: FunctionIndex, skeleton: FunctionSkeletonIndex, terms: Vec<Term>) -> Self {
    Function { index, skeleton, terms }
  }
}
