/*!

A `Object` is a PDDL constant. Objects are created once during parsing and never mutated; they
live for the problem's lifetime, owned exclusively by the interning repository.

*/

use std::fmt::{Display, Formatter};

use crate::abstractions::{IString, Index};

pub type ObjectIndex = Index;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Object {
  pub index: ObjectIndex,
  pub name: IString,
}

impl Object {
  pub fn new(index: ObjectIndex, name: IString) -> Self {
    Object { index, name }
  }
}

impl Display for Object {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}
