/*!

A `Term` is either a bound `Object` or a free `Variable`. A schema's ground arguments are
sequences of terms; once every term in an argument list is an `Object`, the argument list is
"ground" and can be resolved to a `GroundAtom`/`GroundAction` through the interning repository.

Unlike `mod2lib`'s `Term`, which is a node in an expression tree with its own matching theory,
a PDDL `Term` carries no substructure of its own — it is the leaf of a literal's argument list.

*/

use std::fmt::{Display, Formatter};

use crate::core::term::object::{Object, ObjectIndex};
use crate::core::term::variable::{Variable, VariableIndex};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Term {
  Variable(VariableIndex),
  Object(ObjectIndex),
}

impl Term {
  #[inline(always)]
  pub fn is_variable(&self) -> bool {
    matches!(self, Term::Variable(_))
  }

  #[inline(always)]
  pub fn is_object(&self) -> bool {
    matches!(self, Term::Object(_))
  }

  #[inline(always)]
  pub fn as_variable(&self) -> Option<VariableIndex> {
    match self {
      Term::Variable(index) => Some(*index),
      Term::Object(_) => None,
    }
  }

  #[inline(always)]
  pub fn as_object(&self) -> Option<ObjectIndex> {
    match self {
      Term::Object(index) => Some(*index),
      Term::Variable(_) => None,
    }
  }
}

/// Display requires resolving the term's name, so `Term` itself does not implement `Display`;
/// callers format through `TermFormatter`, which borrows the two name tables it needs.
pub struct TermFormatter<'a> {
  pub term: &'a Term,
  pub objects: &'a [Object],
  pub variables: &'a [Variable],
}

impl<'a> Display for TermFormatter<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.term {
      Term::Object(index) => write!(f, "{}", self.objects[index.as_usize()]),
      Term::Variable(index) => write!(f, "{}", self.variables[index.as_usize()]),
    }
  }
}
