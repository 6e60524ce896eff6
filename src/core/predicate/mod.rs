/*!

Static, Fluent, and Derived predicates are three populations with disjoint semantics (spec §3):

  - *Static*: value constant across the problem; used only to prune bindings.
  - *Fluent*: directly modified by action effects.
  - *Derived*: computed from a fixed point of axioms after each state change.

Design note 9.2 rules out an open trait hierarchy over the predicate kind (the CRTP-style
inheritance the original implementation uses): "model as three independent, monomorphic
modules parameterized by a kind tag, not as an open hierarchy... This preserves the zero-cost
dispatch while eliminating the inheritance." `define_predicate_kind!` is invoked once per kind
(via `paste` to build the module and type names) and expands to an entirely concrete,
non-generic `Predicate`/`Atom`/`GroundAtom`/`Literal`/`GroundLiteral` set living in its own
module — `static_kind`, `fluent_kind`, `derived_kind`. There is no shared trait; the grounder,
which is the only hot path, never dispatches through one.

*/

macro_rules! define_predicate_kind {
  ($module:ident, $doc:literal) => {
    paste::paste! {
      #[doc = $doc]
      pub mod $module {
        use std::fmt::{Display, Formatter};

        use crate::abstractions::{IString, Index};
        use crate::core::term::{ObjectIndex, Term};

        pub type PredicateIndex = Index;
        pub type AtomIndex = Index;

        /// A named, arity-tagged predicate symbol of this kind.
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct Predicate {
          pub index: PredicateIndex,
          pub name: IString,
          /// Names of the predicate's formal parameters, for pretty-printing only.
          pub parameter_names: Vec<IString>,
          pub arity: u32,
        }

        impl Predicate {
          pub fn new(index: PredicateIndex, name: IString, parameter_names: Vec<IString>) -> Self {
            let arity = parameter_names.len() as u32;
            Predicate { index, name, parameter_names, arity }
          }
        }

        impl Display for Predicate {
          fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}/{}", self.name, self.arity)
          }
        }

        /// `(predicate, term_list)`, possibly containing free variables.
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct Atom {
          pub index: AtomIndex,
          pub predicate: PredicateIndex,
          pub terms: Vec<Term>,
        }

        impl Atom {
          pub fn new(index: AtomIndex, predicate: PredicateIndex, terms: Vec<Term>) -> Self {
            Atom { index, predicate, terms }
          }

          pub fn arity(&self) -> usize {
            self.terms.len()
          }
        }

        /// `(predicate, object_list)`: an atom all of whose arguments are bound objects.
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct GroundAtom {
          pub index: AtomIndex,
          pub predicate: PredicateIndex,
          pub objects: Vec<ObjectIndex>,
        }

        impl GroundAtom {
          pub fn new(index: AtomIndex, predicate: PredicateIndex, objects: Vec<ObjectIndex>) -> Self {
            GroundAtom { index, predicate, objects }
          }

          pub fn arity(&self) -> usize {
            self.objects.len()
          }
        }

        /// `(polarity, atom)`. `polarity == true` means the literal is positive (unnegated).
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct Literal {
          pub polarity: bool,
          pub atom: AtomIndex,
        }

        impl Literal {
          pub fn new(polarity: bool, atom: AtomIndex) -> Self {
            Literal { polarity, atom }
          }

          #[inline(always)]
          pub fn is_negated(&self) -> bool {
            !self.polarity
          }
        }

        /// `(polarity, ground_atom)`.
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub struct GroundLiteral {
          pub polarity: bool,
          pub atom: AtomIndex,
        }

        impl GroundLiteral {
          pub fn new(polarity: bool, atom: AtomIndex) -> Self {
            GroundLiteral { polarity, atom }
          }

          #[inline(always)]
          pub fn is_negated(&self) -> bool {
            !self.polarity
          }
        }

      }
    }
  };
}

define_predicate_kind!(
  static_kind,
  "Static predicates: value is constant across the problem; used only to prune bindings."
);
define_predicate_kind!(
  fluent_kind,
  "Fluent predicates: directly modified by action effects."
);
define_predicate_kind!(
  derived_kind,
  "Derived predicates: computed from a fixed point of axioms after each state change."
);

/// A tag identifying which of the three disjoint predicate populations a value belongs to,
/// used where code needs to branch on kind at a boundary (e.g. pretty-printers, the
/// stratification pass) without duplicating the branch three times via the macro above.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredicateKind {
  Static,
  Fluent,
  Derived,
}
