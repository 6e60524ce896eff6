/*!

An `Index` identifies an interned object within its kind-specific repository. Zero is a valid
index; there is no sentinel "null" index anywhere in this crate — optionality is always carried
explicitly as `Option<Index>`.

Indices from different repositories (an `Object` index and a `State` index, say) have the same
representation but different *meaning*; wrapping them in the same newtype (rather than a bare
`u32`) at least prevents them from being silently compared across unrelated `Vec`s, since each
call site names the repository it indexes into.

*/

use std::fmt::{Debug, Display, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Index(pub(crate) u32);

impl Index {
  #[inline(always)]
  pub const fn new(value: u32) -> Self {
    Index(value)
  }

  #[inline(always)]
  pub const fn value(self) -> u32 {
    self.0
  }

  #[inline(always)]
  pub const fn as_usize(self) -> usize {
    self.0 as usize
  }
}

impl From<u32> for Index {
  fn from(value: u32) -> Self {
    Index(value)
  }
}

impl From<usize> for Index {
  fn from(value: usize) -> Self {
    Index(value as u32)
  }
}

impl Debug for Index {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

impl Display for Index {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.0, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_is_a_valid_index() {
    let idx = Index::new(0);
    assert_eq!(idx.value(), 0);
  }
}
