/*!

A generic hash-consing arena: given a value built from already-canonical children, return the
stable index of its unique representative, allocating on first sight (spec §4.1). Equality must
be structural over children alone — several interned node types (`Atom`, `Function`, ...) carry
their own `index` field for convenience, which must never participate in the hash-probe key, or
two content-equal nodes constructed at different times would fail to collide. `Interner<K, T>`
therefore keeps the probe key `K` (the children) separate from the stored value `T` (which may
embed its own assigned index); the value itself is built lazily from the index the interner
assigns it.

*/

use std::hash::Hash;

use crate::abstractions::{error::LookupError, HashMap, Index};

#[derive(Clone, Debug)]
pub struct Interner<K, T> {
  storage: Vec<T>,
  canonical: HashMap<K, Index>,
}

impl<K, T> Interner<K, T>
where
  K: Eq + Hash,
{
  pub fn new() -> Self {
    Interner { storage: Vec::new(), canonical: HashMap::new() }
  }

  /// Idempotent and total (spec §9.1 interning-idempotence invariant): a repeated call with an
  /// equal `key` returns the same index every time, and `build` is invoked only on first sight.
  pub fn get_or_create(&mut self, key: K, build: impl FnOnce(Index) -> T) -> Index {
    if let Some(index) = self.canonical.get(&key) {
      return *index;
    }
    let index = Index::from(self.storage.len());
    self.storage.push(build(index));
    self.canonical.insert(key, index);
    index
  }

  pub fn get_by_index(&self, index: Index) -> Result<&T, LookupError> {
    self.storage.get(index.as_usize()).ok_or(LookupError::OutOfRange { kind: std::any::type_name::<T>(), index })
  }

  pub fn len(&self) -> usize {
    self.storage.len()
  }

  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.storage.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.storage
  }
}

impl<K, T> Default for Interner<K, T>
where
  K: Eq + Hash,
{
  fn default() -> Self {
    Self::new()
  }
}

/// Convenience for node types with no embedded index of their own (e.g. `FunctionExpression`),
/// where the value itself is a valid probe key.
impl<T> Interner<T, T>
where
  T: Eq + Hash + Clone,
{
  pub fn get_or_create_value(&mut self, value: T) -> Index {
    self.get_or_create(value.clone(), move |_index| value)
  }
}
