/*!

A dense sequential container storing group-tagged items contiguously, together with an
auxiliary offset array so that each group is retrievable as a contiguous slice in O(1).

Modeled on `mimir`'s `IndexGroupedVector<T>` (`common/grouped_vector.hpp` in the original
implementation this crate's specification was distilled from): a vector `V` of length `N`
plus an offset array `B` of length `G + 1`, where group `g` occupies `V[B[g] .. B[g + 1]]`.

# Example

```
use mimir::core::grouped_vector::GroupedVec;

// vec = [(0,2),(0,2),(2,0),(2,3)], retriever = first coordinate, num_groups = 4
let input = vec![(0, 2), (0, 2), (2, 0), (2, 3)];
let grouped = GroupedVec::from_sorted(
  input,
  |l: &(i32, i32), r: &(i32, i32)| l.0 != r.0,
  |x: &(i32, i32)| x.0 as usize,
  4,
).unwrap();

assert_eq!(grouped.group(0).len(), 2);
assert!(grouped.group(1).is_empty());
assert_eq!(grouped.group(2).len(), 2);
assert!(grouped.group(3).is_empty());
```

*/

use crate::abstractions::error::BindingError;

#[derive(Clone, Debug, Default)]
pub struct GroupedVec<T> {
  data: Vec<T>,
  // Length num_groups + 1; group g occupies data[groups_begin[g]..groups_begin[g + 1]].
  groups_begin: Vec<usize>,
}

impl<T> GroupedVec<T> {
  /// Construct from a vector that is already sorted by group id, given a group-boundary
  /// predicate over adjacent elements (`true` iff the pair straddles a group boundary) and a
  /// function retrieving an element's group index. Group ids skipped entirely get an empty
  /// slice. An out-of-order group id (an element whose group index is less than the group
  /// already closed) is a fatal construction error.
  pub fn from_sorted<B, R>(
    data: Vec<T>,
    is_group_boundary: B,
    group_index_of: R,
    num_groups: usize,
  ) -> Result<Self, BindingError>
  where
    B: Fn(&T, &T) -> bool,
    R: Fn(&T) -> usize,
  {
    let mut groups_begin = Vec::with_capacity(num_groups + 1);

    if !data.is_empty() {
      // Write begin of skipped groups + begin of the first occupied group.
      while groups_begin.len() <= group_index_of(&data[0]) {
        Self::range_check(groups_begin.len(), num_groups)?;
        groups_begin.push(0);
      }

      for i in 1..data.len() {
        let cur_group = groups_begin.len() - 1;
        let this_group = group_index_of(&data[i]);
        if cur_group > this_group {
          return Err(BindingError::UnsortedGroupInput { position: i });
        }

        if is_group_boundary(&data[i - 1], &data[i]) {
          // Write begin of skipped groups + begin of the newly-opened group.
          while groups_begin.len() <= this_group {
            Self::range_check(groups_begin.len(), num_groups)?;
            groups_begin.push(i);
          }
        }
      }
    }

    Self::range_check(groups_begin.len(), num_groups)?;
    while groups_begin.len() <= num_groups {
      groups_begin.push(data.len());
    }

    Ok(GroupedVec { data, groups_begin })
  }

  fn range_check(cur_num_groups: usize, num_groups: usize) -> Result<(), BindingError> {
    if cur_num_groups > num_groups {
      return Err(BindingError::GroupIndexOutOfBounds { group_id: cur_num_groups, num_groups });
    }
    Ok(())
  }

  /// The group at index `pos`, or an empty slice if `pos` is a skipped group that still
  /// falls within `0..num_groups()`.
  #[inline]
  pub fn group(&self, pos: usize) -> &[T] {
    &self.data[self.groups_begin[pos]..self.groups_begin[pos + 1]]
  }

  #[inline]
  pub fn num_groups(&self) -> usize {
    self.groups_begin.len().saturating_sub(1)
  }

  #[inline]
  pub fn data(&self) -> &[T] {
    &self.data
  }

  /// Iterate groups in ascending group-index order.
  pub fn iter(&self) -> impl Iterator<Item = &[T]> {
    (0..self.num_groups()).map(move |g| self.group(g))
  }
}

/// Builds a `GroupedVec` incrementally: `start_group()` closes the previous group (if any)
/// and opens a new one; `add_element()` appends into the currently open group.
#[derive(Clone, Debug, Default)]
pub struct GroupedVecBuilder<T> {
  data: Vec<T>,
  groups_begin: Vec<usize>,
}

impl<T> GroupedVecBuilder<T> {
  pub fn new() -> Self {
    GroupedVecBuilder { data: Vec::new(), groups_begin: Vec::new() }
  }

  /// Opens a new group at the current end of the data vector, returning that offset.
  pub fn start_group(&mut self) -> usize {
    self.groups_begin.push(self.data.len());
    self.data.len()
  }

  pub fn add_element(&mut self, element: T) {
    self.data.push(element);
  }

  pub fn clear(&mut self) {
    self.data.clear();
    self.groups_begin.clear();
  }

  pub fn build(mut self) -> GroupedVec<T> {
    self.groups_begin.push(self.data.len());
    GroupedVec { data: self.data, groups_begin: self.groups_begin }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grouped_vector_from_sorted_skips_empty_groups() {
    // spec.md §8 property (v): [(0,2),(0,2),(2,0),(2,3)] grouped by first coordinate,
    // num_groups = 4, must produce g0 = 2 elements, g1 = empty, g2 = 2 elements, g3 = empty.
    let input = vec![(0, 2), (0, 2), (2, 0), (2, 3)];
    let grouped = GroupedVec::from_sorted(
      input,
      |l: &(i32, i32), r: &(i32, i32)| l.0 != r.0,
      |x: &(i32, i32)| x.0 as usize,
      4,
    )
    .unwrap();

    assert_eq!(grouped.num_groups(), 4);
    assert_eq!(grouped.group(0), &[(0, 2), (0, 2)]);
    assert!(grouped.group(1).is_empty());
    assert_eq!(grouped.group(2), &[(2, 0), (2, 3)]);
    assert!(grouped.group(3).is_empty());
  }

  #[test]
  fn grouped_vector_concatenation_reproduces_input() {
    let input = vec![(0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];
    let grouped = GroupedVec::from_sorted(
      input.clone(),
      |l: &(i32, i32), r: &(i32, i32)| l.0 != r.0,
      |x: &(i32, i32)| x.0 as usize,
      2,
    )
    .unwrap();

    let reconstructed: Vec<_> = grouped.iter().flatten().cloned().collect();
    assert_eq!(reconstructed, input);
  }

  #[test]
  fn grouped_vector_rejects_out_of_order_group_ids() {
    let input = vec![(2, 0), (0, 1)];
    let result = GroupedVec::from_sorted(
      input,
      |l: &(i32, i32), r: &(i32, i32)| l.0 != r.0,
      |x: &(i32, i32)| x.0 as usize,
      3,
    );
    assert!(matches!(result, Err(BindingError::UnsortedGroupInput { .. })));
  }

  #[test]
  fn incremental_builder_round_trip() {
    let mut builder = GroupedVecBuilder::new();
    builder.start_group();
    builder.add_element(10);
    builder.add_element(11);
    builder.start_group();
    builder.start_group();
    builder.add_element(30);

    let grouped = builder.build();
    assert_eq!(grouped.num_groups(), 3);
    assert_eq!(grouped.group(0), &[10, 11]);
    assert!(grouped.group(1).is_empty());
    assert_eq!(grouped.group(2), &[30]);
  }
}
