#![allow(unused)]
/*!

Types/type aliases that abstract over the implementing backing type.

# Background and Motivation

A motivating example is the `IString` type, an interned string type. A number of external crates
could provide this functionality. This module redirects to whatever chosen implementation we
want. To use the [`string_cache` crate](https://crates.io/crates/string_cache), we just define
`IString` as an alias for `string_cache::DefaultAtom`:

```ignore
pub use string_cache::DefaultAtom as IString;
```

For types or infrastructure with very different backing implementations, we define an
abstraction layer over the implementation. The `log` module could use any of a number of logging
frameworks; its (crate) public interface consists only of `set_global_logging_threshold()`/
`get_global_logging_threshold()` and the macros `critical!`, `error!`, `warning!`, `info!`,
`debug!`, and `trace!`. The (private) backing implementation is encapsulated in the `log` module.

*/

mod string_join;
mod bitset;
mod index;
pub mod error;

use std::collections::{HashMap as StdHashMap, HashSet as StdHashSet};

// Logging
pub mod log;

/// Interned string. Use `DefaultAtom` for a global cache usable across threads.
pub use string_cache::DefaultAtom as IString;

pub use bitset::Bitset;
pub use index::Index;

// Join sequences with a separator
pub use string_join::{join_string, join_iter};

/// A `Set<T>` is a hash set. This replaces the `PointerSet` idiom the underlying domain model
/// uses in other languages: since every `T` we put in a `Set` here is a value type carrying an
/// `Index`, set membership already is identity comparison.
pub type Set<T> = StdHashSet<T>;

/// A `HashMap` alias so the rest of the crate has one spelling to change if we ever want a
/// faster hasher.
pub type HashMap<K, V> = StdHashMap<K, V>;
