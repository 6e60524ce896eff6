/*!

The interning layer: `Interner<K, T>` is the generic hash-consing arena; `Repositories` bundles
one per node type a problem needs, plus the canonicalization helpers commutative constructors
require before every hash probe (spec §4.1).

*/

pub mod interner;
pub mod repositories;

pub use interner::Interner;
pub use repositories::{sort_conditional_effects, sort_literals_by_atom, sort_operands_by_index, Repositories};
