/*!

A planning state (spec §4.6, §4.7): `State` is the flat fluent/derived bitset pair, and
`StateRepository` is the single owner that builds, dedups, and evolves them.

*/

pub mod state;
pub mod state_repository;

pub use state::{State, StateIndex};
pub use state_repository::StateRepository;
