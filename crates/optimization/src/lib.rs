//! Equilibrium price discovery.
//!
//! Enumerates candidate (stock price, flow price) combinations through a
//! pluggable search strategy, values each one deterministically and retains
//! the combinations that make conservation competitive with the conventional
//! land use benchmark.

pub mod equilibrium;
pub mod runner;
pub mod strategy;
pub mod summary;

pub use equilibrium::search_equilibrium_prices;
pub use runner::run_full_simulation;
pub use strategy::{GridSearch, SearchStrategy};
pub use summary::summarize;
