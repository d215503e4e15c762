//! Profile API adapters.

mod in_memory;

pub use in_memory::InMemoryProfileApi;
