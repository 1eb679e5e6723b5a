//! Reference authentication backend kept in memory.

mod seed;
mod store;

pub use seed::{DirectorySeed, SeedDaycare, SeedUser};
pub use store::InMemoryDirectory;
