// Each domain is one schema module: mod.rs builds it, types.rs holds the
// type declarations and resolvers.rs the root query resolvers.

pub mod amino_acids;
pub mod categories;
pub mod fatty_acids;
pub mod foods;
pub mod main;
pub mod nutrients;
pub mod units;
