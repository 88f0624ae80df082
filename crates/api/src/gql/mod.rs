pub mod common;
pub mod domains;
pub mod error;
pub mod module;
pub mod registry;
pub mod resolve;
pub mod schema;

pub use error::{CompositionError, GqlError};
pub use module::{FieldDef, SchemaModule, TypeDef};
pub use registry::{ComposedGraph, ModuleRegistry};
pub use schema::{build_schema, compose, modules, FoodSchema};
