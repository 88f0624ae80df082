use async_graphql::dynamic::Schema;

use super::domains::{amino_acids, categories, fatty_acids, foods, main, nutrients, units};
use super::error::CompositionError;
use super::module::SchemaModule;
use super::registry::{ComposedGraph, ModuleRegistry};
use crate::state::AppState;

pub type FoodSchema = Schema;

/// Every module of the graph, in registration order.
pub fn modules() -> Vec<SchemaModule> {
    vec![
        main::module(),
        units::module(),
        foods::module(),
        categories::module(),
        amino_acids::module(),
        fatty_acids::module(),
        nutrients::module(),
    ]
}

pub fn compose(modules: Vec<SchemaModule>) -> Result<ComposedGraph, CompositionError> {
    ModuleRegistry::from_modules(modules)?.compose()
}

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> Result<FoodSchema, CompositionError> {
    let config = state.config();
    let introspection_enabled = config.introspection;
    let max_depth = config.max_depth;
    let max_complexity = config.max_complexity;

    let mut builder = compose(modules())?
        .into_builder()
        .data(state); // available in resolvers via ctx.data::<AppState>()

    if let Some(depth) = max_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = max_complexity {
        builder = builder.limit_complexity(complexity);
    }
    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    Ok(builder.finish()?)
}
