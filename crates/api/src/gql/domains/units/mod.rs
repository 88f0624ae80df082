mod resolvers;
mod types;

use crate::gql::module::SchemaModule;

pub const MODULE_ID: &str = "unit-module";

pub fn module() -> SchemaModule {
    SchemaModule::new(MODULE_ID)
        .with_type(types::query_fields())
        .with_type(types::unit_type())
}
