mod resolvers;
mod types;

use crate::gql::module::SchemaModule;

pub const MODULE_ID: &str = "category-module";

pub fn module() -> SchemaModule {
    SchemaModule::new(MODULE_ID)
        .with_type(types::category_type())
        .with_type(types::category_opts_input())
        .with_type(types::query_fields())
}
