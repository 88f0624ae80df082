use async_graphql::dynamic::TypeRef;

use crate::gql::module::{FieldDef, SchemaModule, TypeDef, QUERY};

pub const MODULE_ID: &str = "main-module";

/// Base module: the empty root `Query` every other module extends, plus the
/// shared windowing input.
pub fn module() -> SchemaModule {
    SchemaModule::new(MODULE_ID)
        .with_type(
            TypeDef::input("PrismaQueryOptions")
                .field(FieldDef::new("skip", TypeRef::named(TypeRef::INT)))
                .field(FieldDef::new("take", TypeRef::named(TypeRef::INT))),
        )
        .with_type(TypeDef::object(QUERY))
}
