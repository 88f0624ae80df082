use async_graphql::dynamic::TypeRef;

use super::resolvers;
use crate::gql::module::{FieldDef, TypeDef, QUERY};

/// Display metadata for one measurement field, looked up by `fieldName`.
pub fn unit_type() -> TypeDef {
    TypeDef::object("Unit")
        .field(FieldDef::new("id", TypeRef::named_nn(TypeRef::INT)))
        .field(FieldDef::new("fieldName", TypeRef::named_nn(TypeRef::STRING)))
        .field(FieldDef::new("unit", TypeRef::named_nn(TypeRef::STRING)))
        .field(FieldDef::new("labelPt", TypeRef::named_nn(TypeRef::STRING)))
        .field(FieldDef::new("infoodsTagname", TypeRef::named(TypeRef::STRING)))
        .field(FieldDef::new("systematicName", TypeRef::named(TypeRef::STRING)))
        .field(FieldDef::new("commonName", TypeRef::named(TypeRef::STRING)))
}

pub fn query_fields() -> TypeDef {
    TypeDef::extend(QUERY)
        .field(FieldDef::new("getUnits", TypeRef::named_list_nn("Unit")).resolve(resolvers::get_units))
        .field(
            FieldDef::new("getUnitByFieldName", TypeRef::named("Unit"))
                .argument("fieldName", TypeRef::named_nn(TypeRef::STRING))
                .resolve(resolvers::get_unit_by_field_name),
        )
}
