use async_graphql::dynamic::TypeRef;

use super::resolvers;
use crate::gql::module::{FieldDef, TypeDef, QUERY};

/// `Category`, `AminoAcid`, `FattyAcid` and `Nutrient` are declared by their
/// own modules.
pub fn food_type() -> TypeDef {
    TypeDef::object("Food")
        .field(FieldDef::new("id", TypeRef::named_nn(TypeRef::INT)))
        .field(FieldDef::new("name", TypeRef::named_nn(TypeRef::STRING)))
        .field(FieldDef::new("category", TypeRef::named_nn("Category")))
        .field(FieldDef::new("aminoAcids", TypeRef::named("AminoAcid")))
        .field(FieldDef::new("fattyAcids", TypeRef::named("FattyAcid")))
        .field(FieldDef::new("nutrients", TypeRef::named("Nutrient")))
}

pub fn query_fields() -> TypeDef {
    TypeDef::extend(QUERY)
        .field(
            FieldDef::new("getAllFood", TypeRef::named_list_nn("Food"))
                .argument("opts", TypeRef::named("PrismaQueryOptions"))
                .resolve(resolvers::get_all_food),
        )
        .field(
            FieldDef::new("getFoodById", TypeRef::named("Food"))
                .argument("id", TypeRef::named_nn(TypeRef::INT))
                .resolve(resolvers::get_food_by_id),
        )
        .field(
            FieldDef::new("getFoodByName", TypeRef::named_list_nn("Food"))
                .argument("name", TypeRef::named_nn(TypeRef::STRING))
                .description("Foods whose name contains `name` (case-sensitive).")
                .resolve(resolvers::get_food_by_name),
        )
}
