use async_graphql::dynamic::TypeRef;

use super::resolvers;
use crate::gql::module::{FieldDef, TypeDef, QUERY};

/// `foods` is only populated by the category queries; a category reached
/// through `Food.category` carries no foods.
pub fn category_type() -> TypeDef {
    TypeDef::object("Category")
        .field(FieldDef::new("id", TypeRef::named_nn(TypeRef::INT)))
        .field(FieldDef::new("name", TypeRef::named_nn(TypeRef::STRING)))
        .field(FieldDef::new("foods", TypeRef::named_list_nn("Food")))
}

pub fn category_opts_input() -> TypeDef {
    TypeDef::input("GetCategoryByIdOpts")
        .field(FieldDef::new("foodFilters", TypeRef::named("PrismaQueryOptions")))
}

pub fn query_fields() -> TypeDef {
    TypeDef::extend(QUERY)
        .field(
            FieldDef::new("getAllCategories", TypeRef::named_list_nn("Category"))
                .argument("opts", TypeRef::named("GetCategoryByIdOpts"))
                .resolve(resolvers::get_all_categories),
        )
        .field(
            FieldDef::new("getCategoryById", TypeRef::named("Category"))
                .argument("id", TypeRef::named_nn(TypeRef::INT))
                .argument("opts", TypeRef::named("GetCategoryByIdOpts"))
                .resolve(resolvers::get_category_by_id),
        )
}
