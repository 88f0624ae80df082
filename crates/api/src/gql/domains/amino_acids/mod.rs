use async_graphql::dynamic::TypeRef;

use crate::gql::module::{FieldDef, SchemaModule, TypeDef};

pub const MODULE_ID: &str = "amino-acid-module";

const MEASUREMENTS: &[&str] = &[
    "tryptophan",
    "threonine",
    "isoleucine",
    "leucine",
    "lysine",
    "methionine",
    "cystine",
    "phenylalanine",
    "tyrosine",
    "valine",
    "arginine",
    "histidine",
    "alanine",
    "asparticAcid",
    "glutamicAcid",
    "glycine",
    "proline",
    "serine",
];

pub fn module() -> SchemaModule {
    SchemaModule::new(MODULE_ID).with_type(
        TypeDef::object("AminoAcid")
            .field(FieldDef::new("id", TypeRef::named_nn(TypeRef::INT)))
            .float_fields(MEASUREMENTS),
    )
}
