use async_graphql::dynamic::TypeRef;

use crate::gql::module::{FieldDef, SchemaModule, TypeDef};

pub const MODULE_ID: &str = "fatty-acid-module";

// Carbon count and double bonds, e.g. eighteenTwoN6 is 18:2 n-6.
const MEASUREMENTS: &[&str] = &[
    "twelveZero",
    "fourteenZero",
    "fourteenOne",
    "sixteenZero",
    "sixteenOne",
    "eighteenZero",
    "eighteenOne",
    "eighteenOneT",
    "eighteenTwoN6",
    "eighteenTwoT",
    "eighteenThreeN3",
    "twentyZero",
    "twentyOne",
    "twentyFour",
    "twentyFive",
    "twentyTwoZero",
    "twentyTwoFive",
    "twentyTwoSix",
    "twentyFourZero",
];

pub fn module() -> SchemaModule {
    SchemaModule::new(MODULE_ID).with_type(
        TypeDef::object("FattyAcid")
            .field(FieldDef::new("saturated", TypeRef::named_nn(TypeRef::FLOAT)))
            .field(FieldDef::new("monounsaturated", TypeRef::named_nn(TypeRef::FLOAT)))
            .field(FieldDef::new("polyunsaturated", TypeRef::named_nn(TypeRef::FLOAT)))
            .float_fields(MEASUREMENTS),
    )
}
