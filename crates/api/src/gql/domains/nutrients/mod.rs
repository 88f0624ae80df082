use crate::gql::module::{SchemaModule, TypeDef};

pub const MODULE_ID: &str = "nutrient-module";

const MEASUREMENTS: &[&str] = &[
    "moisture",
    "kcal",
    "kJ",
    "protein",
    "lipids",
    "cholesterol",
    "carbohydrates",
    "dietaryFiber",
    "ash",
    "calcium",
    "magnesium",
    "manganese",
    "phosphorus",
    "iron",
    "sodium",
    "potassium",
    "copper",
    "zinc",
    "retinol",
    "re",
    "rae",
    "thiamin",
    "riboflavin",
    "pyridoxine",
    "niacin",
    "vitaminC",
];

pub fn module() -> SchemaModule {
    SchemaModule::new(MODULE_ID).with_type(TypeDef::object("Nutrient").float_fields(MEASUREMENTS))
}
