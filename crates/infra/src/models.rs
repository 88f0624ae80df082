//! Store records as handed to the graph layer.
//!
//! Rows deserialize from the snake_case column names Postgres emits and
//! serialize with the camelCase field names the graph exposes, so a record can
//! be turned into a response value without a second mapping.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Only populated when the query includes the category's foods.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<Food>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Food {
    pub id: i32,
    pub name: String,
    pub category: Category,
    pub amino_acids: Option<AminoAcid>,
    pub fatty_acids: Option<FattyAcid>,
    pub nutrients: Option<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Nutrient {
    pub moisture: Option<f64>,
    pub kcal: Option<f64>,
    #[serde(rename(serialize = "kJ"))]
    pub kj: Option<f64>,
    pub protein: Option<f64>,
    pub lipids: Option<f64>,
    pub cholesterol: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub dietary_fiber: Option<f64>,
    pub ash: Option<f64>,
    pub calcium: Option<f64>,
    pub magnesium: Option<f64>,
    pub manganese: Option<f64>,
    pub phosphorus: Option<f64>,
    pub iron: Option<f64>,
    pub sodium: Option<f64>,
    pub potassium: Option<f64>,
    pub copper: Option<f64>,
    pub zinc: Option<f64>,
    pub retinol: Option<f64>,
    pub re: Option<f64>,
    pub rae: Option<f64>,
    pub thiamin: Option<f64>,
    pub riboflavin: Option<f64>,
    pub pyridoxine: Option<f64>,
    pub niacin: Option<f64>,
    pub vitamin_c: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AminoAcid {
    pub id: i32,
    pub tryptophan: Option<f64>,
    pub threonine: Option<f64>,
    pub isoleucine: Option<f64>,
    pub leucine: Option<f64>,
    pub lysine: Option<f64>,
    pub methionine: Option<f64>,
    pub cystine: Option<f64>,
    pub phenylalanine: Option<f64>,
    pub tyrosine: Option<f64>,
    pub valine: Option<f64>,
    pub arginine: Option<f64>,
    pub histidine: Option<f64>,
    pub alanine: Option<f64>,
    pub aspartic_acid: Option<f64>,
    pub glutamic_acid: Option<f64>,
    pub glycine: Option<f64>,
    pub proline: Option<f64>,
    pub serine: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FattyAcid {
    pub saturated: f64,
    pub monounsaturated: f64,
    pub polyunsaturated: f64,
    pub twelve_zero: Option<f64>,
    pub fourteen_zero: Option<f64>,
    pub fourteen_one: Option<f64>,
    pub sixteen_zero: Option<f64>,
    pub sixteen_one: Option<f64>,
    pub eighteen_zero: Option<f64>,
    pub eighteen_one: Option<f64>,
    pub eighteen_one_t: Option<f64>,
    pub eighteen_two_n6: Option<f64>,
    pub eighteen_two_t: Option<f64>,
    pub eighteen_three_n3: Option<f64>,
    pub twenty_zero: Option<f64>,
    pub twenty_one: Option<f64>,
    pub twenty_four: Option<f64>,
    pub twenty_five: Option<f64>,
    pub twenty_two_zero: Option<f64>,
    pub twenty_two_five: Option<f64>,
    pub twenty_two_six: Option<f64>,
    pub twenty_four_zero: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Unit {
    pub id: i32,
    pub field_name: String,
    pub unit: String,
    pub label_pt: String,
    pub infoods_tagname: Option<String>,
    pub systematic_name: Option<String>,
    pub common_name: Option<String>,
}
