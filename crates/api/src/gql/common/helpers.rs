use async_graphql::dynamic::FieldValue;
use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Value};
use infra::pagination::QueryOptions;
use serde::Serialize;

use crate::gql::error::GqlError;
use crate::gql::resolve::into_field_value;

/// Convert a store record into a response value the structural resolvers
/// can walk.
pub fn to_graph_value<T: Serialize>(record: &T) -> Result<Value, GqlError> {
    Ok(Value::from_json(serde_json::to_value(record)?)?)
}

pub fn to_field_value<'a, T: Serialize>(record: &T) -> Result<FieldValue<'a>, GqlError> {
    to_graph_value(record).map(into_field_value)
}

/// `PrismaQueryOptions` argument. Absent or null means no window.
pub fn query_options(value: Option<&Value>) -> Result<QueryOptions, GqlError> {
    match value {
        None | Some(Value::Null) => Ok(QueryOptions::default()),
        Some(Value::Object(fields)) => Ok(QueryOptions::new(
            int_field(fields, "skip")?,
            int_field(fields, "take")?,
        )),
        Some(other) => Err(GqlError::new(format!(
            "Expected PrismaQueryOptions, found {other}"
        ))),
    }
}

/// `GetCategoryByIdOpts` argument: the window on each category's foods.
pub fn category_food_options(value: Option<&Value>) -> Result<QueryOptions, GqlError> {
    match value {
        None | Some(Value::Null) => Ok(QueryOptions::default()),
        Some(Value::Object(fields)) => query_options(fields.get(&Name::new("foodFilters"))),
        Some(other) => Err(GqlError::new(format!(
            "Expected GetCategoryByIdOpts, found {other}"
        ))),
    }
}

fn int_field(fields: &IndexMap<Name, Value>, name: &str) -> Result<Option<i64>, GqlError> {
    match fields.get(&Name::new(name)) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| GqlError::new(format!("`{name}` must be an integer"))),
        Some(other) => Err(GqlError::new(format!(
            "`{name}` must be an integer, found {other}"
        ))),
    }
}

pub fn int_arg(value: i64, name: &str) -> Result<i32, GqlError> {
    i32::try_from(value).map_err(|_| GqlError::new(format!("`{name}` is out of range")))
}

#[cfg(test)]
mod tests {
    use async_graphql::value;
    use infra::models::Unit;

    use super::*;

    #[test]
    fn absent_options_mean_no_window() {
        assert_eq!(query_options(None).unwrap(), QueryOptions::default());
        assert_eq!(query_options(Some(&Value::Null)).unwrap(), QueryOptions::default());
    }

    #[test]
    fn skip_and_take_are_forwarded_verbatim() {
        let opts = query_options(Some(&value!({ "skip": 2, "take": 3 }))).unwrap();
        assert_eq!(opts, QueryOptions::new(Some(2), Some(3)));

        let negative = query_options(Some(&value!({ "skip": -1 }))).unwrap();
        assert_eq!(negative, QueryOptions::new(Some(-1), None));
    }

    #[test]
    fn category_options_unwrap_food_filters() {
        let opts =
            category_food_options(Some(&value!({ "foodFilters": { "take": 5 } }))).unwrap();
        assert_eq!(opts, QueryOptions::new(None, Some(5)));

        let empty = category_food_options(Some(&value!({}))).unwrap();
        assert_eq!(empty, QueryOptions::default());
    }

    #[test]
    fn non_object_options_are_rejected() {
        assert!(query_options(Some(&value!(3))).is_err());
        assert!(query_options(Some(&value!({ "skip": "two" }))).is_err());
    }

    #[test]
    fn int_arg_rejects_values_outside_i32() {
        assert_eq!(int_arg(42, "id").unwrap(), 42);
        assert!(int_arg(i64::from(i32::MAX) + 1, "id").is_err());
    }

    #[test]
    fn records_become_graph_objects() {
        let unit = Unit {
            id: 2,
            field_name: "kcal".to_string(),
            unit: "kcal".to_string(),
            label_pt: "Energia".to_string(),
            infoods_tagname: None,
            systematic_name: None,
            common_name: None,
        };
        let value = to_graph_value(&unit).unwrap();
        assert_eq!(
            value,
            value!({
                "id": 2,
                "fieldName": "kcal",
                "unit": "kcal",
                "labelPt": "Energia",
                "infoodsTagname": null,
                "systematicName": null,
                "commonName": null
            })
        );
    }
}
