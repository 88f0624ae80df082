use async_graphql::dynamic::{FieldFuture, FieldValue, ResolverContext};
use async_graphql::{Name, Value};

/// Default resolver for fields without one: read the entry of the same name
/// from the parent object. Root resolvers return fully populated records, so
/// nested fields never go back to the store.
pub fn structural_field(
    field_name: String,
) -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone {
    let key = Name::new(field_name);
    move |ctx| {
        let key = key.clone();
        FieldFuture::new(async move {
            Ok(lookup(ctx.parent_value.as_value(), &key).map(into_field_value))
        })
    }
}

/// Lists become `FieldValue` lists so each element is resolved against the
/// field's item type.
pub fn into_field_value<'a>(value: Value) -> FieldValue<'a> {
    match value {
        Value::Null => FieldValue::NULL,
        Value::List(items) => FieldValue::list(items.into_iter().map(into_field_value)),
        other => FieldValue::value(other),
    }
}

/// An explicit `null` entry is no value at all, so a missing relation
/// resolves to `null` instead of an object of nulls.
fn lookup(parent: Option<&Value>, key: &Name) -> Option<Value> {
    match parent {
        Some(Value::Object(fields)) => fields
            .get(key)
            .filter(|value| !matches!(value, Value::Null))
            .cloned(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::value;

    use super::*;

    #[test]
    fn reads_entry_from_parent_object() {
        let parent = value!({ "id": 1, "category": { "id": 4, "name": "Frutas" } });
        assert_eq!(lookup(Some(&parent), &Name::new("id")), Some(value!(1)));
        assert_eq!(
            lookup(Some(&parent), &Name::new("category")),
            Some(value!({ "id": 4, "name": "Frutas" }))
        );
    }

    #[test]
    fn missing_entry_or_non_object_parent_is_null() {
        let parent = value!({ "id": 1 });
        assert_eq!(lookup(Some(&parent), &Name::new("nutrients")), None);
        assert_eq!(lookup(Some(&value!([1, 2])), &Name::new("id")), None);
        assert_eq!(lookup(None, &Name::new("id")), None);
    }

    #[test]
    fn null_entry_yields_no_value() {
        let parent = value!({ "id": 1, "nutrients": null, "aminoAcids": null });
        assert_eq!(lookup(Some(&parent), &Name::new("nutrients")), None);
        assert_eq!(lookup(Some(&parent), &Name::new("aminoAcids")), None);
    }
}
