use async_graphql::dynamic::{FieldFuture, ResolverContext};
use infra::repos::{units, UnitFilter};

use crate::gql::common::helpers::to_field_value;
use crate::gql::error::GqlError;
use crate::state::AppState;

pub fn get_units(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let rows = units::find_many(&state.db).await.map_err(GqlError::from)?;
        Ok(Some(to_field_value(&rows)?))
    })
}

pub fn get_unit_by_field_name(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let field_name = ctx.args.try_get("fieldName")?.string()?.to_string();

        let filter = UnitFilter {
            field_name: Some(field_name),
        };
        let row = units::find_first(&state.db, filter)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(|unit| to_field_value(&unit)).transpose()?)
    })
}
