use async_graphql::dynamic::{FieldFuture, ResolverContext};
use infra::pagination::QueryOptions;
use infra::repos::{foods, FoodFilter};

use crate::gql::common::helpers::{int_arg, query_options, to_field_value};
use crate::gql::error::GqlError;
use crate::state::AppState;

pub fn get_all_food(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let opts = ctx.args.get("opts");
        let opts = query_options(opts.as_ref().map(|v| v.as_value()))?;

        let rows = foods::find_many(&state.db, FoodFilter::default(), opts)
            .await
            .map_err(GqlError::from)?;
        Ok(Some(to_field_value(&rows)?))
    })
}

pub fn get_food_by_id(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let id = int_arg(ctx.args.try_get("id")?.i64()?, "id")?;

        let row = foods::find_unique(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(|food| to_field_value(&food)).transpose()?)
    })
}

pub fn get_food_by_name(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let name = ctx.args.try_get("name")?.string()?.to_string();

        let filter = FoodFilter {
            name_contains: Some(name),
        };
        let rows = foods::find_many(&state.db, filter, QueryOptions::default())
            .await
            .map_err(GqlError::from)?;
        Ok(Some(to_field_value(&rows)?))
    })
}
