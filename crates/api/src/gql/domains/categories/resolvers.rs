use async_graphql::dynamic::{FieldFuture, ResolverContext};
use infra::repos::categories;

use crate::gql::common::helpers::{category_food_options, int_arg, to_field_value};
use crate::gql::error::GqlError;
use crate::state::AppState;

pub fn get_all_categories(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let opts = ctx.args.get("opts");
        let food_opts = category_food_options(opts.as_ref().map(|v| v.as_value()))?;

        let rows = categories::find_many(&state.db, food_opts)
            .await
            .map_err(GqlError::from)?;
        Ok(Some(to_field_value(&rows)?))
    })
}

pub fn get_category_by_id(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let state = ctx.data::<AppState>()?;
        let id = int_arg(ctx.args.try_get("id")?.i64()?, "id")?;
        let opts = ctx.args.get("opts");
        let food_opts = category_food_options(opts.as_ref().map(|v| v.as_value()))?;

        let row = categories::find_unique(&state.db, id, food_opts)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(|category| to_field_value(&category)).transpose()?)
    })
}
