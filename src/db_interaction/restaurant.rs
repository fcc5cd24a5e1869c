use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, QueryResult, RunQueryDsl, SelectableHelper, SqliteConnection};
use thiserror::Error;

use crate::{domain::{Page, PageRequest}, models::{NewRestaurant, Restaurant}, schema::restaurants, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

#[tracing::instrument(
    "Getting restaurants from db",
    skip(conn)
)]
pub async fn list_restaurants(
    mut conn: DbConnection,
    request: PageRequest
) -> Result<Page<Restaurant>, anyhow::Error>{

    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let total = restaurants::table
                .count()
                .get_result::<i64>(conn)
                .context("Failed to count restaurants")?;

            let window = request.window(total);

            let items = restaurants::table
                .order(restaurants::id.asc())
                .limit(window.limit())
                .offset(window.start)
                .select(Restaurant::as_select())
                .load::<Restaurant>(conn)
                .context("Failed to get restaurants")?;

            Ok(Page::new(items, window, total))
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting restaurant by id",
    skip(conn)
)]
pub async fn get_restaurant_by_id(
    mut conn: DbConnection,
    restaurant_id: i32
) -> Result<Option<Restaurant>, anyhow::Error>{

    let res = spawn_blocking_with_tracing(move || {
        restaurants::table
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first::<Restaurant>(&mut conn)
            .optional()
            .context("Failed to get restaurant")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// Used by child inserts to check the reference inside their own transaction
pub fn restaurant_exists(
    conn: &mut SqliteConnection,
    restaurant_id: i32
) -> QueryResult<bool>{
    diesel::select(diesel::dsl::exists(
        restaurants::table.filter(restaurants::id.eq(restaurant_id))
    ))
    .get_result::<bool>(conn)
}

#[derive(Error)]
pub enum RestaurantInsertError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to insert into restaurants table")]
    InsertError(#[from] diesel::result::Error)
}

impl Debug for RestaurantInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Insert a restaurant to db",
    skip(conn)
)]
pub async fn insert_restaurant(
    mut conn: DbConnection,
    new_restaurant: NewRestaurant
) -> Result<Restaurant, RestaurantInsertError> {

    let restaurant = spawn_blocking_with_tracing(move || {
        diesel::insert_into(
            restaurants::table
        )
        .values(&new_restaurant)
        .returning(Restaurant::as_returning())
        .get_result::<Restaurant>(&mut conn)
    })
    .await??;

    Ok(restaurant)
}
