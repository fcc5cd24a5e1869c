use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{domain::{Page, PageRequest}, models::{Meal, NewMeal}, schema::meals, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

use super::restaurant_exists;

#[tracing::instrument(
    "Getting meals from db",
    skip(conn)
)]
pub async fn list_meals(
    mut conn: DbConnection,
    request: PageRequest
) -> Result<Page<Meal>, anyhow::Error>{

    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let total = meals::table
                .count()
                .get_result::<i64>(conn)
                .context("Failed to count meals")?;

            let window = request.window(total);

            let items = meals::table
                .order(meals::id.asc())
                .limit(window.limit())
                .offset(window.start)
                .select(Meal::as_select())
                .load::<Meal>(conn)
                .context("Failed to get meals")?;

            Ok(Page::new(items, window, total))
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting meal by id",
    skip(conn)
)]
pub async fn get_meal_by_id(
    mut conn: DbConnection,
    meal_id: i32
) -> Result<Option<Meal>, anyhow::Error>{

    let res = spawn_blocking_with_tracing(move || {
        meals::table
            .find(meal_id)
            .select(Meal::as_select())
            .first::<Meal>(&mut conn)
            .optional()
            .context("Failed to get meal")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting meals of a restaurant",
    skip(conn)
)]
pub async fn get_meals_for_restaurant(
    mut conn: DbConnection,
    restaurant_id: i32
) -> Result<Vec<Meal>, anyhow::Error>{

    let res = spawn_blocking_with_tracing(move || {
        meals::table
            .filter(meals::restaurant_id.eq(restaurant_id))
            .order(meals::id.asc())
            .select(Meal::as_select())
            .load::<Meal>(&mut conn)
            .context("Failed to get meals of restaurant")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[derive(Error)]
pub enum MealInsertError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("restaurant_id: {0} doesn't exist")]
    RestaurantNotFound(i32)
}

impl Debug for MealInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Insert a meal to db",
    skip(conn)
)]
pub async fn insert_meal(
    mut conn: DbConnection,
    new_meal: NewMeal
) -> Result<Meal, MealInsertError> {

    let meal = spawn_blocking_with_tracing(move || {
        conn.immediate_transaction::<Meal, MealInsertError, _>(|conn| {
            if !restaurant_exists(conn, new_meal.restaurant_id)? {
                return Err(MealInsertError::RestaurantNotFound(new_meal.restaurant_id))
            }

            let meal = diesel::insert_into(meals::table)
                .values(&new_meal)
                .returning(Meal::as_returning())
                .get_result::<Meal>(conn)?;

            Ok(meal)
        })
    })
    .await??;

    Ok(meal)
}
