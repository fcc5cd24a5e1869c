use juniper::{graphql_object, ID};

use crate::{db_interaction::{get_meal_by_id, get_restaurant_by_id, list_meals, list_restaurants, list_rfids}, domain::PageRequest, models::{Meal, Restaurant}};

use super::{connection::{MealConnection, RestaurantConnection, RfidConnection}, error::parse_id, ApiError, Context};

pub struct Query;

fn page_request(
    first: Option<i32>,
    after: Option<String>,
    last: Option<i32>,
    before: Option<String>
) -> Result<PageRequest, ApiError> {
    PageRequest::parse(first, after, last, before).map_err(ApiError::Validation)
}

#[graphql_object(context = Context)]
impl Query {
    async fn all_restaurants(
        context: &Context,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>
    ) -> Result<RestaurantConnection, ApiError> {
        let request = page_request(first, after, last, before)?;
        let conn = context.connection().await?;

        Ok(list_restaurants(conn, request).await?.into())
    }

    async fn all_rfid_tags(
        context: &Context,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>
    ) -> Result<RfidConnection, ApiError> {
        let request = page_request(first, after, last, before)?;
        let conn = context.connection().await?;

        Ok(list_rfids(conn, request).await?.into())
    }

    async fn all_meals(
        context: &Context,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>
    ) -> Result<MealConnection, ApiError> {
        let request = page_request(first, after, last, before)?;
        let conn = context.connection().await?;

        Ok(list_meals(conn, request).await?.into())
    }

    async fn restaurant(context: &Context, id: ID) -> Result<Option<Restaurant>, ApiError> {
        let restaurant_id = parse_id("id", &id)?;
        let conn = context.connection().await?;

        Ok(get_restaurant_by_id(conn, restaurant_id).await?)
    }

    async fn meal(context: &Context, id: ID) -> Result<Option<Meal>, ApiError> {
        let meal_id = parse_id("id", &id)?;
        let conn = context.connection().await?;

        Ok(get_meal_by_id(conn, meal_id).await?)
    }
}
