use juniper::{graphql_object, GraphQLObject, ID};

use crate::{db_interaction::{insert_meal, insert_restaurant, insert_rfid}, domain::RequiredText, models::{Meal, NewMeal, NewRestaurant, NewRfid, Restaurant, Rfid}};

use super::{error::parse_id, ApiError, Context};

pub struct Mutation;

#[derive(GraphQLObject)]
#[graphql(context = Context)]
pub struct CreateRestaurantPayload{
    pub restaurant: Restaurant
}

#[derive(GraphQLObject)]
#[graphql(context = Context)]
pub struct CreateMealPayload{
    pub meal: Meal
}

#[derive(GraphQLObject)]
#[graphql(context = Context)]
pub struct CreateRfidPayload{
    pub rfid: Rfid
}

fn required(field: &str, value: String) -> Result<String, ApiError> {
    RequiredText::parse(field, value)
        .map(RequiredText::inner)
        .map_err(ApiError::Validation)
}

#[graphql_object(context = Context)]
impl Mutation {
    async fn create_restaurant(
        context: &Context,
        name: String,
        image: String,
        tag: String
    ) -> Result<CreateRestaurantPayload, ApiError> {
        let new_restaurant = NewRestaurant{
            name: required("name", name)?,
            image: required("image", image)?,
            tag: required("tag", tag)?
        };

        let conn = context.connection().await?;
        let restaurant = insert_restaurant(conn, new_restaurant).await?;

        tracing::info!(restaurant_id = restaurant.id, "Created restaurant");
        Ok(CreateRestaurantPayload{ restaurant })
    }

    async fn create_meal(
        context: &Context,
        name: String,
        price: i32,
        image: String,
        description: String,
        restaurant_id: ID
    ) -> Result<CreateMealPayload, ApiError> {
        let new_meal = NewMeal{
            restaurant_id: parse_id("restaurantId", &restaurant_id)?,
            name: required("name", name)?,
            price,
            image: required("image", image)?,
            description: required("description", description)?
        };

        let conn = context.connection().await?;
        let meal = insert_meal(conn, new_meal).await?;

        tracing::info!(meal_id = meal.id, restaurant_id = meal.restaurant_id, "Created meal");
        Ok(CreateMealPayload{ meal })
    }

    async fn create_rfid(
        context: &Context,
        uuid_rfid: String,
        label: String,
        restaurant_id: ID
    ) -> Result<CreateRfidPayload, ApiError> {
        let new_rfid = NewRfid{
            restaurant_id: parse_id("restaurantId", &restaurant_id)?,
            uuid_rfid: required("uuidRfid", uuid_rfid)?,
            label: required("label", label)?
        };

        let conn = context.connection().await?;
        let rfid = insert_rfid(conn, new_rfid).await?;

        tracing::info!(rfid_id = rfid.id, restaurant_id = rfid.restaurant_id, "Created rfid tag");
        Ok(CreateRfidPayload{ rfid })
    }
}
