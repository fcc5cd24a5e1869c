use juniper::{graphql_object, ID};

use crate::{db_interaction::get_meals_for_restaurant, models::{Meal, Restaurant, Rfid}};

use super::{error::{parse_id, to_id}, ApiError, Context};

#[graphql_object(context = Context)]
impl Restaurant {
    fn id(&self) -> ID {
        to_id(self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    // Falls back to this restaurant's id when no id is given
    async fn meals(&self, context: &Context, id: Option<ID>) -> Result<Vec<Meal>, ApiError> {
        let restaurant_id = match id {
            Some(id) => parse_id("id", &id)?,
            None => self.id
        };

        let conn = context.connection().await?;
        Ok(get_meals_for_restaurant(conn, restaurant_id).await?)
    }
}

#[graphql_object(context = Context)]
impl Rfid {
    fn id(&self) -> ID {
        to_id(self.id)
    }

    fn restaurant_id(&self) -> ID {
        to_id(self.restaurant_id)
    }

    fn uuid_rfid(&self) -> &str {
        &self.uuid_rfid
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[graphql_object(context = Context)]
impl Meal {
    fn id(&self) -> ID {
        to_id(self.id)
    }

    fn restaurant_id(&self) -> ID {
        to_id(self.restaurant_id)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> i32 {
        self.price
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn description(&self) -> &str {
        &self.description
    }
}
