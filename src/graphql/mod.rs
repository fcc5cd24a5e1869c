mod connection;
mod error;
mod mutation;
mod objects;
mod query;

use juniper::{EmptySubscription, RootNode};

use crate::utils::{get_pooled_connection, DbConnection, DbPool};

pub use connection::{MealConnection, MealEdge, PageInfo, RestaurantConnection, RestaurantEdge, RfidConnection, RfidEdge};
pub use error::ApiError;
pub use mutation::{CreateMealPayload, CreateRestaurantPayload, CreateRfidPayload, Mutation};
pub use query::Query;

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

#[derive(Clone)]
pub struct Context{
    pool: DbPool
}

impl Context {
    pub fn new(pool: DbPool) -> Self {
        Context{ pool }
    }

    // The connection goes back to the pool when the caller drops it
    pub async fn connection(&self) -> Result<DbConnection, ApiError> {
        Ok(get_pooled_connection(&self.pool).await?)
    }
}

impl juniper::Context for Context {}
