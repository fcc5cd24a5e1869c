use std::{error::Error, fmt::Debug};

use juniper::{graphql_value, FieldError, IntoFieldError, ScalarValue, ID};
use thiserror::Error;

use crate::{db_interaction::{MealInsertError, RestaurantInsertError, RfidInsertError}, utils::{error_fmt_chain, PoolGetError}};

// Storage failures are logged in full and reported with an opaque message
#[derive(Error)]
pub enum ApiError{
    #[error("{0}")]
    Validation(String),
    #[error("{entity} with id {id} does not exist")]
    NotFound{
        entity: &'static str,
        id: i32
    },
    #[error("Internal storage error")]
    Storage(#[source] anyhow::Error)
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl<S: ScalarValue> IntoFieldError<S> for ApiError {
    fn into_field_error(self) -> FieldError<S> {
        let extensions = match &self {
            ApiError::Validation(_) => graphql_value!({ "code": "VALIDATION" }),
            ApiError::NotFound { .. } => graphql_value!({ "code": "NOT_FOUND" }),
            ApiError::Storage(_) => {
                tracing::error!(error = ?self, "Failed to resolve field");
                graphql_value!({ "code": "INTERNAL" })
            }
        };

        FieldError::new(self, extensions)
    }
}

impl From<PoolGetError> for ApiError {
    fn from(e: PoolGetError) -> Self {
        ApiError::Storage(e.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Storage(e)
    }
}

impl From<RestaurantInsertError> for ApiError {
    fn from(e: RestaurantInsertError) -> Self {
        ApiError::Storage(e.into())
    }
}

impl From<MealInsertError> for ApiError {
    fn from(e: MealInsertError) -> Self {
        match e {
            MealInsertError::RestaurantNotFound(id) => ApiError::NotFound { entity: "Restaurant", id },
            _ => ApiError::Storage(e.into())
        }
    }
}

impl From<RfidInsertError> for ApiError {
    fn from(e: RfidInsertError) -> Self {
        match e {
            RfidInsertError::RestaurantNotFound(id) => ApiError::NotFound { entity: "Restaurant", id },
            _ => ApiError::Storage(e.into())
        }
    }
}

// Record ids travel as GraphQL `ID`s holding the decimal row id
pub(crate) fn parse_id(argument: &str, id: &ID) -> Result<i32, ApiError> {
    let raw: &str = id;
    raw.parse::<i32>()
        .map_err(|_| ApiError::Validation(format!("{} must be a numeric id, got {:?}", argument, raw)))
}

pub(crate) fn to_id(id: i32) -> ID {
    ID::new(id.to_string())
}
