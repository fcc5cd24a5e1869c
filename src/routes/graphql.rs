use actix_web::{web, HttpRequest, HttpResponse};
use juniper_actix::{graphiql_handler, graphql_handler};

use crate::{graphql::{Context, Schema}, utils::DbPool};

pub const GRAPHQL_PATH: &str = "/graphql";

#[tracing::instrument(
    "Executing GraphQL request",
    skip_all
)]
pub async fn graphql(
    req: HttpRequest,
    payload: web::Payload,
    schema: web::Data<Schema>,
    pool: web::Data<DbPool>
) -> Result<HttpResponse, actix_web::Error> {
    let context = Context::new(pool.get_ref().clone());

    graphql_handler(schema.get_ref(), &context, req, payload).await
}

// A GET without a query string is a browser asking for the explorer
#[tracing::instrument(
    "Serving GraphQL request or explorer",
    skip_all
)]
pub async fn graphql_or_explorer(
    req: HttpRequest,
    payload: web::Payload,
    schema: web::Data<Schema>,
    pool: web::Data<DbPool>
) -> Result<HttpResponse, actix_web::Error> {
    if req.query_string().is_empty() {
        return graphiql_handler(GRAPHQL_PATH, None).await
    }

    graphql(req, payload, schema, pool).await
}
