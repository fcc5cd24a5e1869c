use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::{Connection, ExpressionMethods, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{domain::{Page, PageRequest}, models::{NewRfid, Rfid}, schema::rfid_tags, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

use super::restaurant_exists;

#[tracing::instrument(
    "Getting rfid tags from db",
    skip(conn)
)]
pub async fn list_rfids(
    mut conn: DbConnection,
    request: PageRequest
) -> Result<Page<Rfid>, anyhow::Error>{

    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let total = rfid_tags::table
                .count()
                .get_result::<i64>(conn)
                .context("Failed to count rfid tags")?;

            let window = request.window(total);

            let items = rfid_tags::table
                .order(rfid_tags::id.asc())
                .limit(window.limit())
                .offset(window.start)
                .select(Rfid::as_select())
                .load::<Rfid>(conn)
                .context("Failed to get rfid tags")?;

            Ok(Page::new(items, window, total))
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[derive(Error)]
pub enum RfidInsertError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("restaurant_id: {0} doesn't exist")]
    RestaurantNotFound(i32)
}

impl Debug for RfidInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Insert an rfid tag to db",
    skip(conn)
)]
pub async fn insert_rfid(
    mut conn: DbConnection,
    new_rfid: NewRfid
) -> Result<Rfid, RfidInsertError> {

    let rfid = spawn_blocking_with_tracing(move || {
        conn.immediate_transaction::<Rfid, RfidInsertError, _>(|conn| {
            if !restaurant_exists(conn, new_rfid.restaurant_id)? {
                return Err(RfidInsertError::RestaurantNotFound(new_rfid.restaurant_id))
            }

            let rfid = diesel::insert_into(rfid_tags::table)
                .values(&new_rfid)
                .returning(Rfid::as_returning())
                .get_result::<Rfid>(conn)?;

            Ok(rfid)
        })
    })
    .await??;

    Ok(rfid)
}
