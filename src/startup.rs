use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Pool;
use tracing_actix_web::TracingLogger;

use crate::{configuration::{DatabaseSettings, Settings}, graphql::{create_schema, Schema}, routes::{graphql, graphql_or_explorer, health_check, index, GRAPHQL_PATH}, utils::{DbPool, SqlitePragmas}};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub server: Server
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)?;
        run_migrations(&pool)?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind application address")?;
        let port = listener.local_addr()?.port();

        tracing::info!(host = %settings.application.host, port, "Starting server");

        let server = run(listener, pool.clone(), create_schema())?;

        Ok(Application{
            host: settings.application.host,
            port,
            pool,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(settings: &DatabaseSettings) -> Result<DbPool, anyhow::Error>{
    let manager = ConnectionManager::<SqliteConnection>::new(settings.get_database_url());

    Pool::builder()
        .max_size(settings.max_connections)
        .connection_customizer(Box::new(SqlitePragmas{
            busy_timeout_ms: settings.busy_timeout_ms
        }))
        .build(manager)
        .context("Failed to build database connection pool")
}

// Creates the tables on first start; a no-op once they exist
pub fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get().context("Failed to get connection from pool")?;

    let applied = conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    for version in applied {
        tracing::info!(%version, "Applied migration");
    }

    Ok(())
}

fn run(
    listener: TcpListener,
    pool: DbPool,
    schema: Schema
) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);
    let schema = web::Data::new(schema);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health_check))
            .service(
                web::resource(GRAPHQL_PATH)
                    .route(web::post().to(graphql))
                    .route(web::get().to(graphql_or_explorer))
            )
            .app_data(pool.clone())
            .app_data(schema.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
