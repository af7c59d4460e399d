use migration::MigratorTrait;
use sea_orm::{ConnectOptions, DbConn};
use std::env;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tracing::log::LevelFilter;

/// Test database. Starts a throwaway Postgres container unless
/// `TEST_DATABASE_URL` points at an existing server.
pub struct Database {
    url: String,
    conn: DbConn,
    _container: Option<ContainerAsync<Postgres>>,
}

impl Database {
    pub async fn setup() -> Self {
        let (url, container) = match env::var("TEST_DATABASE_URL") {
            Ok(url) => (url, None),
            Err(_) => {
                tracing::trace!("starting postgres container");

                let container = Postgres::default()
                    .with_tag("16")
                    .start()
                    .await
                    .expect("failed to start postgres container");

                let url = format!(
                    "postgres://postgres:postgres@{}:{}/postgres",
                    container.get_host().await.expect("no container host"),
                    container
                        .get_host_port_ipv4(5432)
                        .await
                        .expect("no container port"),
                );

                (url, Some(container))
            }
        };

        let mut opts = ConnectOptions::new(url.clone());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let conn = sea_orm::Database::connect(opts)
            .await
            .expect("failed to connect to database");

        let db = Self {
            url,
            conn,
            _container: container,
        };

        db.reset().await;
        db
    }

    /// Drops every table, migrates from scratch and loads the seed data.
    pub async fn reset(&self) {
        migration::Migrator::fresh(&self.conn)
            .await
            .expect("failed to apply migrations");

        migration::seed::seed(&self.conn)
            .await
            .expect("failed to seed database");
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn conn(&self) -> DbConn {
        self.conn.clone()
    }
}
