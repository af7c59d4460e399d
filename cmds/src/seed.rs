//! Applies pending migrations and loads the default trivia data set into
//! the database at `DATABASE_URL`.

use anyhow::Context;
use migration::MigratorTrait;
use sea_orm::Database;
use std::env;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let db = Database::connect(url).await?;

    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    if !migration::seed::seed(&db).await? {
        info!("database already seeded");
    }

    Ok(())
}
