use crate::config::Config;
use rand::{
    rngs::{adapter::ReseedingRng, OsRng},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Core;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Rand: Rng;

    fn db(&self) -> &Self::Db;
    fn rng(&self) -> Self::Rand;
    fn config(&self) -> &Config;
}

pub struct State {
    database: DbConn,
    config: Config,
}

impl State {
    pub async fn new(config: Config) -> Result<Arc<Self>, DbErr> {
        let conn = Self::connect_database(&config.database_url).await?;
        Ok(Self::with_database(config, conn))
    }

    pub fn with_database(config: Config, conn: DbConn) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            config,
        })
    }

    async fn connect_database(url: &str) -> Result<DbConn, DbErr> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url.to_owned());
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|err| error!("failed to connect to database: {err}"))?;

        info!("Connected to database");

        Ok(db)
    }
}

thread_local! {
    static CHACHA_THREAD_RNG: ReseedingRng<ChaCha20Core, OsRng> = {
        let rng = ChaCha20Core::from_entropy();
        ReseedingRng::new(rng, 1024*64, OsRng)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Rand = ReseedingRng<ChaCha20Core, OsRng>;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn rng(&self) -> Self::Rand {
        CHACHA_THREAD_RNG.with(|x| x.clone())
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
