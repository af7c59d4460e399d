mod db;
pub mod macros;
pub mod prelude;
mod request;
mod response;

use db::Database;
use dotenvy::dotenv;
use http::StatusCode;
use request::*;
use reqwest::Client;
use serde_json::{json, Value};
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{
    net::TcpListener,
    sync::{mpsc, oneshot, OnceCell},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use trivia_backend::{Config, State};
use uuid::Uuid;

#[derive(Debug)]
pub struct AppInner {
    addr: SocketAddr,
    reset: mpsc::Sender<oneshot::Sender<()>>,
}

#[derive(Clone, Debug)]
pub struct App {
    inner: Arc<AppInner>,
}

impl App {
    pub async fn new() -> Self {
        dotenv().ok();
        init_logging();

        let (tx, rx) = oneshot::channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(async move {
                tracing::trace!("setting up database");

                let db = Database::setup().await;

                tracing::trace!("binding socket");

                let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
                let listener = TcpListener::bind(addr)
                    .await
                    .expect("failed to bind tcp listener");
                let state = State::with_database(Config::new(db.url()), db.conn());

                let (reset_tx, mut reset_rx) = mpsc::channel::<oneshot::Sender<()>>(16);

                let inner = Arc::new(AppInner {
                    addr: listener.local_addr().unwrap(),
                    reset: reset_tx,
                });

                tx.send(inner).unwrap();

                tokio::spawn(async move {
                    while let Some(done) = reset_rx.recv().await {
                        db.reset().await;
                        done.send(()).ok();
                    }
                });

                tracing::trace!("starting app");

                trivia_backend::run(listener, state).await.unwrap();
            });
        });

        App {
            inner: rx.await.unwrap(),
        }
    }

    /// Restores the seeded data set. Tests relying on exact counts call this
    /// and run `#[serial]`.
    pub async fn reset_database(&self) {
        let (tx, rx) = oneshot::channel();
        self.inner.reset.send(tx).await.unwrap();
        rx.await.unwrap();
    }

    /// Submits a fresh question and returns its id.
    pub async fn create_question(&self, category: i32) -> i64 {
        let res = self
            .post("/submit")
            .json(&json!({
                "question": format!("Question {}?", uuid()),
                "answer": "Answer",
                "difficulty": 2,
                "category": category,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        body["created"].as_i64().expect("no created id")
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.inner.addr, path)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().get(self.url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().post(self.url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().delete(self.url(url)))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().put(self.url(url)))
    }
}

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_test_writer()
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .try_init()
        .ok();
}

pub async fn get_cached_app() -> &'static App {
    static APP: OnceCell<App> = OnceCell::const_new();
    APP.get_or_init(App::new).await
}

pub fn uuid() -> String {
    Uuid::new_v4()
        .as_simple()
        .encode_lower(&mut Uuid::encode_buffer())
        .to_owned()
}
