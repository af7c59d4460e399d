use anyhow::{ensure, Context};
use std::{env, str::FromStr};

const DEFAULT_PORT: u16 = 3002;
const DEFAULT_QUESTIONS_PER_PAGE: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub questions_per_page: u64,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            port: DEFAULT_PORT,
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
        }
    }

    /// Reads `DATABASE_URL`, `PORT` and `QUESTIONS_PER_PAGE`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let questions_per_page =
            parse_or(&lookup, "QUESTIONS_PER_PAGE", DEFAULT_QUESTIONS_PER_PAGE)?;

        ensure!(
            questions_per_page > 0,
            "QUESTIONS_PER_PAGE must be greater than zero"
        );

        Ok(Self {
            database_url,
            port,
            questions_per_page,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("{key} is not valid: {value:?}")),
        None => Ok(default),
    }
}
