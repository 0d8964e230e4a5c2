use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// Number of questions returned per page by `GET /questions`.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Runtime configuration.
///
/// Layered as: built-in defaults, then `TRIVIA_*` environment variables
/// (`TRIVIA_DATABASE_URL`, `TRIVIA_LISTEN_ADDR`, `TRIVIA_LOGLEVEL`,
/// `TRIVIA_SEED_CATEGORIES`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.db".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
            seed_categories: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("TRIVIA_"))
    }

    pub fn load() -> Result<Self, TriviaError> {
        Ok(Self::figment().extract()?)
    }
}
