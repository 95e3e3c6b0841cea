use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("GIPHY API error ({status}): {message}")]
    GiphyApi {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("GIPHY response decode error: {0}")]
    GiphyDecode(#[from] serde_json::Error),

    #[error("Transport task failed: {0}")]
    TransportTask(#[from] tokio::task::JoinError),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

impl BotError {
    /// Returns true if the error came from decoding a search response rather
    /// than from reaching the search API.
    pub fn is_decode(&self) -> bool {
        matches!(self, BotError::GiphyDecode(_))
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
