use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP status error: {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error happened while obtaining the statistics document
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::HttpStatus(_) | Error::Request(_) | Error::Io(_))
    }

    /// Whether the statistics document could not be decoded
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("invalid agent URL: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
