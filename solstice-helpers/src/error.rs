use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpersError {
    /// Сводная ошибка валидации: сообщения по полям через '\n'
    #[error("{0}")]
    Validation(String),

    #[error("isEqualPrice expected number|string but received {0}")]
    PriceType(&'static str),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Invalid strftime format: `{0}`")]
    InvalidFormat(String),

    #[error("Rounding step must be positive")]
    InvalidStep,

    #[error("Rounded time does not exist in this timezone")]
    AmbiguousTime,

    #[error("Unknown time unit: {0}")]
    UnknownTimeUnit(String),

    #[error("Query params must serialize to an object")]
    NotAnObject,

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] globset::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, HelpersError>;
