use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiftlogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("streamer not found: {uid}")]
    StreamerNotFound { uid: String },

    #[error("invalid color (expected #RRGGBB): {value}")]
    InvalidColor { value: String },
}

pub type Result<T> = std::result::Result<T, GiftlogError>;
