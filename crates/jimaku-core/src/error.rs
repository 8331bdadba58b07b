use thiserror::Error;

#[derive(Debug, Error)]
pub enum JimakuError {
    #[error("config error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("download error: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<jimaku_api::KtuvitError> for JimakuError {
    fn from(error: jimaku_api::KtuvitError) -> Self {
        JimakuError::Api(error.to_string())
    }
}
