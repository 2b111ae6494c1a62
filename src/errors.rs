use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occurred deserializing registry data: {0}.")]
    Deserializing(#[source] serde_json::Error),

    #[error("An error occurred validating registry data: {0}.")]
    Validation(String),

    #[error("No record found for {0}.")]
    NotFound(String),
}
