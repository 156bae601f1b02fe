use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to save run '{id}': {message}")]
    SaveFailed { id: String, message: String },
}
