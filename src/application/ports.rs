use async_trait::async_trait;

use crate::domain::RunParameters;
use crate::error::RepositoryError;

/// Persistence collaborator, invoked once per run before any request is
/// issued. A failure aborts the run.
#[async_trait]
pub trait RunRepository: Send + Sync {
    async fn save(&self, parameters: &RunParameters) -> Result<(), RepositoryError>;
}
