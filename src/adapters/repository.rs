use async_trait::async_trait;
use tracing::debug;

use crate::application::RunRepository;
use crate::domain::RunParameters;
use crate::error::RepositoryError;

/// Persistence placeholder that accepts every run without storing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRepository;

#[async_trait]
impl RunRepository for NoopRepository {
    async fn save(&self, parameters: &RunParameters) -> Result<(), RepositoryError> {
        debug!("Run {} accepted by no-op repository", parameters.id());
        Ok(())
    }
}
