use std::sync::Arc;

use crate::{
    application::dto::{CreatePartRequest, PartResponse},
    domain::errors::DomainError,
    infrastructure::PartRepository,
};

/// Use-case layer over the injected repository. Deliberately thin today —
/// this is the seam where cross-cutting business rules (price policies,
/// seller authorization) would live once they exist.
#[derive(Clone)]
pub struct PartService {
    repository: Arc<dyn PartRepository>,
}

impl PartService {
    pub fn new(repository: Arc<dyn PartRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_parts(&self) -> Result<Vec<PartResponse>, DomainError> {
        let parts = self.repository.get_all().await?;
        Ok(parts.into_iter().map(PartResponse::from).collect())
    }

    pub async fn get_part(&self, id: &str) -> Result<Option<PartResponse>, DomainError> {
        Ok(self.repository.get_by_id(id).await?.map(PartResponse::from))
    }

    pub async fn create_part(
        &self,
        request: CreatePartRequest,
    ) -> Result<PartResponse, DomainError> {
        request.validate()?;
        let created = self.repository.add(request.into_domain()).await?;
        Ok(PartResponse::from(created))
    }
}
