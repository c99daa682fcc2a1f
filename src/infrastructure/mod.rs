use async_trait::async_trait;

use crate::domain::{
    errors::DomainError,
    part::{NewPart, Part},
};

pub mod in_memory_part_repository;
pub mod mongo_part_repository;

/// Storage capability for part listings. Implementations are injected as
/// `Arc<dyn PartRepository>` at construction time.
///
/// `get_by_id` returns `Ok(None)` both for a syntactically invalid id and
/// for a well-formed id with no matching record; callers that need to tell
/// the two apart validate the id syntax themselves before calling.
#[async_trait]
pub trait PartRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Part>, DomainError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Part>, DomainError>;
    async fn add(&self, part: NewPart) -> Result<Part, DomainError>;
}
