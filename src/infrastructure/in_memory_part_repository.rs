use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::DomainError,
        part::{NewPart, Part},
    },
    infrastructure::PartRepository,
};

/// In-memory implementation of [`PartRepository`] with the same observable
/// contract as the MongoDB adapter. Used as the substitutable double in
/// contract tests and for running the API without a database.
#[derive(Default)]
pub struct InMemoryPartRepository {
    parts_by_id: RwLock<HashMap<String, Part>>,
}

impl InMemoryPartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartRepository for InMemoryPartRepository {
    async fn get_all(&self) -> Result<Vec<Part>, DomainError> {
        Ok(self.parts_by_id.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Part>, DomainError> {
        if ObjectId::parse_str(id).is_err() {
            return Ok(None);
        }

        Ok(self.parts_by_id.read().await.get(id).cloned())
    }

    async fn add(&self, part: NewPart) -> Result<Part, DomainError> {
        let Some(part_number) = part.part_number else {
            return Err(DomainError::validation(
                "missing required field 'id' (part number)",
            ));
        };

        let created = Part {
            id: ObjectId::new().to_hex(),
            part_number,
            name: part.name,
            description: part.description,
            photo_url: part.photo_url,
            compatible_models: part.compatible_models,
            status: part.status,
            price: part.price,
            extra_info: part.extra_info,
            seller_id: part.seller_id,
        };

        self.parts_by_id
            .write()
            .await
            .insert(created.id.clone(), created.clone());

        Ok(created)
    }
}
