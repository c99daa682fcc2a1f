use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    domain::{
        errors::DomainError,
        part::{NewPart, Part},
    },
    infrastructure::PartRepository,
};

const COLLECTION_NAME: &str = "piezas";

/// Storage form of a part. Keys match the documents the service has always
/// written: Spanish field names, the business key under `id`, and the
/// primary identifier under `_id`. `_id` is omitted entirely on insert so
/// the store assigns one instead of receiving an explicit null.
#[derive(Debug, Serialize, Deserialize)]
struct PartDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(rename = "id")]
    part_number: i64,
    nombre: String,
    descripcion: String,
    foto: String,
    modelos_compatibles: Vec<String>,
    estado: String,
    precio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    informacion_adicional: Option<String>,
    id_vendedor: i64,
}

impl PartDocument {
    fn from_new(part: NewPart, part_number: i64) -> Self {
        Self {
            id: None,
            part_number,
            nombre: part.name,
            descripcion: part.description,
            foto: part.photo_url,
            modelos_compatibles: part.compatible_models,
            estado: part.status,
            precio: part.price,
            informacion_adicional: part.extra_info,
            id_vendedor: part.seller_id,
        }
    }

    fn into_domain(self) -> Result<Part, DomainError> {
        let Some(id) = self.id else {
            return Err(DomainError::internal(
                "stored part document is missing its _id",
            ));
        };

        Ok(Part {
            id: id.to_hex(),
            part_number: self.part_number,
            name: self.nombre,
            description: self.descripcion,
            photo_url: self.foto,
            compatible_models: self.modelos_compatibles,
            status: self.estado,
            price: self.precio,
            extra_info: self.informacion_adicional,
            seller_id: self.id_vendedor,
        })
    }
}

pub struct MongoPartRepository {
    collection: Collection<PartDocument>,
}

impl MongoPartRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl PartRepository for MongoPartRepository {
    async fn get_all(&self) -> Result<Vec<Part>, DomainError> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        let mut parts = Vec::new();
        while cursor.advance().await.map_err(map_mongo_error)? {
            match cursor.deserialize_current() {
                Ok(document) => parts.push(document.into_domain()?),
                Err(error) => {
                    warn!(error = %error, "skipping part document that failed to decode");
                }
            }
        }

        Ok(parts)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Part>, DomainError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let maybe_document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(map_mongo_error)?;

        maybe_document.map(PartDocument::into_domain).transpose()
    }

    async fn add(&self, part: NewPart) -> Result<Part, DomainError> {
        let Some(part_number) = part.part_number else {
            return Err(DomainError::validation(
                "missing required field 'id' (part number)",
            ));
        };

        let document = PartDocument::from_new(part, part_number);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            DomainError::internal("insert did not return an ObjectId primary key")
        })?;

        // Re-read the canonical stored document rather than echoing the
        // input back with the id patched in.
        let stored = self
            .collection
            .find_one(doc! { "_id": inserted_id })
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| {
                DomainError::internal(format!("part {inserted_id} vanished after insert"))
            })?;

        stored.into_domain()
    }
}

fn map_mongo_error(error: mongodb::error::Error) -> DomainError {
    DomainError::Storage(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Bson, to_document};

    fn sample_new_part() -> NewPart {
        NewPart {
            part_number: Some(11),
            name: "Kit de Embrague".to_string(),
            description: "Kit de embrague de alto rendimiento".to_string(),
            photo_url: "https://example.com/kit-embrague.jpg".to_string(),
            compatible_models: vec!["Mazda MX-5 2016-2020".to_string()],
            status: "Nuevo".to_string(),
            price: 299.99,
            extra_info: None,
            seller_id: 321,
        }
    }

    #[test]
    fn insert_document_omits_missing_id_fields() {
        let document = PartDocument::from_new(sample_new_part(), 11);
        let serialized = to_document(&document).expect("document should serialize");

        assert!(!serialized.contains_key("_id"));
        assert!(!serialized.contains_key("informacion_adicional"));
        assert_eq!(serialized.get("id"), Some(&Bson::Int64(11)));
        assert_eq!(
            serialized.get("nombre"),
            Some(&Bson::String("Kit de Embrague".to_string()))
        );
    }

    #[test]
    fn stored_document_maps_to_domain_part() {
        let object_id = ObjectId::new();
        let mut document = PartDocument::from_new(sample_new_part(), 11);
        document.id = Some(object_id);
        document.informacion_adicional = Some("Apto para 400 Nm de par".to_string());

        let part = document.into_domain().expect("document should map");
        assert_eq!(part.id, object_id.to_hex());
        assert_eq!(part.part_number, 11);
        assert_eq!(part.name, "Kit de Embrague");
        assert_eq!(part.extra_info.as_deref(), Some("Apto para 400 Nm de par"));
    }

    #[test]
    fn document_without_id_is_an_internal_error() {
        let document = PartDocument::from_new(sample_new_part(), 11);
        let error = document.into_domain().expect_err("missing _id must fail");
        assert!(matches!(error, DomainError::Internal(_)));
    }
}
