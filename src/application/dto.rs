use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DomainError,
    part::{NewPart, Part},
};

/// Create payload in the public wire shape. The business key travels under
/// the `id` key; the storage identifier has no field here at all, so a
/// client-supplied `_id` is dropped during deserialization and the store
/// stays the sole authority for primary identity.
#[derive(Debug, Deserialize)]
pub struct CreatePartRequest {
    #[serde(rename = "id")]
    pub part_number: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub foto: String,
    pub modelos_compatibles: Vec<String>,
    pub estado: String,
    pub precio: f64,
    #[serde(default)]
    pub informacion_adicional: Option<String>,
    pub id_vendedor: i64,
}

impl CreatePartRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nombre.trim().is_empty() {
            return Err(DomainError::validation("nombre must not be blank"));
        }
        if self.precio < 0.0 {
            return Err(DomainError::validation("precio must not be negative"));
        }
        Ok(())
    }

    pub fn into_domain(self) -> NewPart {
        NewPart {
            part_number: self.part_number,
            name: self.nombre,
            description: self.descripcion,
            photo_url: self.foto,
            compatible_models: self.modelos_compatibles,
            status: self.estado,
            price: self.precio,
            extra_info: self.informacion_adicional,
            seller_id: self.id_vendedor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PartResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "id")]
    pub part_number: i64,
    pub nombre: String,
    pub descripcion: String,
    pub foto: String,
    pub modelos_compatibles: Vec<String>,
    pub estado: String,
    pub precio: f64,
    pub informacion_adicional: Option<String>,
    pub id_vendedor: i64,
}

impl From<Part> for PartResponse {
    fn from(value: Part) -> Self {
        Self {
            id: value.id,
            part_number: value.part_number,
            nombre: value.name,
            descripcion: value.description,
            foto: value.photo_url,
            modelos_compatibles: value.compatible_models,
            estado: value.status,
            precio: value.price,
            informacion_adicional: value.extra_info,
            id_vendedor: value.seller_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "id": 11,
            "nombre": "Kit de Embrague",
            "descripcion": "Kit de embrague de alto rendimiento",
            "foto": "https://example.com/kit-embrague.jpg",
            "modelos_compatibles": ["Mazda MX-5 2016-2020"],
            "estado": "Nuevo",
            "precio": 299.99,
            "informacion_adicional": "Apto para 400 Nm de par",
            "id_vendedor": 321
        })
    }

    #[test]
    fn valid_payload_passes_validation() {
        let request: CreatePartRequest =
            serde_json::from_value(sample_payload()).expect("payload should deserialize");
        assert!(request.validate().is_ok());
        assert_eq!(request.part_number, Some(11));
    }

    #[test]
    fn client_supplied_storage_id_is_dropped() {
        let mut payload = sample_payload();
        payload["_id"] = json!("66b1f0c2a4d3e5f6a7b8c9d0");

        let request: CreatePartRequest =
            serde_json::from_value(payload).expect("payload should deserialize");
        let part = request.into_domain();
        assert_eq!(part.part_number, Some(11));
    }

    #[test]
    fn missing_business_key_deserializes_as_none() {
        let mut payload = sample_payload();
        payload.as_object_mut().expect("payload is an object").remove("id");

        let request: CreatePartRequest =
            serde_json::from_value(payload).expect("payload should deserialize");
        assert_eq!(request.part_number, None);
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut payload = sample_payload();
        payload["precio"] = json!(-1.0);

        let request: CreatePartRequest =
            serde_json::from_value(payload).expect("payload should deserialize");
        let error = request.validate().expect_err("negative price must fail");
        assert!(matches!(error, DomainError::Validation(_)));
    }

    #[test]
    fn blank_name_fails_validation() {
        let mut payload = sample_payload();
        payload["nombre"] = json!("   ");

        let request: CreatePartRequest =
            serde_json::from_value(payload).expect("payload should deserialize");
        assert!(request.validate().is_err());
    }

    #[test]
    fn response_applies_wire_aliases() {
        let response = PartResponse::from(Part {
            id: "66b1f0c2a4d3e5f6a7b8c9d0".to_string(),
            part_number: 11,
            name: "Kit de Embrague".to_string(),
            description: "desc".to_string(),
            photo_url: "https://example.com/p.jpg".to_string(),
            compatible_models: vec!["Mazda MX-5 2016-2020".to_string()],
            status: "Nuevo".to_string(),
            price: 299.99,
            extra_info: None,
            seller_id: 321,
        });

        let value = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(value["_id"], json!("66b1f0c2a4d3e5f6a7b8c9d0"));
        assert_eq!(value["id"], json!(11));
        assert_eq!(value["nombre"], json!("Kit de Embrague"));
        assert_eq!(value["informacion_adicional"], json!(null));
    }
}
