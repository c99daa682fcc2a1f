/// A persisted automotive part listing.
///
/// `id` is the hex form of the storage-assigned primary identifier and is
/// always present once a part has been stored. `part_number` is the
/// caller-assigned business key and is unrelated to `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: String,
    pub part_number: i64,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub compatible_models: Vec<String>,
    pub status: String,
    pub price: f64,
    pub extra_info: Option<String>,
    pub seller_id: i64,
}

/// A part as submitted for insertion. Carries no primary identifier at all:
/// the store assigns one. `part_number` may be absent on the wire and the
/// storage adapter rejects insertion when it is.
#[derive(Debug, Clone)]
pub struct NewPart {
    pub part_number: Option<i64>,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub compatible_models: Vec<String>,
    pub status: String,
    pub price: f64,
    pub extra_info: Option<String>,
    pub seller_id: i64,
}
