use std::sync::Arc;

use crate::application::part_service::PartService;

#[derive(Clone)]
pub struct AppState {
    pub part_service: Arc<PartService>,
}

impl AppState {
    pub fn new(part_service: Arc<PartService>) -> Self {
        Self { part_service }
    }
}
