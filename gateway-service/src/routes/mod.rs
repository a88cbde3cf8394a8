pub mod describe;
pub mod health;
pub mod search;

use crate::services::catalog::BookProvider;
use crate::services::description::DescriptionProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookProvider + Send + Sync>,
    pub descriptions: Arc<dyn DescriptionProvider + Send + Sync>,
}
