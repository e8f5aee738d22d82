pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

use std::sync::Arc;

pub use config::Config;
pub use error::ApiError;

use database::repository::StudentRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn StudentRepository>,
    pub config: Config,
}
