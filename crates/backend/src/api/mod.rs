pub mod handlers;

use std::sync::Arc;

use crate::domain::a001_sales::SalesSource;
use crate::shared::config::Config;

/// Shared by every handler; read-only after startup
pub struct AppState {
    pub config: Config,
    pub sales: Arc<dyn SalesSource>,
}
