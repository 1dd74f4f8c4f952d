use std::sync::Arc;

use crate::application::services::DispatchService;

#[derive(Clone)]
pub struct AppState {
    pub dispatch_service: Arc<DispatchService>,
}
