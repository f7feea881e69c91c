//! 应用状态定义

use std::sync::Arc;

use crate::publisher::EventPublisher;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self { publisher }
    }
}
