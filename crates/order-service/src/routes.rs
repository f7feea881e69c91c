//! 路由配置模块

use axum::{
    Router, middleware,
    routing::{get, post},
};
use order_shared::observability::middleware as obs_middleware;

use crate::{handlers, state::AppState};

/// 构建订单路由
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::liveness))
        .route("/order", post(handlers::place_order))
}

/// 构建完整应用：路由 + 可观测性中间件 + 状态
pub fn app(state: AppState) -> Router {
    order_routes()
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
