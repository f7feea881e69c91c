//! 路由处理器

use axum::{Json, extract::State};
use order_shared::events::{OrderEvent, OrderRequest};
use order_shared::observability::metrics;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::OrderServiceError;
use crate::state::AppState;

pub const ORDER_PLACED: &str = "Order placed";
pub const SERVICE_RUNNING: &str = "Order Service is running";

/// 下单响应
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderPlacedResponse {
    pub status: String,
    pub event: OrderEvent,
}

/// 存活响应
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// 下单
///
/// POST /order
///
/// 请求字段原样写入事件，不做校验；事件以 orderId 为 key 发布一次，
/// 等到 broker 确认后回显事件。
pub async fn place_order(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<OrderPlacedResponse>, OrderServiceError> {
    let event = OrderEvent::from_request(req);

    let delivery = match state.publisher.publish(&event).await {
        Ok(d) => d,
        Err(e) => {
            error!(order_id = ?event.order_id, error = %e, "订单事件发布失败");
            metrics::record_order_published("error");
            return Err(OrderServiceError::Publish(e));
        }
    };
    metrics::record_order_published("ok");

    info!(
        order_id = ?event.order_id,
        partition = delivery.partition,
        offset = delivery.offset,
        "订单事件已发布"
    );

    Ok(Json(OrderPlacedResponse {
        status: ORDER_PLACED.to_string(),
        event,
    }))
}

/// 存活探针
///
/// GET /
pub async fn liveness() -> Json<StatusResponse> {
    info!("{SERVICE_RUNNING}");
    Json(StatusResponse {
        status: SERVICE_RUNNING.to_string(),
    })
}
