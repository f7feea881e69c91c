//! 订单服务错误类型
//!
//! 发布失败不再让进程退出，而是转成 502 响应返回给调用方。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use order_shared::error::OrderError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error("订单事件发布失败: {0}")]
    Publish(#[source] OrderError),
}

impl OrderServiceError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Publish(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Publish(_) => "PUBLISH_FAILED",
        }
    }
}

impl IntoResponse for OrderServiceError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, code = self.error_code(), "请求处理失败");

        let body = json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}
