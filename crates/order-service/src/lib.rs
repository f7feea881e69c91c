//! 订单服务
//!
//! 通过 HTTP 接收下单请求，构造订单事件并以 orderId 为 key 发布到
//! Kafka `order-events` topic，同步返回回显结果。

pub mod error;
pub mod handlers;
pub mod publisher;
pub mod routes;
pub mod service;
pub mod state;

pub use service::OrderService;
