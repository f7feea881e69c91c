//! 测试辅助工具模块

mod kafka_helper;

pub use kafka_helper::*;

pub fn brokers() -> String {
    std::env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".to_string())
}

pub fn order_service_url() -> String {
    std::env::var("ORDER_SERVICE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// 每次运行唯一的订单号前缀，用于从共享 topic 中筛出本次用例的消息
pub fn run_prefix() -> String {
    format!("e2e-{}", uuid::Uuid::new_v4().simple())
}
