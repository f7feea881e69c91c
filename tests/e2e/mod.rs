//! 订单事件端到端测试
//!
//! 依赖本地 Kafka（默认 localhost:9092，可用 KAFKA_BROKERS 覆盖），
//! 订单链路测试还需要运行中的 order-service（默认 http://localhost:3000，
//! 可用 ORDER_SERVICE_URL 覆盖）。全部用例默认 ignore：
//!
//! ```bash
//! cargo test --test e2e -- --ignored
//! ```

pub mod helpers;
pub mod suites;
