//! 共享库
//!
//! 包含订单生产者与消费者共用的配置、错误处理、事件模型、Kafka 封装、
//! 可观测性与关闭信号等基础设施代码。

pub mod config;
pub mod error;
pub mod events;
pub mod kafka;
pub mod observability;
pub mod shutdown;
