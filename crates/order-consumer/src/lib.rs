//! 订单事件消费者
//!
//! 订阅 `order-events` topic，逐条解码消息并输出日志。
//! 不同消费者实例之间唯一的区别是消费组和输出样式，由 `ConsumerProfile` 描述：
//! 共享同一消费组的实例由 broker 分摊分区，独立消费组的实例收到全部消息。

pub mod cli;
pub mod consumer;
pub mod error;
pub mod handler;
pub mod profile;

pub use consumer::OrderConsumer;
pub use profile::{ConsumerProfile, ProfileName, RenderMode};
