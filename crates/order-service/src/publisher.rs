//! 订单事件发布
//!
//! HTTP 层依赖 `EventPublisher` 抽象而非具体的 Kafka 生产者，便于 mock 测试。

use async_trait::async_trait;
use order_shared::error::OrderError;
use order_shared::events::OrderEvent;
use order_shared::kafka::{KafkaProducer, topics};

/// 投递确认：消息落在的分区和位点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub partition: i32,
    pub offset: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// 发布一条订单事件，等待 broker 确认后返回
    async fn publish(&self, event: &OrderEvent) -> Result<Delivery, OrderError>;
}

#[async_trait]
impl EventPublisher for KafkaProducer {
    async fn publish(&self, event: &OrderEvent) -> Result<Delivery, OrderError> {
        let key = event.message_key();
        let (partition, offset) = self
            .send_json(topics::ORDER_EVENTS, key.as_deref(), event)
            .await?;
        Ok(Delivery { partition, offset })
    }
}
