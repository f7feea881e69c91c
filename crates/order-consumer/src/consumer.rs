//! 消费者进程生命周期
//!
//! `new` 按档位创建 Kafka 消费者，`run` 订阅 topic 并驱动消费循环，
//! 直到关闭信号到来。

use order_shared::config::KafkaConfig;
use order_shared::kafka::{KafkaConsumer, topics};
use tokio::sync::watch;
use tracing::info;

use crate::error::ConsumerError;
use crate::handler::handle_message;
use crate::profile::ConsumerProfile;

pub struct OrderConsumer {
    consumer: KafkaConsumer,
    profile: ConsumerProfile,
}

impl OrderConsumer {
    /// 档位中的 client id 覆盖配置里的 `kafka.client_id`
    pub fn new(kafka: &KafkaConfig, profile: ConsumerProfile) -> Result<Self, ConsumerError> {
        let kafka = KafkaConfig {
            client_id: profile.client_id.clone(),
            ..kafka.clone()
        };
        let consumer = KafkaConsumer::new(&kafka, &profile.group_id)?;
        Ok(Self { consumer, profile })
    }

    pub fn profile(&self) -> &ConsumerProfile {
        &self.profile
    }

    /// 启动消费循环，直到收到 shutdown 信号
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> Result<(), ConsumerError> {
        self.consumer.subscribe(&[topics::ORDER_EVENTS])?;

        info!(
            consumer = %self.profile.label,
            group_id = %self.profile.group_id,
            topic = topics::ORDER_EVENTS,
            "订单消费者已启动"
        );

        let profile = self.profile;
        self.consumer
            .start(shutdown, |msg| {
                let profile = &profile;
                async move {
                    handle_message(profile, &msg);
                    Ok(())
                }
            })
            .await;

        info!(consumer = %profile.label, "订单消费者已停止");
        Ok(())
    }
}
