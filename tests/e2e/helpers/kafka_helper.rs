//! Kafka 辅助工具
//!
//! 在测试进程内启动若干消费者，收集指定时间窗口内收到的订单号。

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use order_shared::config::KafkaConfig;
use order_shared::events::OrderEvent;
use order_shared::kafka::{KafkaConsumer, KafkaProducer, topics};
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub fn kafka_config(brokers: &str) -> KafkaConfig {
    KafkaConfig {
        brokers: brokers.to_string(),
        client_id: "order-events-e2e".to_string(),
        ..Default::default()
    }
}

/// 发布一批订单事件，订单号为 `{prefix}-{i}`
pub async fn publish_orders(brokers: &str, prefix: &str, count: usize) -> Result<Vec<String>> {
    let producer = KafkaProducer::new(&kafka_config(brokers))?;
    let mut ids = Vec::with_capacity(count);

    for i in 0..count {
        let order_id = format!("{prefix}-{i}");
        let event = OrderEvent::new(order_id.as_str(), "e2e@example.com", i);
        producer
            .send_json(topics::ORDER_EVENTS, Some(order_id.as_str()), &event)
            .await?;
        ids.push(order_id);
    }

    Ok(ids)
}

/// 一个在后台运行的消费者，收集带指定前缀的订单号
pub struct CollectingConsumer {
    received: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl CollectingConsumer {
    pub fn spawn(
        brokers: &str,
        group_id: &str,
        prefix: &str,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Self> {
        let consumer = KafkaConsumer::new(&kafka_config(brokers), group_id)?;
        consumer.subscribe(&[topics::ORDER_EVENTS])?;

        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let prefix = prefix.to_string();

        let handle = tokio::spawn(async move {
            consumer
                .start(shutdown, |msg| {
                    let sink = sink.clone();
                    let prefix = prefix.clone();
                    async move {
                        let event: OrderEvent = msg.deserialize_payload()?;
                        if let Some(Value::String(id)) = event.order_id
                            && id.starts_with(&prefix)
                        {
                            sink.lock().expect("结果锁中毒").push(id);
                        }
                        Ok(())
                    }
                })
                .await;
        });

        Ok(Self { received, handle })
    }

    /// 等待消费循环退出并返回收到的订单号
    pub async fn finish(self) -> Vec<String> {
        let _ = self.handle.await;
        let received = self.received.lock().expect("结果锁中毒");
        received.clone()
    }
}

/// 在 `window` 之后广播关闭
pub fn close_after(window: Duration) -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::time::sleep(window).await;
        let _ = tx.send(true);
    });
    rx
}
