//! Kafka 基础设施封装
//!
//! 将 rdkafka 的底层 API 封装为业务友好的 Producer/Consumer 抽象，
//! 统一消息序列化、错误映射和优雅关闭语义。分区分配、位点提交、
//! 再均衡全部交给 rdkafka 处理。

use std::borrow::Cow;
use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::{BorrowedMessage, Message};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::KafkaConfig;
use crate::error::OrderError;

/// 投递确认与元数据请求的超时时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Topic 常量
// ---------------------------------------------------------------------------

pub mod topics {
    pub const ORDER_EVENTS: &str = "order-events";
}

// ---------------------------------------------------------------------------
// ConsumerMessage
// ---------------------------------------------------------------------------

/// 消费到的 Kafka 消息的统一表示
///
/// 将 rdkafka 的 `BorrowedMessage`（带生命周期约束）转换为拥有所有权的结构体，
/// 使消息可以安全地跨 await 点传递给异步处理函数。
#[derive(Debug, Clone)]
pub struct ConsumerMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub key: Option<String>,
    pub payload: Vec<u8>,
}

impl ConsumerMessage {
    fn from_borrowed(msg: &BorrowedMessage<'_>) -> Self {
        let key = msg
            .key()
            .and_then(|k| std::str::from_utf8(k).ok())
            .map(String::from);

        // tombstone 消息没有负载，按空字节处理
        let payload = msg.payload().map(|p| p.to_vec()).unwrap_or_default();

        Self {
            topic: msg.topic().to_string(),
            partition: msg.partition(),
            offset: msg.offset(),
            key,
            payload,
        }
    }

    /// 将负载按文本返回，非法 UTF-8 字节替换为 U+FFFD
    pub fn payload_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    /// 将 JSON 格式负载反序列化为目标类型
    pub fn deserialize_payload<T: DeserializeOwned>(&self) -> Result<T, OrderError> {
        Ok(serde_json::from_slice(&self.payload)?)
    }
}

// ---------------------------------------------------------------------------
// KafkaProducer
// ---------------------------------------------------------------------------

/// 面向业务的 Kafka 生产者
///
/// 封装 `FutureProducer` 并提供类型安全的 JSON 发送方法，
/// 内部已派生 Clone（`FutureProducer` 本身是 Arc 包装的）。
#[derive(Clone)]
pub struct KafkaProducer {
    producer: FutureProducer,
}

impl KafkaProducer {
    /// 根据配置创建生产者
    ///
    /// 5 秒内无法投递即视为失败，由调用方决定如何处理。
    pub fn new(config: &KafkaConfig) -> Result<Self, OrderError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("client.id", &config.client_id)
            .set("message.timeout.ms", "5000")
            .create()
            .map_err(|e| OrderError::Kafka(format!("创建生产者失败: {e}")))?;

        info!(brokers = %config.brokers, client_id = %config.client_id, "Kafka 生产者已初始化");
        Ok(Self { producer })
    }

    /// 拉取一次 topic 元数据，确认 broker 可达
    ///
    /// rdkafka 的连接是惰性的，启动阶段显式请求一次元数据，
    /// broker 不可达时尽早失败。元数据请求是阻塞调用，放到阻塞线程池执行。
    pub async fn ensure_connected(&self, topic: &str) -> Result<(), OrderError> {
        let producer = self.producer.clone();
        let topic_name = topic.to_string();

        let broker_count = tokio::task::spawn_blocking(move || {
            producer
                .client()
                .fetch_metadata(Some(&topic_name), REQUEST_TIMEOUT)
                .map(|metadata| metadata.brokers().len())
        })
        .await
        .map_err(|e| OrderError::Internal(format!("元数据任务异常退出: {e}")))?
        .map_err(|e| OrderError::Kafka(format!("连接 broker 失败: {e}")))?;

        info!(
            topic,
            brokers = broker_count,
            "已连接 Kafka broker"
        );
        Ok(())
    }

    /// 发送原始字节消息
    ///
    /// `key` 为空时不设置消息 key，由 broker 客户端自行选择分区。
    pub async fn send(
        &self,
        topic: &str,
        key: Option<&str>,
        payload: &[u8],
    ) -> Result<(i32, i64), OrderError> {
        let mut record = FutureRecord::<str, [u8]>::to(topic).payload(payload);
        // 没有 key 时走 rdkafka 默认分区器
        if let Some(key) = key {
            record = record.key(key);
        }

        let delivery = self
            .producer
            .send(record, REQUEST_TIMEOUT)
            .await
            .map_err(|(e, _)| OrderError::Kafka(format!("发送消息失败: {e}")))?;

        debug!(
            topic,
            key,
            partition = delivery.partition,
            offset = delivery.offset,
            "消息已发送"
        );
        Ok((delivery.partition, delivery.offset))
    }

    /// 将值序列化为 JSON 后发送
    pub async fn send_json<T: Serialize>(
        &self,
        topic: &str,
        key: Option<&str>,
        value: &T,
    ) -> Result<(i32, i64), OrderError> {
        let payload = serde_json::to_vec(value)?;
        self.send(topic, key, &payload).await
    }
}

// ---------------------------------------------------------------------------
// KafkaConsumer
// ---------------------------------------------------------------------------

/// 面向业务的 Kafka 消费者
///
/// 封装 `StreamConsumer` 并提供基于 `watch` channel 的优雅关闭语义。
pub struct KafkaConsumer {
    consumer: StreamConsumer,
    group_id: String,
}

impl KafkaConsumer {
    /// 创建消费者
    ///
    /// 共享同一 `group_id` 的多个实例由 broker 在组内分摊分区；
    /// 独立 `group_id` 的实例各自收到全部消息。
    pub fn new(config: &KafkaConfig, group_id: &str) -> Result<Self, OrderError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("client.id", &config.client_id)
            .set("group.id", group_id)
            .set("auto.offset.reset", &config.auto_offset_reset)
            .set("enable.auto.commit", "true")
            .set("enable.partition.eof", "false")
            .create()
            .map_err(|e| OrderError::Kafka(format!("创建消费者失败: {e}")))?;

        info!(brokers = %config.brokers, group_id, "Kafka 消费者已初始化");
        Ok(Self {
            consumer,
            group_id: group_id.to_string(),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// 订阅指定的 topic 列表
    pub fn subscribe(&self, topics: &[&str]) -> Result<(), OrderError> {
        self.consumer
            .subscribe(topics)
            .map_err(|e| OrderError::Kafka(format!("订阅 topic 失败: {e}")))?;

        info!(?topics, group_id = %self.group_id, "已订阅 Kafka topics");
        Ok(())
    }

    /// 启动消费循环
    ///
    /// handler 在循环内逐条 await，同一进程内不会并发执行，
    /// 同一分区的消息按顺序处理。handler 返回错误只记录日志而不中断循环。
    /// 关闭信号变为 `true` 或消息流结束时返回。
    pub async fn start<F, Fut>(self, mut shutdown: watch::Receiver<bool>, handler: F)
    where
        F: Fn(ConsumerMessage) -> Fut,
        Fut: std::future::Future<Output = Result<(), OrderError>>,
    {
        use futures::StreamExt;

        // stream 借用 consumer，固定在栈上供 select! 轮询
        let stream = self.consumer.stream();
        futures::pin_mut!(stream);

        info!(group_id = %self.group_id, "Kafka 消费循环已启动");

        loop {
            tokio::select! {
                // 偏向关闭信号，收到后不再拉取新消息
                biased;

                changed = shutdown.changed() => {
                    // 发送端被丢弃同样视为关闭
                    if changed.is_err() || *shutdown.borrow() {
                        info!("收到关闭信号，Kafka 消费循环退出");
                        break;
                    }
                }

                msg_result = stream.next() => {
                    let Some(msg_result) = msg_result else {
                        warn!("Kafka 消息流意外结束");
                        break;
                    };

                    match msg_result {
                        Ok(borrowed_msg) => {
                            // 先转成自有数据再 await，BorrowedMessage 不能跨 await 持有
                            let msg = ConsumerMessage::from_borrowed(&borrowed_msg);
                            drop(borrowed_msg);
                            debug!(
                                topic = %msg.topic,
                                partition = msg.partition,
                                offset = msg.offset,
                                "收到 Kafka 消息"
                            );

                            if let Err(e) = handler(msg).await {
                                error!(error = %e, "处理 Kafka 消息失败");
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "接收 Kafka 消息出错");
                        }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 测试
// ---------------------------------------------------------------------------
