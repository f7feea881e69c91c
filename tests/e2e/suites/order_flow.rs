//! 下单链路测试
//!
//! HTTP 下单 -> Kafka -> 消费者解码，验证回显与消息内容一致。

use std::collections::HashMap;
use std::time::Duration;

use order_consumer::handler::render_message;
use order_consumer::{ConsumerProfile, ProfileName};
use order_shared::kafka::{ConsumerMessage, KafkaConsumer, topics};
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::helpers::*;

#[tokio::test]
#[ignore = "需要运行 Kafka 和 order-service"]
async fn test_post_order_reaches_consumer() {
    let order_id = run_prefix();
    let body = json!({"orderId": order_id, "userEmail": "a@b.com", "amount": 42});

    let resp = reqwest::Client::new()
        .post(format!("{}/order", order_service_url()))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let resp_body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(resp_body["status"], "Order placed");
    assert_eq!(resp_body["event"], body);

    // 独立消费组从最早位点读取，找到本次下单的消息
    let brokers = brokers();
    let consumer =
        KafkaConsumer::new(&kafka_config(&brokers), &format!("order-flow-{order_id}")).unwrap();
    consumer.subscribe(&[topics::ORDER_EVENTS]).unwrap();

    let found: Arc<Mutex<Option<ConsumerMessage>>> = Arc::new(Mutex::new(None));
    let sink = found.clone();
    let wanted = order_id.clone();
    consumer
        .start(close_after(Duration::from_secs(15)), |msg| {
            let sink = sink.clone();
            let wanted = wanted.clone();
            async move {
                if msg.key.as_deref() == Some(wanted.as_str()) {
                    *sink.lock().expect("结果锁中毒") = Some(msg);
                }
                Ok(())
            }
        })
        .await;

    let msg = found
        .lock()
        .expect("结果锁中毒")
        .take()
        .expect("应收到本次下单的消息");
    assert_eq!(msg.key.as_deref(), Some(order_id.as_str()));

    let line = render_message(&ConsumerProfile::preset(ProfileName::Email), &msg).unwrap();
    assert!(line.contains(&order_id));
    assert!(line.contains("a@b.com"));
    assert!(line.contains("42"));
}

#[tokio::test]
#[ignore = "需要运行 order-service"]
async fn test_liveness() {
    let resp: HashMap<String, String> = reqwest::get(format!("{}/", order_service_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp.get("status").map(String::as_str), Some("Order Service is running"));
}
