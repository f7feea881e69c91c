//! 消费组语义测试
//!
//! 同组的两个消费者分摊消息（互不重复），独立组的消费者收到全部消息。

use std::collections::HashSet;
use std::time::Duration;

use order_consumer::{ConsumerProfile, ProfileName};

use crate::helpers::*;

const ORDER_COUNT: usize = 20;
/// 等待同组两个消费者都完成分区分配后再发布，避免再均衡重复投递
const WARM_UP: Duration = Duration::from_secs(10);
const CONSUME_WINDOW: Duration = Duration::from_secs(30);

/// 为本次运行生成隔离的消费组，保留档位之间的同组关系
fn isolated_group(profile: &ConsumerProfile, run: &str) -> String {
    format!("{}-{run}", profile.group_id)
}

#[tokio::test]
#[ignore = "需要运行 Kafka"]
async fn test_shared_group_splits_and_independent_group_sees_all() {
    let brokers = brokers();
    let prefix = run_prefix();

    let email = ConsumerProfile::preset(ProfileName::Email);
    let a = ConsumerProfile::preset(ProfileName::A);
    let b = ConsumerProfile::preset(ProfileName::B);
    assert!(a.shares_group_with(&b));

    let shutdown = close_after(CONSUME_WINDOW);
    let consumer_a =
        CollectingConsumer::spawn(&brokers, &isolated_group(&a, &prefix), &prefix, shutdown.clone())
            .unwrap();
    let consumer_b =
        CollectingConsumer::spawn(&brokers, &isolated_group(&b, &prefix), &prefix, shutdown.clone())
            .unwrap();
    let consumer_email =
        CollectingConsumer::spawn(&brokers, &isolated_group(&email, &prefix), &prefix, shutdown)
            .unwrap();

    tokio::time::sleep(WARM_UP).await;

    let produced: HashSet<String> = publish_orders(&brokers, &prefix, ORDER_COUNT)
        .await
        .unwrap()
        .into_iter()
        .collect();

    let got_a: HashSet<String> = consumer_a.finish().await.into_iter().collect();
    let got_b: HashSet<String> = consumer_b.finish().await.into_iter().collect();
    let got_email: HashSet<String> = consumer_email.finish().await.into_iter().collect();

    assert!(got_a.is_disjoint(&got_b), "同组消费者不应收到同一条消息");
    let shared: HashSet<String> = got_a.union(&got_b).cloned().collect();
    assert_eq!(shared, produced, "同组消费者合起来应覆盖全部消息");
    assert_eq!(got_email, produced, "独立消费组应收到全部消息");
}
