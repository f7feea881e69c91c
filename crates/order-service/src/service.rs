//! 订单服务进程生命周期
//!
//! `new` 创建生产者（此时尚未连接），`run` 确认 broker 可达后开始监听 HTTP，
//! 直到关闭信号到来再优雅退出。

use std::sync::Arc;

use order_shared::config::AppConfig;
use order_shared::kafka::{KafkaProducer, topics};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes;
use crate::state::AppState;

pub struct OrderService {
    config: AppConfig,
    producer: KafkaProducer,
}

impl OrderService {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let producer = KafkaProducer::new(&config.kafka)?;
        Ok(Self { config, producer })
    }

    /// 连接 broker 并提供 HTTP 服务，直到 `shutdown` 完成
    pub async fn run<S>(self, shutdown: S) -> anyhow::Result<()>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        self.producer.ensure_connected(topics::ORDER_EVENTS).await?;

        let state = AppState::new(Arc::new(self.producer));
        let app = routes::app(state);

        let addr = self.config.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("Order service listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Order service shutdown complete");
        Ok(())
    }
}
