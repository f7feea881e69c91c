//! 订单服务
//!
//! 提供下单 HTTP 接口，将订单事件发布到 Kafka。

use std::process::ExitCode;

use order_service::OrderService;
use order_shared::{config::AppConfig, observability, shutdown::shutdown_signal};
use tracing::error;

const SERVICE_NAME: &str = "order-service";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "{SERVICE_NAME} 启动或运行失败");
            // 日志尚未初始化时同样要让调用方看到失败原因
            eprintln!("{SERVICE_NAME} failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME)?;
    let guard = observability::init(&config.service_name, &config.observability).await?;

    tracing::info!(
        brokers = %config.kafka.brokers,
        addr = %config.server_addr(),
        metrics = guard.metrics_enabled(),
        "Starting {SERVICE_NAME}..."
    );

    OrderService::new(config)?.run(shutdown_signal()).await
}
