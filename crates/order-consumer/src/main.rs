//! 订单事件消费者
//!
//! 订阅订单事件并输出日志，档位由命令行选择。

use std::process::ExitCode;

use clap::Parser;
use order_consumer::{OrderConsumer, cli::Cli};
use order_shared::{config::AppConfig, observability, shutdown::shutdown_channel};
use tracing::{error, info};

const SERVICE_NAME: &str = "order-consumer";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "{SERVICE_NAME} 启动或运行失败");
            eprintln!("{SERVICE_NAME} failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE_NAME)?;
    let guard = observability::init(&config.service_name, &config.observability).await?;

    let profile = cli.consumer_profile();
    info!(
        brokers = %config.kafka.brokers,
        consumer = %profile.label,
        group_id = %profile.group_id,
        metrics = guard.metrics_enabled(),
        "Starting {SERVICE_NAME}..."
    );

    let consumer = OrderConsumer::new(&config.kafka, profile)?;
    consumer.run(shutdown_channel()).await?;
    Ok(())
}
