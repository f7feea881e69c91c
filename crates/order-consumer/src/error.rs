//! 消费者错误类型
//!
//! 解码失败只记录日志，消息照常视为已处理。

use order_shared::error::OrderError;

#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    #[error("订单事件解析失败: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Shared(#[from] OrderError),
}
