//! 单条消息处理
//!
//! `render_message` 只负责把消息格式化成一行输出，不做任何业务动作；
//! `handle_message` 负责记录日志和指标，解码失败不会向上传播。

use std::borrow::Cow;

use order_shared::events::OrderEvent;
use order_shared::kafka::ConsumerMessage;
use order_shared::observability::metrics;
use serde_json::Value;
use tracing::{error, info};

use crate::error::ConsumerError;
use crate::profile::{ConsumerProfile, RenderMode};

const MISSING: &str = "-";

/// 字段的展示文本：字符串不带引号，其余取 JSON 文本
fn display_field(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed(MISSING),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// 将消息格式化为一行输出
///
/// `Raw` 模式下非法 UTF-8 字节替换为 U+FFFD，不会失败。
pub fn render_message(
    profile: &ConsumerProfile,
    msg: &ConsumerMessage,
) -> Result<String, ConsumerError> {
    match profile.render {
        RenderMode::Parsed => {
            let event: OrderEvent =
                serde_json::from_slice(&msg.payload).map_err(ConsumerError::Decode)?;
            Ok(format!(
                "[{}] partition {} | Email -> {} | order {} | amount ${}",
                profile.label,
                msg.partition,
                display_field(event.user_email.as_ref()),
                display_field(event.order_id.as_ref()),
                display_field(event.amount.as_ref()),
            ))
        }
        RenderMode::Raw => Ok(format!(
            "[{}] partition {} -> {}",
            profile.label,
            msg.partition,
            msg.payload_str()
        )),
    }
}

/// 处理一条消息
///
/// 成功时输出格式化后的行；失败时记录错误并返回 `None`。
/// 无论成功与否消息都视为已处理，位点由 broker 客户端自动提交。
pub fn handle_message(profile: &ConsumerProfile, msg: &ConsumerMessage) -> Option<String> {
    match render_message(profile, msg) {
        Ok(line) => {
            info!(
                consumer = %profile.label,
                partition = msg.partition,
                offset = msg.offset,
                "{line}"
            );
            metrics::record_message_consumed(&profile.label, "ok");
            Some(line)
        }
        Err(e) => {
            error!(
                consumer = %profile.label,
                error = %e,
                topic = %msg.topic,
                partition = msg.partition,
                offset = msg.offset,
                "Parse error"
            );
            metrics::record_message_consumed(&profile.label, "decode_error");
            None
        }
    }
}
