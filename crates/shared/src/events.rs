//! 订单事件模型
//!
//! 生产者从 HTTP 请求体构造 `OrderEvent`，序列化为 JSON 写入 Kafka；
//! 消费者再从消息负载还原。字段均不做校验：任意 JSON 值原样透传，
//! 显式的 `null` 照常回显，缺失字段在序列化时直接省略。

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 字段存在即为 `Some`，包括显式的 `null`
///
/// 配合 `#[serde(default)]` 使用：字段缺失时才是 `None`。
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// 下单请求体
///
/// 只提取三个约定字段，其余字段由 serde 忽略。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default, deserialize_with = "present")]
    pub order_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub user_email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub amount: Option<Value>,
}

/// 订单事件
///
/// 字段类型不做约束，`"42"` 和 `42` 都按原样回显。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub user_email: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
}

impl OrderEvent {
    pub fn new(
        order_id: impl Into<Value>,
        user_email: impl Into<Value>,
        amount: impl Into<Value>,
    ) -> Self {
        Self {
            order_id: Some(order_id.into()),
            user_email: Some(user_email.into()),
            amount: Some(amount.into()),
        }
    }

    /// 从下单请求构造事件
    pub fn from_request(req: OrderRequest) -> Self {
        Self {
            order_id: req.order_id,
            user_email: req.user_email,
            amount: req.amount,
        }
    }

    /// Kafka 消息 key
    ///
    /// 同一订单的消息路由到同一分区。字符串 orderId 原样使用，
    /// 其他类型取其 JSON 文本；缺失或为 `null` 时不设置 key。
    pub fn message_key(&self) -> Option<Cow<'_, str>> {
        match self.order_id.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s)),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl From<OrderRequest> for OrderEvent {
    fn from(req: OrderRequest) -> Self {
        Self::from_request(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_format_is_camel_case() {
        let event = OrderEvent::new("O1", "a@b.com", 42);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"orderId": "O1", "userEmail": "a@b.com", "amount": 42})
        );
    }

    #[test]
    fn test_from_request_copies_only_known_fields() {
        let req: OrderRequest = serde_json::from_value(json!({
            "orderId": "O2",
            "userEmail": "c@d.com",
            "amount": 19.5,
            "coupon": "SPRING"
        }))
        .unwrap();

        let event = OrderEvent::from_request(req);
        assert_eq!(event.order_id, Some(json!("O2")));
        assert_eq!(event.user_email, Some(json!("c@d.com")));
        assert_eq!(event.amount, Some(json!(19.5)));
        assert_eq!(event.message_key().as_deref(), Some("O2"));
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let req: OrderRequest = serde_json::from_value(json!({"userEmail": "x@y.z"})).unwrap();
        let event = OrderEvent::from(req);

        assert_eq!(event.message_key(), None);
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"userEmail":"x@y.z"}"#
        );
    }

    #[test]
    fn test_integer_amount_is_not_widened() {
        let event: OrderEvent = serde_json::from_str(r#"{"orderId":"O1","amount":42}"#).unwrap();
        assert_eq!(event.amount.unwrap().to_string(), "42");
    }

    #[test]
    fn test_fields_of_any_type_pass_through() {
        let body = r#"{"orderId":1,"userEmail":null,"amount":"42"}"#;

        let req: OrderRequest = serde_json::from_str(body).unwrap();
        let event = OrderEvent::from(req);
        assert_eq!(event.user_email, Some(Value::Null));
        assert_eq!(event.message_key().as_deref(), Some("1"));
        assert_eq!(serde_json::to_string(&event).unwrap(), body);

        // 消费者侧解码同一负载
        let decoded: OrderEvent = serde_json::from_slice(body.as_bytes()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_null_order_id_has_no_key() {
        let event: OrderEvent = serde_json::from_str(r#"{"orderId":null}"#).unwrap();
        assert_eq!(event.order_id, Some(Value::Null));
        assert_eq!(event.message_key(), None);
    }
}
