//! 消费者配置档
//!
//! 三个内置档位：
//!
//! | 档位 | 标签 | 消费组 | 输出 |
//! |---|---|---|---|
//! | `email` | `Email` | `email-service-group` | 解析后的订单字段 |
//! | `a` | `A` | `email-serviceA` | 原始负载 |
//! | `b` | `B` | `email-serviceA` | 原始负载 |
//!
//! `a` 与 `b` 同组，broker 在两者之间分摊分区；`email` 独立成组，收到每一条消息。

use clap::ValueEnum;

pub const EMAIL_SERVICE_GROUP: &str = "email-service-group";
pub const SHARED_GROUP: &str = "email-serviceA";
pub const CONSUMER_CLIENT_ID: &str = "email-service";

/// 消息输出样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// 按订单事件解析，输出邮箱、订单号、金额
    Parsed,
    /// 按 UTF-8 文本原样输出
    Raw,
}

/// 内置档位名
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileName {
    Email,
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerProfile {
    /// 日志中标识消费者实例的标签
    pub label: String,
    pub group_id: String,
    pub client_id: String,
    pub render: RenderMode,
}

impl ConsumerProfile {
    pub fn preset(name: ProfileName) -> Self {
        let (label, group_id, render) = match name {
            ProfileName::Email => ("Email", EMAIL_SERVICE_GROUP, RenderMode::Parsed),
            ProfileName::A => ("A", SHARED_GROUP, RenderMode::Raw),
            ProfileName::B => ("B", SHARED_GROUP, RenderMode::Raw),
        };

        Self {
            label: label.to_string(),
            group_id: group_id.to_string(),
            client_id: CONSUMER_CLIENT_ID.to_string(),
            render,
        }
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// 两个档位是否在同一消费组内分摊消息
    pub fn shares_group_with(&self, other: &ConsumerProfile) -> bool {
        self.group_id == other.group_id
    }
}
