//! 命令行参数
//!
//! ```bash
//! # 独立消费组，输出解析后的订单字段
//! order-consumer --profile email
//!
//! # 同组的两个实例，分摊分区
//! order-consumer --profile a
//! order-consumer --profile b
//! ```

use clap::Parser;

use crate::profile::{ConsumerProfile, ProfileName};

#[derive(Parser, Debug)]
#[command(name = "order-consumer")]
#[command(version, about = "订单事件消费者")]
pub struct Cli {
    /// 内置档位
    #[arg(short, long, value_enum, default_value = "email", env = "ORDER_CONSUMER_PROFILE")]
    pub profile: ProfileName,

    /// 覆盖档位的消费组
    #[arg(short, long, env = "ORDER_CONSUMER_GROUP_ID")]
    pub group_id: Option<String>,

    /// 覆盖档位的 Kafka client id
    #[arg(long)]
    pub client_id: Option<String>,
}

impl Cli {
    pub fn consumer_profile(&self) -> ConsumerProfile {
        let mut profile = ConsumerProfile::preset(self.profile);
        if let Some(group_id) = &self.group_id {
            profile = profile.with_group_id(group_id.clone());
        }
        if let Some(client_id) = &self.client_id {
            profile = profile.with_client_id(client_id.clone());
        }
        profile
    }
}
