//! 测试套件

mod consumer_groups;
mod order_flow;
