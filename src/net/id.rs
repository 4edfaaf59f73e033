//! 标识符类型
//!
//! 定义节点和消息的唯一标识符。

/// 节点标识符（网络 arena 的下标；创建后不变，永不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// 消息标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);
