//! 错误类型
//!
//! 定义网络操作的错误分类。no-path 不是错误，见 `path` 模块。

use super::id::NodeId;
use thiserror::Error;

/// 网络操作错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    /// 按名称查找节点失败
    #[error("node '{0}' not found")]
    NodeNotFound(String),

    /// 按 id 查找节点失败（调用方传入了未知 id）
    #[error("unknown node id {0:?}")]
    UnknownNodeId(NodeId),

    /// 两个节点之间没有直接链路
    #[error("no direct link between '{a}' and '{b}'")]
    LinkNotFound { a: String, b: String },
}
