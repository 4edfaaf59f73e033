//! 消息类型
//!
//! 定义在网络中路由的不可变消息值。

use super::id::{MessageId, NodeId};

/// 网络消息：构造后不再变化，路由结束即丢弃。
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub src: NodeId,
    pub dst: NodeId,
    pub payload: String,
}
