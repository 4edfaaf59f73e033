//! 节点类型
//!
//! 定义网络节点：身份、名称、在线标志和带权邻接表。
//! 邻接表按 id 记录邻居（arena 模式），链路的对称性由 `Network` 维护。

use std::collections::HashMap;

use super::id::NodeId;
use super::message::Message;
use tracing::{debug, info};

/// 网络节点
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    active: bool,
    /// 邻居 id -> 链路时延（ms）。不变量：若 A 含 (B, L)，则 B 必含 (A, L)。
    neighbors: HashMap<NodeId, u64>,
}

impl Node {
    /// 创建新节点（默认在线，无邻居）
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
            neighbors: HashMap::new(),
        }
    }

    /// 获取节点标识符
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 获取节点名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 节点是否在线
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 上线。幂等，对邻接表无副作用。
    pub fn activate(&mut self) {
        self.active = true;
        info!(node = %self.name, "🟢 节点上线");
    }

    /// 下线。幂等，对邻接表无副作用。
    pub fn deactivate(&mut self) {
        self.active = false;
        info!(node = %self.name, "🔴 节点下线");
    }

    /// 是否与 `other` 有直接链路
    pub fn has_link(&self, other: NodeId) -> bool {
        self.neighbors.contains_key(&other)
    }

    /// 到 `other` 的链路时延（ms），无直接链路时为 None
    pub fn latency_to(&self, other: NodeId) -> Option<u64> {
        self.neighbors.get(&other).copied()
    }

    /// 遍历邻居 (id, 时延)
    pub fn neighbors(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.neighbors.iter().map(|(&id, &ms)| (id, ms))
    }

    /// 邻居数量
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 写入一条邻接项。仅供 `Network` 使用，调用方负责同时写入反方向。
    pub(crate) fn set_neighbor(&mut self, other: NodeId, latency_ms: u64) {
        self.neighbors.insert(other, latency_ms);
    }

    /// 终点交付检查：只有消息的目的 id 等于本节点 id 才算送达。
    /// 不送达时消息在本跳丢弃，不再转发。
    pub fn accept(&self, msg: &Message) -> bool {
        if self.id == msg.dst {
            info!(node = %self.name, msg_id = msg.id.0, "📨 消息送达目的节点");
            true
        } else {
            debug!(node = %self.name, msg_id = msg.id.0, dst = ?msg.dst, "消息目的地不是本节点，丢弃");
            false
        }
    }
}
