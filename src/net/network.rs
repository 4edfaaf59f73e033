//! 网络拓扑管理
//!
//! 网络独占持有全部节点（arena，按 `NodeId` 下标索引），
//! 提供节点创建、链路维护和按名称的运维操作。

use crate::config::NetworkConfig;

use super::error::NetError;
use super::id::{MessageId, NodeId};
use super::message::Message;
use super::node::Node;
use tracing::{debug, info, warn};

/// 网络拓扑
#[derive(Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    next_msg_id: u64,
}

impl Network {
    /// 添加节点，返回网络分配的 id
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let node = Node::new(id, name);
        debug!(id = ?id, name = %node.name(), "添加节点");
        self.nodes.push(node);
        id
    }

    /// 按 id 获取节点
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// 遍历全部节点（创建顺序）
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// 节点数量
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 按名称查找节点：返回创建顺序中的第一个匹配。
    /// 名称唯一性由 `from_config` 保证；绕过它创建的重名节点只能匹配到第一个。
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name() == name).map(Node::id)
    }

    /// 连接两个节点（创建对称链路）。
    ///
    /// 已有链路时严格不改动（首次时延生效）；修改时延走
    /// [`set_link_latency`](Network::set_link_latency)。自环同样忽略。
    #[tracing::instrument(skip(self), fields(a = ?a, b = ?b, latency_ms))]
    pub fn connect(&mut self, a: NodeId, b: NodeId, latency_ms: u64) {
        if a == b {
            warn!("忽略自环链路");
            return;
        }
        let (Some(_), Some(_)) = (self.node(a), self.node(b)) else {
            warn!("链路端点不存在，忽略");
            return;
        };
        if self.nodes[a.0].has_link(b) {
            debug!("链路已存在，保留原时延");
            return;
        }
        // 两个方向一起写入，保持对称不变量
        self.nodes[a.0].set_neighbor(b, latency_ms);
        self.nodes[b.0].set_neighbor(a, latency_ms);
        info!(
            a = %self.nodes[a.0].name(),
            b = %self.nodes[b.0].name(),
            latency_ms,
            "🔗 建立链路"
        );
    }

    /// 按名称修改一条既有链路的时延（两个方向一起更新）。
    /// 任一名称未解析或两节点之间无直接链路时返回错误，状态不变。
    #[tracing::instrument(skip(self), fields(a = %name_a, b = %name_b, latency_ms))]
    pub fn set_link_latency(
        &mut self,
        name_a: &str,
        name_b: &str,
        latency_ms: u64,
    ) -> Result<(), NetError> {
        let a = self
            .find_by_name(name_a)
            .ok_or_else(|| NetError::NodeNotFound(name_a.to_string()))?;
        let b = self
            .find_by_name(name_b)
            .ok_or_else(|| NetError::NodeNotFound(name_b.to_string()))?;
        if !self.nodes[a.0].has_link(b) {
            return Err(NetError::LinkNotFound {
                a: name_a.to_string(),
                b: name_b.to_string(),
            });
        }
        self.nodes[a.0].set_neighbor(b, latency_ms);
        self.nodes[b.0].set_neighbor(a, latency_ms);
        info!("⏱️  链路时延已更新");
        Ok(())
    }

    /// 按名称设置节点在线状态
    pub fn set_active(&mut self, name: &str, active: bool) -> Result<(), NetError> {
        let id = self
            .find_by_name(name)
            .ok_or_else(|| NetError::NodeNotFound(name.to_string()))?;
        let node = &mut self.nodes[id.0];
        if active {
            node.activate();
        } else {
            node.deactivate();
        }
        Ok(())
    }

    /// 创建消息（id 由网络递增分配）
    pub fn make_message(
        &mut self,
        src: NodeId,
        dst: NodeId,
        payload: impl Into<String>,
    ) -> Message {
        let id = MessageId(self.next_msg_id);
        self.next_msg_id = self.next_msg_id.wrapping_add(1);
        Message {
            id,
            src,
            dst,
            payload: payload.into(),
        }
    }

    /// 从配置构建网络（两遍扫描）。
    ///
    /// 第一遍创建节点，重名的后续记录跳过（名称在网络中保持唯一）；
    /// 第二遍创建链路，端点名称未解析或为自环的记录跳过。
    /// 坏记录只告警不中断，允许部分构建。
    #[tracing::instrument(skip(cfg), fields(nodes = cfg.nodes.len(), links = cfg.links.len()))]
    pub fn from_config(cfg: &NetworkConfig) -> Network {
        let mut net = Network::default();

        for spec in &cfg.nodes {
            if net.find_by_name(&spec.name).is_some() {
                warn!(name = %spec.name, "配置中节点重名，跳过后续记录");
                continue;
            }
            net.add_node(spec.name.clone());
        }

        for link in &cfg.links {
            let Some(a) = net.find_by_name(&link.0) else {
                warn!(name = %link.0, "链路端点未解析，跳过该链路");
                continue;
            };
            let Some(b) = net.find_by_name(&link.1) else {
                warn!(name = %link.1, "链路端点未解析，跳过该链路");
                continue;
            };
            net.connect(a, b, link.2);
        }

        info!(nodes = net.len(), "✅ 网络构建完成");
        net
    }
}
