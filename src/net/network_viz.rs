//! Visualization hooks for the network.

use crate::viz::{VizLinkInfo, VizNodeInfo, VizSnapshot};

use super::network::Network;

impl Network {
    /// 导出当前拓扑的只读快照（节点状态 + 去重后的无向链路）。
    pub fn snapshot(&self) -> VizSnapshot {
        let nodes = self
            .nodes()
            .map(|n| VizNodeInfo {
                id: n.id().0,
                name: n.name().to_string(),
                active: n.is_active(),
            })
            .collect::<Vec<_>>();

        // 对称邻接表每条链路出现两次，只保留 a < b 的方向
        let mut links = Vec::new();
        for node in self.nodes() {
            for (other, latency_ms) in node.neighbors() {
                if node.id() < other {
                    links.push(VizLinkInfo {
                        a: node.id().0,
                        b: other.0,
                        latency_ms,
                    });
                }
            }
        }
        links.sort_by_key(|l| (l.a, l.b));

        VizSnapshot { nodes, links }
    }
}
