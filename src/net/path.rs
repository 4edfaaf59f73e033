//! 最短路径引擎
//!
//! 在当前在线节点上做 Dijkstra，时延和最小的路径即「最快路径」。
//! 离线节点在本次计算中视同不存在（包括端点本身）。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::id::NodeId;
use super::network::Network;
use tracing::{debug, trace};

/// 路径结果：有序节点序列（首为源、尾为目的）与总时延（ms）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub hops: Vec<NodeId>,
    pub total_ms: u64,
}

/// 优先队列条目，按暂定距离取最小。
struct Frontier {
    dist: u64,
    node: NodeId,
}

// BinaryHeap 是 max-heap；我们需要最小距离优先，因此反向比较。
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.dist.cmp(&other.dist) {
            Ordering::Equal => self.node.cmp(&other.node),
            ord => ord,
        }
        .reverse()
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.node == other.node
    }
}

impl Eq for Frontier {}

impl Network {
    /// 计算 `src` 到 `dst` 的最快路径。
    ///
    /// 任一端点不存在或离线时立即返回 None（预期的运行结果，不是错误）。
    /// 复杂度 O((V+E) log V)。
    #[tracing::instrument(skip(self), fields(src = ?src, dst = ?dst))]
    pub fn find_path(&self, src: NodeId, dst: NodeId) -> Option<Route> {
        // 前置检查：端点必须存在且在线
        if !self.node(src).is_some_and(|n| n.is_active())
            || !self.node(dst).is_some_and(|n| n.is_active())
        {
            debug!("端点不存在或离线，直接判定无路径");
            return None;
        }

        let n = self.len();
        let mut dist: Vec<u64> = vec![u64::MAX; n];
        let mut prev: Vec<Option<NodeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[src.0] = 0;
        heap.push(Frontier { dist: 0, node: src });

        while let Some(Frontier { dist: d, node: cur }) = heap.pop() {
            if d > dist[cur.0] {
                trace!(node = ?cur, d, "条目已过期，跳过");
                continue;
            }
            // 被弹出后才下线的节点不可穿越
            let cur_node = self.node(cur).expect("node in arena");
            if !cur_node.is_active() {
                continue;
            }
            if cur == dst {
                // 非负权重下弹出即最终距离，提前结束
                break;
            }
            for (next, edge_ms) in cur_node.neighbors() {
                let next_node = self.node(next).expect("neighbor in arena");
                if !next_node.is_active() {
                    continue;
                }
                let cand = d.saturating_add(edge_ms);
                if cand < dist[next.0] {
                    trace!(from = ?cur, to = ?next, cand, "松弛成功");
                    dist[next.0] = cand;
                    prev[next.0] = Some(cur);
                    heap.push(Frontier { dist: cand, node: next });
                }
            }
        }

        if dist[dst.0] == u64::MAX {
            debug!("目的节点不可达");
            return None;
        }

        // 沿前驱指针回溯重建路径
        let mut hops = vec![dst];
        while let Some(p) = prev[hops.last().expect("hops non-empty").0] {
            hops.push(p);
        }
        if *hops.last().expect("hops non-empty") != src {
            // 回溯未到源点：在线子图中不可达
            return None;
        }
        hops.reverse();

        debug!(hops = hops.len(), total_ms = dist[dst.0], "找到最快路径");
        Some(Route {
            hops,
            total_ms: dist[dst.0],
        })
    }
}
