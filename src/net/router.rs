//! 消息路由
//!
//! 每次调用独立面向当前拓扑：计算最快路径，把消息交付给路径末端节点，
//! 并向事件接收器上报一条结果记录。无重试、无队列、无跨调用状态。

use serde::Serialize;

use super::error::NetError;
use super::id::NodeId;
use super::network::Network;
use tracing::{debug, info, warn};

/// 一次路由尝试的结构化记录。
/// 只含领域事实，不做任何格式化；时间戳等展示细节由接收器补充。
#[derive(Debug, Clone, Serialize)]
pub struct RouteAttempt {
    pub message_id: u64,
    pub source: String,
    pub destination: String,
    pub payload: String,
    pub success: bool,
    /// 路径上各节点名称（有序）；无路径时为 None
    pub path: Option<Vec<String>>,
    /// 总时延（ms）；未送达时为 None
    pub total_ms: Option<u64>,
}

/// 路由事件接收器。只读旁观者，绝不反向驱动路由逻辑。
pub trait RouteSink {
    fn on_route_attempt(&mut self, attempt: &RouteAttempt);
}

/// 空接收器：未接报告器时路由照常工作。
#[derive(Debug, Default)]
pub struct NoopSink;

impl RouteSink for NoopSink {
    fn on_route_attempt(&mut self, _attempt: &RouteAttempt) {}
}

impl Network {
    /// 路由一条消息。
    ///
    /// - 任一端点 id 未知：返回 `Err`（调用方契约错误），不产生记录；
    /// - 其余情况恰好产生一条 [`RouteAttempt`] 记录，
    ///   返回值与记录中的 success 一致。
    #[tracing::instrument(skip(self, payload, sink), fields(src = ?src, dst = ?dst))]
    pub fn route_message(
        &mut self,
        src: NodeId,
        dst: NodeId,
        payload: impl Into<String>,
        sink: &mut dyn RouteSink,
    ) -> Result<bool, NetError> {
        let Some(src_node) = self.node(src) else {
            return Err(NetError::UnknownNodeId(src));
        };
        let Some(dst_node) = self.node(dst) else {
            return Err(NetError::UnknownNodeId(dst));
        };
        let source = src_node.name().to_string();
        let destination = dst_node.name().to_string();

        let msg = self.make_message(src, dst, payload);
        debug!(msg_id = msg.id.0, "🚀 开始路由");

        let attempt = match self.find_path(src, dst) {
            Some(route) => {
                // 路径末端按构造就是目的节点，但交付结果仍以 accept 为准
                let last = *route.hops.last().expect("route non-empty");
                let delivered = self
                    .node(last)
                    .expect("path node in arena")
                    .accept(&msg);
                if delivered {
                    info!(msg_id = msg.id.0, total_ms = route.total_ms, "✅ 消息路由成功");
                } else {
                    warn!(msg_id = msg.id.0, "路径末端拒收消息");
                }
                let names = route
                    .hops
                    .iter()
                    .map(|&id| self.node(id).expect("path node in arena").name().to_string())
                    .collect();
                RouteAttempt {
                    message_id: msg.id.0,
                    source,
                    destination,
                    payload: msg.payload.clone(),
                    success: delivered,
                    path: Some(names),
                    total_ms: delivered.then_some(route.total_ms),
                }
            }
            None => {
                warn!(msg_id = msg.id.0, "❌ 无可用路径，路由失败");
                RouteAttempt {
                    message_id: msg.id.0,
                    source,
                    destination,
                    payload: msg.payload.clone(),
                    success: false,
                    path: None,
                    total_ms: None,
                }
            }
        };

        let success = attempt.success;
        sink.on_route_attempt(&attempt);
        Ok(success)
    }
}
