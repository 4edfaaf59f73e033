//! 网络模拟模块
//!
//! 此模块包含网络模拟的核心组件：节点、链路（对称邻接表）、消息、
//! 最短路径引擎和消息路由。

// 子模块声明
mod id;
mod message;
mod node;
mod error;
mod network;
mod network_viz;
mod path;
mod router;

// 重新导出公共接口
pub use id::{MessageId, NodeId};
pub use message::Message;
pub use node::Node;
pub use error::NetError;
pub use network::Network;
pub use path::Route;
pub use router::{NoopSink, RouteAttempt, RouteSink};
