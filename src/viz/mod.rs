//! 拓扑可视化（只读导出）
//!
//! 设计目标：
//! - **结构化**：导出 JSON 快照而不是在进程内画图
//! - **轻量**：不引入绘图依赖，PNG 由外部 `dot -Tpng` 栅格化
//! - **只读**：可视化永远不改网络状态

mod types;

pub use types::{VizLinkInfo, VizNodeInfo, VizSnapshot};
