use serde::{Deserialize, Serialize};

/// 快照中的节点信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizNodeInfo {
    pub id: usize,
    pub name: String,
    pub active: bool,
}

/// 快照中的链路信息（无向，每条链路只出现一次，a < b）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizLinkInfo {
    pub a: usize,
    pub b: usize,
    /// 链路时延（ms）
    pub latency_ms: u64,
}

/// 网络拓扑的只读快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizSnapshot {
    pub nodes: Vec<VizNodeInfo>,
    pub links: Vec<VizLinkInfo>,
}

impl VizSnapshot {
    /// 渲染为 Graphviz DOT：在线节点绿色、离线红色，边标注时延。
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph network {\n");
        out.push_str("    node [style=filled];\n");
        for n in &self.nodes {
            let color = if n.active { "green" } else { "red" };
            out.push_str(&format!(
                "    n{} [label=\"{}\", fillcolor={}];\n",
                n.id,
                dot_escape(&n.name),
                color
            ));
        }
        for l in &self.links {
            out.push_str(&format!(
                "    n{} -- n{} [label=\"{}ms\"];\n",
                l.a, l.b, l.latency_ms
            ));
        }
        out.push_str("}\n");
        out
    }

    /// 渲染为 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn dot_escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
