//! 拓扑配置加载
//!
//! 配置是两张表：`nodes`（至少含 `name`）和 `links`
//! （`[from, to, latency_ms]` 三元组）。支持 YAML 和 JSON，按扩展名分发。
//! 形状校验在这一层完成（serde 类型即 schema：元组定长、时延非负由 `u64` 保证）；
//! 链路端点名称是否解析得开是 `Network::from_config` 的事。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// 节点记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
}

/// 链路记录：`[from, to, latency_ms]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec(pub String, pub String, pub u64);

/// 网络拓扑配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub nodes: Vec<NodeSpec>,
    pub links: Vec<LinkSpec>,
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format '{0}' (expected .yml, .yaml or .json)")]
    UnsupportedFormat(String),
}

impl NetworkConfig {
    /// 从 YAML 文本解析
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// 从 JSON 文本解析
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// 从文件加载，按扩展名选择解析器
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let cfg = match ext {
            "yml" | "yaml" => Self::from_yaml(&text)?,
            "json" => Self::from_json(&text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        info!(
            path = %path.display(),
            nodes = cfg.nodes.len(),
            links = cfg.links.len(),
            "配置加载完成"
        );
        Ok(cfg)
    }
}
