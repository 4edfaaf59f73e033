//! 路由报告
//!
//! 实现 `RouteSink` 的报告器：内存里累积记录，仿真结束统一落盘
//! （CSV，或与 viz 同款的 JSON）。展示层的格式化都在这里完成，
//! 核心路由逻辑只提供领域事实。

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::net::{RouteAttempt, RouteSink};
use tracing::info;

/// 报告中的一行记录（列名即 CSV 表头）
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub timestamp: String,
    pub message_id: u64,
    pub source_node: String,
    pub intended_destination: String,
    pub payload: String,
    pub status: String,
    pub path_taken: String,
    pub total_latency_ms: String,
}

/// 路由事件报告器
#[derive(Debug, Default)]
pub struct Reporter {
    entries: Vec<ReportEntry>,
}

const CSV_HEADER: &str = "timestamp,message_id,source_node,intended_destination,\
payload,status,path_taken,total_latency_ms";

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 写出 CSV 报告。没有记录时只写表头。
    pub fn write_csv(&self, path: &Path) -> io::Result<()> {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for e in &self.entries {
            let fields = [
                e.timestamp.as_str(),
                &e.message_id.to_string(),
                &e.source_node,
                &e.intended_destination,
                &e.payload,
                &e.status,
                &e.path_taken,
                &e.total_latency_ms,
            ]
            .map(csv_escape);
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        fs::write(path, out)?;
        info!(path = %path.display(), rows = self.entries.len(), "📄 CSV 报告已写出");
        Ok(())
    }

    /// 写出 JSON 报告（记录数组）
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        info!(path = %path.display(), rows = self.entries.len(), "📄 JSON 报告已写出");
        Ok(())
    }
}

impl RouteSink for Reporter {
    fn on_route_attempt(&mut self, attempt: &RouteAttempt) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.entries.push(ReportEntry {
            timestamp,
            message_id: attempt.message_id,
            source_node: attempt.source.clone(),
            intended_destination: attempt.destination.clone(),
            payload: attempt.payload.clone(),
            status: if attempt.success { "SUCCESS" } else { "FAILED" }.to_string(),
            path_taken: match &attempt.path {
                Some(names) => names.join(" -> "),
                None => "No path found".to_string(),
            },
            total_latency_ms: match attempt.total_ms {
                Some(ms) => ms.to_string(),
                None => "N/A".to_string(),
            },
        });
    }
}

/// RFC 4180 风格转义：含逗号、引号或换行的字段加引号，内部引号成对
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
