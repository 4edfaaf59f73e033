//! Aegis 网络仿真 CLI
//!
//! 加载拓扑配置后进入逐行命令循环（stdin），命令与核心操作一一对应；
//! 退出时按参数落盘 CSV 报告和拓扑快照。

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use aegis_sim::config::NetworkConfig;
use aegis_sim::net::Network;
use aegis_sim::report::Reporter;
use clap::Parser;
use tracing::error;

#[derive(Debug, Parser)]
#[command(
    name = "aegis",
    about = "Weighted communications-network simulator with an interactive command loop"
)]
struct Args {
    /// Topology config (.yml/.yaml/.json) with `nodes` and `links`
    #[arg(long)]
    config: PathBuf,

    /// Write the routing report as CSV on exit
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the routing report as JSON on exit
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Write the final topology snapshot as Graphviz DOT on exit
    #[arg(long)]
    viz_dot: Option<PathBuf>,

    /// Write the final topology snapshot as JSON on exit
    #[arg(long)]
    viz_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    // 初始化 tracing；默认 warn，保持命令输出干净
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let cfg = match NetworkConfig::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(path = %args.config.display(), "{e}");
            return ExitCode::from(2);
        }
    };
    let mut net = Network::from_config(&cfg);
    let mut reporter = Reporter::new();

    println!("Aegis network simulator: {} nodes loaded.", net.len());
    println!("Commands: status | path <from> <to> | route <from> <to> <payload> | online <name> | offline <name> | latency <from> <to> <ms> | help | exit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if !run_command(line.trim(), &mut net, &mut reporter) {
            break;
        }
        io::stdout().flush().ok();
    }

    flush_outputs(&args, &net, &reporter)
}

/// 执行一条命令；返回 false 表示退出循环。
fn run_command(line: &str, net: &mut Network, reporter: &mut Reporter) -> bool {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return true; // 空行
    };
    let rest: Vec<&str> = parts.collect();

    match (cmd, rest.as_slice()) {
        ("exit" | "quit", _) => return false,
        ("help", _) => {
            println!("status                       - list every node with state and links");
            println!("path <from> <to>             - fastest path between two nodes");
            println!("route <from> <to> <payload>  - route a message and log the attempt");
            println!("online <name>                - bring a node online");
            println!("offline <name>               - take a node offline");
            println!("latency <from> <to> <ms>     - change an existing link's latency");
            println!("exit                         - leave the simulator");
        }
        ("status", _) => cmd_status(net),
        ("path", [from, to]) => cmd_path(net, from, to),
        ("route", [from, to, payload @ ..]) if !payload.is_empty() => {
            cmd_route(net, reporter, from, to, &payload.join(" "));
        }
        ("online", [name]) => cmd_set_active(net, name, true),
        ("offline", [name]) => cmd_set_active(net, name, false),
        ("latency", [from, to, ms]) => match ms.parse::<u64>() {
            Ok(ms) => cmd_latency(net, from, to, ms),
            Err(_) => println!("Error: latency must be a non-negative integer (ms)."),
        },
        _ => println!("Unknown command: '{line}'. Type 'help' for usage."),
    }
    true
}

fn cmd_status(net: &Network) {
    for node in net.nodes() {
        let state = if node.is_active() { "ONLINE" } else { "OFFLINE" };
        let mut links: Vec<(String, u64)> = node
            .neighbors()
            .filter_map(|(id, ms)| net.node(id).map(|n| (n.name().to_string(), ms)))
            .collect();
        links.sort();
        let links = if links.is_empty() {
            "none".to_string()
        } else {
            links
                .iter()
                .map(|(name, ms)| format!("{name} ({ms}ms)"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("{} [{}] links: {}", node.name(), state, links);
    }
}

fn cmd_path(net: &Network, from: &str, to: &str) {
    let (Some(src), Some(dst)) = (net.find_by_name(from), net.find_by_name(to)) else {
        println!("Error: node '{}' not found.", unknown_name(net, from, to));
        return;
    };
    match net.find_path(src, dst) {
        Some(route) => {
            let names: Vec<&str> = route
                .hops
                .iter()
                .filter_map(|&id| net.node(id).map(|n| n.name()))
                .collect();
            println!(
                "Fastest Path: {} (Total Latency: {}ms)",
                names.join(" -> "),
                route.total_ms
            );
        }
        None => println!("No path found between '{from}' and '{to}'."),
    }
}

fn cmd_route(net: &mut Network, reporter: &mut Reporter, from: &str, to: &str, payload: &str) {
    let (Some(src), Some(dst)) = (net.find_by_name(from), net.find_by_name(to)) else {
        println!("Error: node '{}' not found.", unknown_name(net, from, to));
        return;
    };
    match net.route_message(src, dst, payload, reporter) {
        Ok(true) => println!("Message delivered from '{from}' to '{to}'."),
        Ok(false) => println!("Message from '{from}' to '{to}' could not be delivered: no path."),
        Err(e) => println!("Error: {e}"),
    }
}

fn cmd_set_active(net: &mut Network, name: &str, active: bool) {
    match net.set_active(name, active) {
        Ok(()) => println!(
            "Node '{name}' is now {}.",
            if active { "ONLINE" } else { "OFFLINE" }
        ),
        Err(e) => println!("Error: {e}"),
    }
}

fn cmd_latency(net: &mut Network, from: &str, to: &str, ms: u64) {
    match net.set_link_latency(from, to, ms) {
        Ok(()) => println!("Link {from} <-> {to} latency set to {ms}ms."),
        Err(e) => println!("Error: {e}"),
    }
}

/// 报错提示用：两个名字里挑出解析失败的那个
fn unknown_name<'a>(net: &Network, a: &'a str, b: &'a str) -> &'a str {
    if net.find_by_name(a).is_none() { a } else { b }
}

/// 退出前按参数落盘报告与拓扑快照
fn flush_outputs(args: &Args, net: &Network, reporter: &Reporter) -> ExitCode {
    let mut failed = false;

    if let Some(path) = &args.report {
        if reporter.is_empty() {
            println!("No routing events to report.");
        } else if let Err(e) = reporter.write_csv(path) {
            error!(path = %path.display(), "failed to write CSV report: {e}");
            failed = true;
        } else {
            println!("Report written to {}.", path.display());
        }
    }
    if let Some(path) = &args.report_json {
        if let Err(e) = reporter.write_json(path) {
            error!(path = %path.display(), "failed to write JSON report: {e}");
            failed = true;
        }
    }

    let snapshot = net.snapshot();
    if let Some(path) = &args.viz_dot {
        if let Err(e) = std::fs::write(path, snapshot.to_dot()) {
            error!(path = %path.display(), "failed to write DOT snapshot: {e}");
            failed = true;
        } else {
            println!("Topology snapshot written to {}.", path.display());
        }
    }
    if let Some(path) = &args.viz_json {
        match snapshot.to_json() {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    error!(path = %path.display(), "failed to write JSON snapshot: {e}");
                    failed = true;
                }
            }
            Err(e) => {
                error!("failed to serialize snapshot: {e}");
                failed = true;
            }
        }
    }

    if failed { ExitCode::from(1) } else { ExitCode::SUCCESS }
}
