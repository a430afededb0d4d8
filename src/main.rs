//! Bible Chapter Downloader（bible.com 章节抓取器）。
//!
//! 按（译本 × 书卷 × 章）逐章抓取经文并落盘为 JSON，进度写入
//! `progress.json`，中断后可续传。
//!
//! 代码结构（读代码入口）：
//! - `base_system`：配置/日志/进度台账/存储路径等基础设施
//! - `catalog`：66 卷书与译本 ID 的静态目录表
//! - `network_parser`：HTTP 抓取与页面解析
//! - `download`：单章下载、书卷驱动与调度
//! - `inspector`：磁盘书卷顺序巡检

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::warn;

mod base_system;
mod catalog;
mod download;
mod inspector;
mod network_parser;

use base_system::config::load_or_create_with_base;
use base_system::context::Config;
use base_system::ledger::ProgressLedger;
use base_system::logging::{LogOptions, LogSystem};
use catalog::VersionEntry;
use download::chapter::ChapterSource;
use download::scheduler;
use network_parser::network::BibleComNetwork;

#[derive(Debug, Parser)]
#[command(name = "bible-chapter-downloader")]
#[command(about = "Scrape Bible chapters from bible.com")]
struct Cli {
    /// 指定要抓取的译本短码（默认抓取目录表中的全部译本）
    #[arg(long, num_args = 1..)]
    versions: Vec<String>,

    /// 指定要抓取的书卷码（如 GEN EXO LEV；默认全部 66 卷）
    #[arg(long, num_args = 1..)]
    books: Vec<String>,

    /// 工作线程数（覆盖配置文件中的 max_workers）
    #[arg(long)]
    workers: Option<usize>,

    /// 只显示各译本 data 目录下当前的书卷顺序，不抓取
    #[arg(long, default_value_t = false)]
    display_order: bool,

    /// 启用调试日志输出
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// 数据目录路径（用于存放 config.yml 和 logs 等文件，方便 Docker 挂载）
    #[arg(long)]
    data_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.as_ref().map(Path::new);
    let _log = init_logging(cli.debug, data_dir)?;

    let mut config =
        load_or_create_with_base::<Config>(data_dir).map_err(|e| anyhow!(e.to_string()))?;
    if let Some(workers) = cli.workers {
        config.max_workers = workers.max(1);
    }

    // 未知译本码已在 resolve 时警告跳过；全部未知时照常走完，只是无事可做
    let versions = resolve_versions(&cli.versions);

    if cli.display_order {
        for version in &versions {
            inspector::display_book_order(&config, version.code);
        }
        return Ok(());
    }

    let ledger = Arc::new(ProgressLedger::load(&config.ledger_path()));
    let network: Arc<dyn ChapterSource> = Arc::new(BibleComNetwork::new(&config)?);

    let totals = if cli.books.is_empty() {
        scheduler::run_bulk(&network, &config, &ledger, &versions)
    } else {
        scheduler::run_selective(network.as_ref(), &config, &ledger, &versions, &cli.books)
    };

    // 抓取结束后照例打印一遍磁盘书卷顺序，便于人工核对
    for version in &versions {
        inspector::display_book_order(&config, version.code);
    }

    println!("\nFinal Download Summary:");
    for (version, count) in &totals {
        println!("{version}: {count} chapters downloaded");
    }

    Ok(())
}

/// 把命令行译本码解析为目录表条目；未知码记日志跳过，不中断其余工作。
fn resolve_versions(requested: &[String]) -> Vec<VersionEntry> {
    if requested.is_empty() {
        return catalog::all_versions().collect();
    }
    requested
        .iter()
        .filter_map(|code| {
            let found = catalog::find_version(code);
            if found.is_none() {
                warn!("未知译本码: {code}，跳过");
            }
            found
        })
        .collect()
}

fn init_logging(debug: bool, base_dir: Option<&Path>) -> Result<LogSystem> {
    let opts = LogOptions {
        debug,
        use_color: true,
        archive_on_exit: true,
        console: true,
    };
    LogSystem::init_with_base(opts, base_dir).map_err(|e| anyhow!(e))
}
