//! 调度：批量模式（每译本一个工作池）与指定书卷的顺序模式。
//!
//! 译本之间严格串行，同一译本内的书卷并发；
//! 单卷书失败只影响自己，不影响兄弟任务。

use std::sync::Arc;
use std::thread;

use crossbeam_channel as channel;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{error, info, warn};

use super::book::download_book;
use super::chapter::ChapterSource;
use super::models::DownloadTotals;
use crate::base_system::context::Config;
use crate::base_system::ledger::ProgressLedger;
use crate::catalog::{self, VersionEntry};

/// 批量模式：每个译本提交全部 66 卷书到一个固定大小的工作池。
pub fn run_bulk(
    source: &Arc<dyn ChapterSource>,
    config: &Config,
    ledger: &Arc<ProgressLedger>,
    versions: &[VersionEntry],
) -> DownloadTotals {
    let mut totals = DownloadTotals::new();
    let mut grand_total: u32 = 0;
    let book_count = catalog::all_books().count();
    let bar = make_overall_bar((versions.len() * book_count) as u64);
    let workers = config.max_workers.max(1);

    for version in versions {
        info!("开始处理译本 {}（{} 个工作线程）", version.code, workers);

        let (job_tx, job_rx) = channel::unbounded::<catalog::BookEntry>();
        let (evt_tx, evt_rx) = channel::unbounded::<u32>();

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let evt_tx = evt_tx.clone();
            let source = Arc::clone(source);
            let ledger = Arc::clone(ledger);
            let config = config.clone();
            let version = *version;

            handles.push(thread::spawn(move || {
                for book in job_rx.iter() {
                    let newly =
                        download_book(source.as_ref(), &config, &ledger, &book, &version);
                    let _ = evt_tx.send(newly);
                }
            }));
        }

        for book in catalog::all_books() {
            let _ = job_tx.send(book);
        }
        // 关闭任务通道，工作线程处理完即退出；
        // 丢掉本线程的事件发送端，evt_rx 在所有工作线程结束后自然断开。
        drop(job_tx);
        drop(evt_tx);

        let mut version_total: u32 = 0;
        for newly in evt_rx.iter() {
            version_total += newly;
            grand_total += newly;
            bar.inc(1);
            bar.set_message(format!("已下载 {grand_total} 章"));
        }

        for handle in handles {
            if handle.join().is_err() {
                error!("{} 的书卷任务异常退出", version.code);
            }
        }

        totals.insert(version.code.to_string(), version_total);
        info!(
            "译本 {} 处理完成，本次新下载 {} 章",
            version.code, version_total
        );
    }

    bar.finish_and_clear();
    totals
}

/// 指定书卷模式：译本 × 书卷逐个串行处理，未知书卷码记日志跳过。
pub fn run_selective(
    source: &dyn ChapterSource,
    config: &Config,
    ledger: &ProgressLedger,
    versions: &[VersionEntry],
    books: &[String],
) -> DownloadTotals {
    let mut totals = DownloadTotals::new();
    let mut grand_total: u32 = 0;
    let bar = make_overall_bar((versions.len() * books.len()) as u64);

    for version in versions {
        let mut version_total: u32 = 0;
        for code in books {
            if let Some(book) = catalog::find_book(code) {
                let newly = download_book(source, config, ledger, &book, version);
                version_total += newly;
                grand_total += newly;
            } else {
                warn!("未知书卷码: {code}，跳过");
            }
            bar.inc(1);
            bar.set_message(format!("已下载 {grand_total} 章"));
        }
        totals.insert(version.code.to_string(), version_total);
    }

    bar.finish_and_clear();
    totals
}

fn make_overall_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
    let style = ProgressStyle::with_template(
        "{prefix} [{elapsed_precise}] {wide_bar} {pos}/{len} ({eta}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-");
    bar.set_style(style);
    bar.set_prefix("整体进度");
    bar
}
