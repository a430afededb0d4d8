//! 书卷驱动：从台账记录的位置续传，顺序逐章下载，首错即停。

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use super::chapter::{ChapterSource, download_chapter};
use crate::base_system::context::Config;
use crate::base_system::ledger::ProgressLedger;
use crate::catalog::{BookEntry, VersionEntry};

/// 下载一卷书中尚未完成的章节，返回本次新下载的章数。
///
/// 失败语义：某章失败即放弃该卷剩余章节（本轮内不重试），
/// 台账停在最后一章成功处，下一轮运行自然续传。
pub fn download_book(
    source: &dyn ChapterSource,
    config: &Config,
    ledger: &ProgressLedger,
    book: &BookEntry,
    version: &VersionEntry,
) -> u32 {
    let completed = ledger.completed_count(version.code, book.code);
    if completed >= book.chapters {
        info!("{} ({}) 已全部完成，跳过", book.code, version.code);
        return 0;
    }

    info!(
        "开始抓取 {} ({})，从第 {} 章起",
        book.code,
        version.code,
        completed + 1
    );

    let mut newly_downloaded = 0;
    for chapter in (completed + 1)..=book.chapters {
        match download_chapter(source, config, ledger, book, chapter, version) {
            Ok(()) => {
                newly_downloaded += 1;
                // 对远端的限频礼貌间隔，不是退避策略
                if chapter < book.chapters && config.chapter_delay > 0 {
                    thread::sleep(Duration::from_secs(config.chapter_delay));
                }
            }
            Err(err) => {
                warn!(
                    "{} 第 {} 章 ({}) 抓取失败: {err}，本轮跳过该卷剩余章节",
                    book.code, chapter, version.code
                );
                break;
            }
        }
    }
    newly_downloaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_system::ledger::ProgressLedger;
    use crate::catalog::{find_book, find_version};
    use crate::download::testkit::{StubSource, test_config};

    #[test]
    fn downloads_all_chapters_from_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let ledger = ProgressLedger::load(&config.ledger_path());
        let source = StubSource::new();
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        let count = download_book(&source, &config, &ledger, &rut, &kjv);
        assert_eq!(count, 4);
        assert_eq!(ledger.completed_count("KJV", "RUT"), 4);
        assert_eq!(
            source.calls(),
            vec![
                ("RUT".to_string(), 1),
                ("RUT".to_string(), 2),
                ("RUT".to_string(), 3),
                ("RUT".to_string(), 4),
            ]
        );
    }

    #[test]
    fn stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let ledger = ProgressLedger::load(&config.ledger_path());
        let source = StubSource::new().fail_on("RUT", 2);
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        let count = download_book(&source, &config, &ledger, &rut, &kjv);
        assert_eq!(count, 1);
        assert_eq!(ledger.completed_count("KJV", "RUT"), 1);
        // 第 3、4 章不应被尝试
        assert_eq!(
            source.calls(),
            vec![("RUT".to_string(), 1), ("RUT".to_string(), 2)]
        );
    }

    #[test]
    fn resumes_after_completed_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let ledger = ProgressLedger::load(&config.ledger_path());
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        // 先模拟一次中断在第 1 章之后的运行
        let first = StubSource::new().fail_on("RUT", 2);
        assert_eq!(download_book(&first, &config, &ledger, &rut, &kjv), 1);

        // 续传：从第 2 章开始，不重抓第 1 章
        let second = StubSource::new();
        assert_eq!(download_book(&second, &config, &ledger, &rut, &kjv), 3);
        assert_eq!(second.calls()[0], ("RUT".to_string(), 2));
        assert_eq!(ledger.completed_count("KJV", "RUT"), 4);
    }

    #[test]
    fn completed_book_makes_no_fetch_calls() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let ledger = ProgressLedger::load(&config.ledger_path());
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        let first = StubSource::new();
        download_book(&first, &config, &ledger, &rut, &kjv);

        let second = StubSource::new();
        assert_eq!(download_book(&second, &config, &ledger, &rut, &kjv), 0);
        assert!(second.calls().is_empty());
    }
}
