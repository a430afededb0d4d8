//! 单章下载：抓取 → 解析 → 落盘 → 记进度。
//!
//! 本层不做重试：一章失败就向上返回，由书卷驱动决定中止该卷。

use std::fs;

use tracing::info;

use super::models::{ChapterError, ChapterVerse};
use crate::base_system::book_paths;
use crate::base_system::context::Config;
use crate::base_system::ledger::ProgressLedger;
use crate::catalog::{BookEntry, VersionEntry};
use crate::network_parser::network::FetchError;

/// 章节内容来源。生产实现是 `BibleComNetwork`；
/// 测试用桩实现替换，调度/驱动逻辑即可离线验证。
pub trait ChapterSource: Send + Sync {
    fn fetch_verses(
        &self,
        book: &BookEntry,
        chapter: u32,
        version: &VersionEntry,
    ) -> Result<Vec<ChapterVerse>, FetchError>;
}

/// 下载一章并落盘。只有写盘成功后才会递增台账计数，
/// 失败路径上台账保持原值（下一轮从同一章续传）。
pub fn download_chapter(
    source: &dyn ChapterSource,
    config: &Config,
    ledger: &ProgressLedger,
    book: &BookEntry,
    chapter: u32,
    version: &VersionEntry,
) -> Result<(), ChapterError> {
    let verses = source.fetch_verses(book, chapter, version)?;

    let dir = book_paths::book_dir(config, version, book);
    fs::create_dir_all(&dir)?;

    let file_name = book_paths::chapter_file_name(book, chapter, version);
    let path = dir.join(&file_name);
    // pretty JSON；serde_json 默认不转义非 ASCII，原文字符原样落盘
    let payload = serde_json::to_vec_pretty(&verses)?;
    fs::write(&path, payload)?;
    info!("{} 已保存到 {}", file_name, dir.display());

    ledger.record_completion(version.code, book.code);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_book, find_version};
    use crate::download::testkit::{StubSource, test_config};

    #[test]
    fn successful_chapter_writes_artifact_and_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let ledger = ProgressLedger::load(&config.ledger_path());
        let source = StubSource::new();
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        download_chapter(&source, &config, &ledger, &rut, 1, &kjv).unwrap();

        let artifact = dir.path().join("data/KJV/09_RUT/RUT_001_KJV.json");
        let raw = std::fs::read_to_string(&artifact).unwrap();
        let verses: Vec<ChapterVerse> = serde_json::from_str(&raw).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].verse_number, "1");
        assert_eq!(ledger.completed_count("KJV", "RUT"), 1);
    }

    #[test]
    fn failed_fetch_leaves_ledger_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let ledger = ProgressLedger::load(&config.ledger_path());
        let source = StubSource::new().fail_on("RUT", 1);
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        let result = download_chapter(&source, &config, &ledger, &rut, 1, &kjv);
        assert!(matches!(result, Err(ChapterError::Fetch(_))));
        assert_eq!(ledger.completed_count("KJV", "RUT"), 0);
        assert!(!dir.path().join("data/KJV/09_RUT/RUT_001_KJV.json").exists());
    }
}
