//! 测试公用件：可编程章节来源桩与临时目录配置。

use std::sync::Mutex;

use super::chapter::ChapterSource;
use super::models::ChapterVerse;
use crate::base_system::context::Config;
use crate::catalog::{BookEntry, VersionEntry};
use crate::network_parser::network::FetchError;

/// 按（书卷, 章）指定失败点，并记录收到的调用序列。
pub(crate) struct StubSource {
    fail_on: Mutex<Vec<(&'static str, u32)>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl StubSource {
    pub(crate) fn new() -> Self {
        Self {
            fail_on: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fail_on(self, book: &'static str, chapter: u32) -> Self {
        self.fail_on.lock().unwrap().push((book, chapter));
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChapterSource for StubSource {
    fn fetch_verses(
        &self,
        book: &BookEntry,
        chapter: u32,
        _version: &VersionEntry,
    ) -> Result<Vec<ChapterVerse>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((book.code.to_string(), chapter));
        if self.fail_on.lock().unwrap().contains(&(book.code, chapter)) {
            return Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY));
        }
        Ok(vec![ChapterVerse {
            verse_number: "1".to_string(),
            text: format!("{} {} 正文", book.code, chapter),
        }])
    }
}

/// 指向临时目录、关掉章节间隔的测试配置。
pub(crate) fn test_config(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.save_path = dir.to_string_lossy().to_string();
    config.chapter_delay = 0;
    config
}
