//! bible.com 章节页面抓取。

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;
use tracing::debug;

use super::parser;
use crate::base_system::context::Config;
use crate::catalog::{BookEntry, VersionEntry};
use crate::download::chapter::ChapterSource;
use crate::download::models::ChapterVerse;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("请求失败: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP 状态异常: {0}")]
    Status(reqwest::StatusCode),
}

pub struct BibleComNetwork {
    client: Client,
}

impl BibleComNetwork {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or(HeaderValue::from_static("Mozilla/5.0")),
        );

        let client = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { client })
    }

    /// 章节页面 URL：`https://www.bible.com/bible/<译本ID>/<书卷>.<章>.<译本码>`。
    fn chapter_url(book: &BookEntry, chapter: u32, version: &VersionEntry) -> String {
        format!(
            "https://www.bible.com/bible/{}/{}.{}.{}",
            version.provider_id, book.code, chapter, version.code
        )
    }

    pub fn fetch_chapter_html(
        &self,
        book: &BookEntry,
        chapter: u32,
        version: &VersionEntry,
    ) -> Result<String, FetchError> {
        let url = Self::chapter_url(book, chapter, version);
        debug!("GET {url}");
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(resp.text()?)
    }
}

impl ChapterSource for BibleComNetwork {
    fn fetch_verses(
        &self,
        book: &BookEntry,
        chapter: u32,
        version: &VersionEntry,
    ) -> Result<Vec<ChapterVerse>, FetchError> {
        let html = self.fetch_chapter_html(book, chapter, version)?;
        Ok(parser::extract_verses(&html))
    }
}
