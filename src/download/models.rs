//! 数据模型与逐层错误类型。

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network_parser::network::FetchError;

/// 单节经文。章节文件就是按页面顺序排列的 `ChapterVerse` 列表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVerse {
    pub verse_number: String,
    pub text: String,
}

/// 译本码 → 本次运行新下载的章数。汇总打印用。
pub type DownloadTotals = BTreeMap<String, u32>;

/// 单章下载失败的原因。任何一种都意味着该章不计完成、台账不动。
#[derive(Debug, Error)]
pub enum ChapterError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("序列化章节失败: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("写入章节文件失败: {0}")]
    Io(#[from] io::Error),
}
