//! 全局配置结构（Config）与默认值。
//!
//! 该模块同时提供生成 `config.yml` 的字段元信息。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config::{ConfigSpec, FieldMeta};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // 网络配置
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // 抓取节奏
    #[serde(default = "default_chapter_delay")]
    pub chapter_delay: u64,

    // 路径配置
    #[serde(default)]
    pub save_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
            chapter_delay: default_chapter_delay(),
            save_path: String::new(),
        }
    }
}

impl Config {
    /// 输出根目录：`save_path` 为空时使用当前工作目录。
    pub fn save_root(&self) -> PathBuf {
        if self.save_path.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(self.save_path.trim())
        }
    }

    /// 章节文件所在的数据根目录（`<save_root>/data`）。
    pub fn data_root(&self) -> PathBuf {
        self.save_root().join("data")
    }

    /// 进度台账文件路径（`<save_root>/progress.json`）。
    pub fn ledger_path(&self) -> PathBuf {
        self.save_root().join("progress.json")
    }
}

fn default_max_workers() -> usize {
    5
}

fn default_request_timeout() -> u64 {
    10
}

fn default_chapter_delay() -> u64 {
    2
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36".to_string()
}

impl ConfigSpec for Config {
    const FILE_NAME: &'static str = "config.yml";

    fn fields() -> &'static [FieldMeta] {
        &[
            FieldMeta {
                name: "max_workers",
                description: "每个译本抓取时的工作线程数",
            },
            FieldMeta {
                name: "request_timeout",
                description: "单次章节请求的超时时间（秒）",
            },
            FieldMeta {
                name: "user_agent",
                description: "请求使用的 User-Agent",
            },
            FieldMeta {
                name: "chapter_delay",
                description: "同一卷书相邻章节之间的间隔（秒），用于控制请求频率",
            },
            FieldMeta {
                name: "save_path",
                description: "输出根目录（留空表示当前目录；data/ 与 progress.json 均在其下）",
            },
        ]
    }
}
