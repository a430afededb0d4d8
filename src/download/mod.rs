//! 下载流程模块入口。
//!
//! 子模块：
//! - `models`    — 数据模型与错误类型（ChapterVerse / DownloadTotals 等）
//! - `chapter`   — 单章抓取-解析-落盘-记进度
//! - `book`      — 书卷驱动（续传、顺序推进、首错即停）
//! - `scheduler` — 批量/指定模式调度与进度条

pub mod book;
pub mod chapter;
pub mod models;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testkit;
