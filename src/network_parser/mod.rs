//! 网络与页面解析。
//!
//! - `network` — bible.com 章节页面的 HTTP 抓取
//! - `parser`  — 从页面 HTML 中提取经文节点

pub mod network;
pub mod parser;
