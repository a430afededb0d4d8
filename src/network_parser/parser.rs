//! 章节页面解析：提取所有带 `data-usfm` 属性的 span 节点。
//!
//! bible.com 的经文结构是嵌套 span（节号 label、正文 content 等都在
//! 经文 span 内部），这里用"开标签正则 + 配平扫描"取出整个元素体，
//! 再去标签、解实体、收尾 trim。

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::download::models::ChapterVerse;

// 编译一次复用的正则缓存
fn re_verse_open() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| {
        Regex::new(r#"(?is)<span\b[^>]*?\bdata-usfm\s*=\s*"([^"]*)"[^>]*>"#).unwrap()
    })
}

fn re_span_token() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| Regex::new(r"(?is)<span\b[^>]*>|</span\s*>").unwrap())
}

fn re_all_tags() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| Regex::new(r"(?is)<[^>]+>").unwrap())
}

/// 按文档顺序提取经文。`data-usfm` 形如 `GEN.1.1`，节号取最后一段。
///
/// 页面上没有经文节点时返回空列表（例如 200 但内容是报错页），
/// 与"解析失败"不同，这不算错误。
pub fn extract_verses(html: &str) -> Vec<ChapterVerse> {
    let mut out = Vec::new();
    for cap in re_verse_open().captures_iter(html) {
        let Some(open) = cap.get(0) else {
            continue;
        };
        let usfm = cap.get(1).map(|m| m.as_str()).unwrap_or("");
        let body = span_body(&html[open.end()..]);
        out.push(ChapterVerse {
            verse_number: usfm.rsplit('.').next().unwrap_or("").to_string(),
            text: plain_text(body),
        });
    }
    out
}

/// 从开标签之后的位置起，配平嵌套 span，返回元素体切片。
/// 页面残缺（缺闭标签）时取剩余全部。
fn span_body(rest: &str) -> &str {
    let mut depth = 1usize;
    for token in re_span_token().find_iter(rest) {
        if token.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return &rest[..token.start()];
            }
        } else {
            depth += 1;
        }
    }
    rest
}

fn plain_text(fragment: &str) -> String {
    let stripped = re_all_tags().replace_all(fragment, "");
    unescape_basic_entities(stripped.as_ref()).trim().to_string()
}

fn unescape_basic_entities(s: &str) -> Cow<'_, str> {
    if !(s.contains("&amp;")
        || s.contains("&lt;")
        || s.contains("&gt;")
        || s.contains("&quot;")
        || s.contains("&#34;")
        || s.contains("&#39;")
        || s.contains("&#x27;")
        || s.contains("&#x22;")
        || s.contains("&nbsp;"))
    {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace("&nbsp;", " ")
            .replace("&quot;", "\"")
            .replace("&#34;", "\"")
            .replace("&#x22;", "\"")
            .replace("&#39;", "'")
            .replace("&#x27;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}
