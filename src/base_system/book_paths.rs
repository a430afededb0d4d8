//! 存储布局：`data/<译本>/<两位序号>_<书卷>/<书卷>_<三位章号>_<译本>.json`。

use std::path::PathBuf;

use crate::base_system::context::Config;
use crate::catalog::{BookEntry, VersionEntry};

/// 某个译本的存储根目录，例如 `data/KJV`。
pub fn version_dir(config: &Config, version_code: &str) -> PathBuf {
    config.data_root().join(version_code)
}

/// 带序号前缀的书卷目录名，例如 RUT → `09_RUT`。
pub fn numbered_book_name(book: &BookEntry) -> String {
    format!("{}_{}", book.ordinal_prefix(), book.code)
}

pub fn book_dir(config: &Config, version: &VersionEntry, book: &BookEntry) -> PathBuf {
    version_dir(config, version.code).join(numbered_book_name(book))
}

/// 章节文件名，例如 `RUT_004_KJV.json`。
pub fn chapter_file_name(book: &BookEntry, chapter: u32, version: &VersionEntry) -> String {
    format!("{}_{:03}_{}.json", book.code, chapter, version.code)
}

/// 列出某译本目录下已有的书卷目录名（字典序）。目录不存在返回 None。
pub fn list_book_dirs(config: &Config, version_code: &str) -> Option<Vec<String>> {
    let dir = version_dir(config, version_code);
    let entries = std::fs::read_dir(&dir).ok()?;
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_book, find_version};

    #[test]
    fn layout_matches_naming_convention() {
        let mut config = Config::default();
        config.save_path = "/tmp/bible".to_string();
        let kjv = find_version("KJV").unwrap();
        let rut = find_book("RUT").unwrap();

        assert_eq!(numbered_book_name(&rut), "09_RUT");
        assert_eq!(chapter_file_name(&rut, 4, &kjv), "RUT_004_KJV.json");
        assert_eq!(
            book_dir(&config, &kjv, &rut),
            PathBuf::from("/tmp/bible/data/KJV/09_RUT")
        );
    }

    #[test]
    fn list_book_dirs_is_sorted_and_fail_soft() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.save_path = dir.path().to_string_lossy().to_string();

        assert!(list_book_dirs(&config, "KJV").is_none());

        let root = version_dir(&config, "KJV");
        std::fs::create_dir_all(root.join("09_RUT")).unwrap();
        std::fs::create_dir_all(root.join("01_GEN")).unwrap();

        assert_eq!(
            list_book_dirs(&config, "KJV").unwrap(),
            vec!["01_GEN".to_string(), "09_RUT".to_string()]
        );
    }
}
