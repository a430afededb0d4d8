//! 只读巡检：打印某译本在磁盘上已有的书卷目录顺序。

use crate::base_system::book_paths;
use crate::base_system::context::Config;

/// 人工核对用；目录不存在只打印提示，不算错误。
pub fn display_book_order(config: &Config, version_code: &str) {
    let Some(books) = book_paths::list_book_dirs(config, version_code) else {
        println!("No data found for version {version_code}");
        return;
    };

    println!("Current order of books for {version_code}:");
    for book_dir in books {
        println!("{book_dir}");
    }
}
