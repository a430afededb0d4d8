//! 进度台账：`progress.json` 记录每个（译本 → 书卷）已连续完成的章数。
//!
//! 语义约定：
//! - 计数 N 表示第 1..=N 章均已成功落盘（书卷驱动只会顺序推进，不会跳章）；
//! - 加载失败一律按空台账处理（fail-open），代价只是重复下载，不会中断运行；
//! - 每次递增都同步整体重写文件，写失败只记日志。

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info, warn};

/// 译本码 → 书卷码 → 已完成章数。BTreeMap 保证落盘后键序稳定。
pub type LedgerMap = BTreeMap<String, BTreeMap<String, u32>>;

pub struct ProgressLedger {
    path: PathBuf,
    // 互斥区覆盖“递增 + 写盘”整段：并发的 record_completion 落在不同
    // 书卷键上，但整文件重写必须串行，否则两次保存会互相覆盖。
    inner: Mutex<LedgerMap>,
}

impl ProgressLedger {
    pub fn load(path: &Path) -> Self {
        let map = match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => {
                warn!("{} 为空，按全新进度开始", path.display());
                LedgerMap::new()
            }
            Ok(raw) => match serde_json::from_str::<LedgerMap>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!("解析 {} 失败: {err}，按全新进度开始", path.display());
                    LedgerMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("未找到 {}，按全新进度开始", path.display());
                LedgerMap::new()
            }
            Err(err) => {
                warn!("读取 {} 失败: {err}，按全新进度开始", path.display());
                LedgerMap::new()
            }
        };

        Self {
            path: path.to_path_buf(),
            inner: Mutex::new(map),
        }
    }

    /// 该（译本, 书卷）已完成的章数；没有记录即为 0。
    pub fn completed_count(&self, version: &str, book: &str) -> u32 {
        let map = self.lock();
        map.get(version)
            .and_then(|books| books.get(book))
            .copied()
            .unwrap_or(0)
    }

    /// 记录一章完成：计数 +1 并立即写盘。
    ///
    /// 调用方（书卷驱动）保证按章序调用，这里不做乱序校验。
    pub fn record_completion(&self, version: &str, book: &str) {
        let mut map = self.lock();
        *map.entry(version.to_string())
            .or_default()
            .entry(book.to_string())
            .or_insert(0) += 1;
        self.save_locked(&map);
    }

    fn save_locked(&self, map: &LedgerMap) {
        let payload = match serde_json::to_string_pretty(map) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("序列化进度失败: {err}");
                return;
            }
        };
        match fs::write(&self.path, payload) {
            Ok(()) => debug!("进度已保存到 {}", self.path.display()),
            Err(err) => warn!("保存进度到 {} 失败: {err}", self.path.display()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedgerMap> {
        // 持锁线程不会 panic 在锁区内留下半更新（BTreeMap 递增是单步操作），
        // 中毒时直接取回内部数据继续。
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> LedgerMap {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ProgressLedger::load(&dir.path().join("progress.json"));
        assert_eq!(ledger.completed_count("KJV", "GEN"), 0);
        assert!(ledger.snapshot().is_empty());
    }

    #[test]
    fn unreadable_content_is_fail_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        fs::write(&path, "").unwrap();
        assert!(ProgressLedger::load(&path).snapshot().is_empty());

        fs::write(&path, "{ not json").unwrap();
        assert!(ProgressLedger::load(&path).snapshot().is_empty());

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(ProgressLedger::load(&path).snapshot().is_empty());
    }

    #[test]
    fn record_completion_persists_every_increment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let ledger = ProgressLedger::load(&path);

        ledger.record_completion("KJV", "RUT");
        ledger.record_completion("KJV", "RUT");
        ledger.record_completion("NIV", "GEN");

        assert_eq!(ledger.completed_count("KJV", "RUT"), 2);
        assert_eq!(ledger.completed_count("NIV", "GEN"), 1);
        assert_eq!(ledger.completed_count("NIV", "RUT"), 0);

        // 文件内容与内存一致，且新实例可据此恢复
        let reloaded = ProgressLedger::load(&path);
        assert_eq!(reloaded.completed_count("KJV", "RUT"), 2);
        assert_eq!(reloaded.completed_count("NIV", "GEN"), 1);
    }

    #[test]
    fn concurrent_increments_on_different_books_both_land() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let ledger = std::sync::Arc::new(ProgressLedger::load(&path));

        let mut handles = Vec::new();
        for book in ["GEN", "EXO", "LEV", "NUM"] {
            let ledger = ledger.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..5 {
                    ledger.record_completion("KJV", book);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let reloaded = ProgressLedger::load(&path);
        for book in ["GEN", "EXO", "LEV", "NUM"] {
            assert_eq!(reloaded.completed_count("KJV", book), 5);
        }
    }
}
