//! 状态文件的写锁
//!
//! 在 `<state>.lock` 的文件句柄上持有操作系统建议锁，实现单写者约束。
//! 锁随句柄关闭释放，进程异常退出时由内核释放，残留的锁文件不影响后续加锁。

use crate::error::{StoreError, StoreResult};
use fs4::FileExt;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 在状态文件名后追加后缀，得到同目录下的辅助文件路径
pub(crate) fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// 独占写锁，离开作用域时释放
#[derive(Debug)]
pub struct LockGuard {
    path: PathBuf,
    _file: File,
}

impl LockGuard {
    /// 为状态文件获取写锁
    ///
    /// 其它写者持有锁时阻塞等待
    pub fn acquire(state: &Path) -> StoreResult<Self> {
        let path = sibling(state, ".lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;

        if file.try_lock_exclusive().is_err() {
            debug!("Waiting for lock {:?}", path);
            file.lock_exclusive().map_err(|e| StoreError::io(&path, e))?;
        }

        debug!("Acquired lock {:?}", path);
        Ok(Self { path, _file: file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
