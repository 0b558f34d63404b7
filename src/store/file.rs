//! 基于本地文件的状态存储

use super::lock::{sibling, LockGuard};
use super::{codec, Context, StateStore};
use crate::error::{StoreError, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 默认状态文件名（当前目录下的隐藏文件）
pub const DEFAULT_STATE_FILE: &str = ".ctx";

/// 将 Context 保存在单个本地文件中的存储
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 状态文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoreResult<Context> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            _ => StoreError::io(&self.path, e),
        })?;
        let context = codec::decode(&bytes)?;
        debug!("Loaded {} file(s) from {:?}", context.len(), self.path);
        Ok(context)
    }

    /// 先写临时文件再重命名，调用方需持有写锁
    fn write(&self, context: &Context) -> StoreResult<()> {
        let bytes = codec::encode(context)?;
        let temp_path = sibling(&self.path, ".tmp");

        fs::write(&temp_path, &bytes).map_err(|e| StoreError::io(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io(&self.path, e));
        }

        debug!("Wrote {} file(s) to {:?}", context.len(), self.path);
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}

impl StateStore for FileStore {
    fn initialize(&self) -> StoreResult<()> {
        let _lock = LockGuard::acquire(&self.path)?;
        self.write(&Context::new())?;
        info!("Initialized context at {:?}", self.path);
        Ok(())
    }

    fn load(&self) -> StoreResult<Context> {
        self.read()
    }

    fn save(&self, context: &Context) -> StoreResult<()> {
        let _lock = LockGuard::acquire(&self.path)?;
        self.write(context)
    }

    fn update(&self, f: &mut dyn FnMut(&mut Context)) -> StoreResult<Context> {
        let _lock = LockGuard::acquire(&self.path)?;
        let mut context = self.read()?;
        f(&mut context);
        self.write(&context)?;
        Ok(context)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
