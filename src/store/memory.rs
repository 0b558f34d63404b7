//! 内存状态存储

use super::{Context, StateStore};
use crate::error::{StoreError, StoreResult};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 保存在进程内存中的状态
///
/// 未初始化时 `load` 与缺失的状态文件行为一致
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<Context>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有 Context 创建
    pub fn with_context(context: Context) -> Self {
        Self {
            state: Mutex::new(Some(context)),
        }
    }

    /// 当前保存的 Context，未初始化时为 None
    pub fn snapshot(&self) -> Option<Context> {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, Option<Context>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateStore for MemoryStore {
    fn initialize(&self) -> StoreResult<()> {
        *self.state() = Some(Context::new());
        Ok(())
    }

    fn load(&self) -> StoreResult<Context> {
        self.state()
            .clone()
            .ok_or_else(|| StoreError::NotFound(PathBuf::from(self.location())))
    }

    fn save(&self, context: &Context) -> StoreResult<()> {
        *self.state() = Some(context.clone());
        Ok(())
    }

    fn update(&self, f: &mut dyn FnMut(&mut Context)) -> StoreResult<Context> {
        let mut state = self.state();
        let context = state
            .as_mut()
            .ok_or_else(|| StoreError::NotFound(PathBuf::from(self.location())))?;
        f(context);
        Ok(context.clone())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_before_initialize_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_update_appends() {
        let store = MemoryStore::new();
        store.initialize().unwrap();
        let updated = store.update(&mut |c: &mut Context| c.add(["x", "y"])).unwrap();
        assert_eq!(updated.files(), ["x", "y"]);
        assert_eq!(store.snapshot(), Some(updated));
    }
}
