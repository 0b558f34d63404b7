//! 状态存储层
//!
//! 负责 Context 记录的读取与持久化
//!
//! ## 模块结构
//!
//! - [`context`](context::Context) - Context 数据模型
//! - [`codec`] - 二进制记录格式
//! - [`file`](file::FileStore) - 基于本地文件的实现
//! - [`memory`](memory::MemoryStore) - 内存实现，用于测试
//! - [`lock`](lock::LockGuard) - 单写者锁

pub mod codec;
pub mod context;
pub mod file;
pub mod lock;
pub mod memory;

pub use context::Context;
pub use file::{FileStore, DEFAULT_STATE_FILE};
pub use lock::LockGuard;
pub use memory::MemoryStore;

use crate::error::StoreResult;

/// 状态存储抽象 trait
///
/// 命令分发器只依赖该接口，测试中可以注入 [`MemoryStore`]
pub trait StateStore: Send + Sync {
    /// 写入空的 Context，覆盖已有状态
    fn initialize(&self) -> StoreResult<()>;

    /// 读取当前 Context
    ///
    /// # Returns
    ///
    /// 状态不存在时返回 `StoreError::NotFound`，内容损坏时返回 `StoreError::Decode`
    fn load(&self) -> StoreResult<Context>;

    /// 用给定 Context 完整替换已保存的状态
    fn save(&self, context: &Context) -> StoreResult<()>;

    /// 读取、修改并写回 Context
    ///
    /// # Arguments
    ///
    /// * `f` - 对已加载 Context 的修改
    ///
    /// # Returns
    ///
    /// 写回后的 Context
    fn update(&self, f: &mut dyn FnMut(&mut Context)) -> StoreResult<Context> {
        let mut context = self.load()?;
        f(&mut context);
        self.save(&context)?;
        Ok(context)
    }

    /// 状态所在位置的描述，用于输出
    fn location(&self) -> String;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn initialize(&self) -> StoreResult<()> {
        (**self).initialize()
    }

    fn load(&self) -> StoreResult<Context> {
        (**self).load()
    }

    fn save(&self, context: &Context) -> StoreResult<()> {
        (**self).save(context)
    }

    fn update(&self, f: &mut dyn FnMut(&mut Context)) -> StoreResult<Context> {
        (**self).update(f)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
