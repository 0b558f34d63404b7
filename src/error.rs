//! 错误类型
//!
//! 状态存储层的错误分类：I/O 错误与解码错误

use std::path::PathBuf;
use thiserror::Error;

/// 状态存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no context found at {} (run `ctx init` first)", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt context file: {0}")]
    Decode(String),

    #[error("failed to encode context: {0}")]
    Encode(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
