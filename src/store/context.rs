//! Context 数据模型

use serde::{Deserialize, Serialize};

/// 被跟踪文件的有序列表
///
/// 保留插入顺序，允许重复条目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    files: Vec<String>,
}

impl Context {
    /// 创建空的 Context
    pub fn new() -> Self {
        Self::default()
    }

    /// 按给定顺序追加文件，不去重
    pub fn add<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Context {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut context = Context::new();
        context.add(iter);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut context = Context::new();
        context.add(["b.txt", "a.txt"]);
        context.add(vec!["b.txt".to_string()]);

        assert_eq!(context.files(), ["b.txt", "a.txt", "b.txt"]);
        assert_eq!(context.len(), 3);
    }

    #[test]
    fn test_new_is_empty() {
        let context = Context::new();
        assert!(context.is_empty());
        assert_eq!(context, Context::default());
    }
}
