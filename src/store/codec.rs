//! Context 记录的二进制编码
//!
//! 格式：4 字节魔数 `CTX1`，随后是 bincode 编码的 [`Context`]。
//! bincode 为序列和每个字符串写入 u64 长度前缀。

use super::Context;
use crate::error::{StoreError, StoreResult};
use bincode::Options;

/// 文件头魔数（含格式版本）
pub const MAGIC: &[u8; 4] = b"CTX1";

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// 将 Context 编码为完整的文件内容
pub fn encode(context: &Context) -> StoreResult<Vec<u8>> {
    let payload = options()
        .serialize(context)
        .map_err(|e| StoreError::Encode(e.to_string()))?;

    let mut bytes = Vec::with_capacity(MAGIC.len() + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// 从文件内容解码 Context
///
/// 拒绝过短的内容、未知的文件头、截断或带有多余字节的负载
pub fn decode(bytes: &[u8]) -> StoreResult<Context> {
    if bytes.len() < MAGIC.len() {
        return Err(StoreError::Decode(format!(
            "file too short ({} bytes)",
            bytes.len()
        )));
    }

    let (header, payload) = bytes.split_at(MAGIC.len());
    if header != MAGIC {
        return Err(StoreError::Decode(format!(
            "unrecognized header {:02x?}",
            header
        )));
    }

    options()
        .with_limit(payload.len() as u64)
        .deserialize(payload)
        .map_err(|e| StoreError::Decode(e.to_string()))
}
