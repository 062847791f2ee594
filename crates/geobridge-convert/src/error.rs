//! 转换与归档错误定义

use thiserror::Error;

/// 转换结果
///
/// - `Ok(Some(_))`: 转换成功
/// - `Ok(None)`: 输入为空，或属于已定义的退化情况
/// - `Err(_)`: 不支持的几何
pub type Conversion<T> = Result<Option<T>, ConvertError>;

/// 不支持的转换
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 该几何类型没有定义映射
    #[error("Conversion not implemented for {0}")]
    NotImplemented(&'static str),

    /// 内核无法提供所需的表示
    #[error("Cannot represent {kind}: {reason}")]
    Unrepresentable {
        kind: &'static str,
        reason: &'static str,
    },
}

impl ConvertError {
    pub(crate) fn unrepresentable(kind: &'static str, reason: &'static str) -> Self {
        ConvertError::Unrepresentable { kind, reason }
    }

    /// 是否为"未实现"信号
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ConvertError::NotImplemented(_))
    }
}

/// 归档编解码错误
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("MessagePack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    #[error("MessagePack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid archive format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),
}
