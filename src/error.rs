//! # 错误类型模块
//!
//! 核心编解码器的所有失败情况都以 [`StegoError`] 值返回，由调用层决定如何呈现。

/// 隐写核心可能返回的错误。
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 要隐藏的消息为空。
    #[error("The message to hide is empty.")]
    EmptyMessage,

    /// 加上结束标记后的消息超出图像的可用位数。
    #[error("Not enough space in the image: {required} bits required, {available} bits available.")]
    CapacityExceeded { required: usize, available: usize },

    /// 位序列长度不是 8 的倍数。正确使用时不应出现。
    #[error("Bit stream length {len} is not a multiple of 8.")]
    MalformedBitLength { len: usize },

    /// 扫描完整个缓冲区仍未找到结束标记。
    #[error("No hidden message found, or the image is corrupted.")]
    MarkerNotFound,
}
