//! # 负载封装模块
//!
//! 负载格式为 `混淆后的消息 ++ END_MARKER`，不含长度字段。
//! 如果消息本身包含结束标记，提取时会在第一次出现处截断。

use crate::cipher;
use crate::constants::END_MARKER;

/// 混淆消息并追加结束标记。
pub fn frame(message: &[u8], password: Option<&[u8]>) -> Vec<u8> {
    let mut payload = cipher::apply(message, password);
    payload.extend_from_slice(END_MARKER);
    payload
}

/// 返回 `prefix` 中第一个结束标记之前的字节；没有标记时返回 `None`。
pub fn find_and_strip(prefix: &[u8]) -> Option<&[u8]> {
    prefix
        .windows(END_MARKER.len())
        .position(|window| window == END_MARKER)
        .map(|end| &prefix[..end])
}

/// 撤销混淆。
pub fn unframe(payload: &[u8], password: Option<&[u8]>) -> Vec<u8> {
    cipher::apply(payload, password)
}
