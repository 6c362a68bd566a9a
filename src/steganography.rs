//! # 隐写核心模块
//!
//! 在 RGBA 像素缓冲区的 R、G、B 通道最低有效位中写入或读取负载位流。
//! 像素按顺序遍历，每个像素依次使用 R、G、B 三个通道，Alpha 通道始终跳过。

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL, DATA_CHANNELS, END_MARKER};
use crate::error::StegoError;
use crate::framing::{find_and_strip, frame, unframe};
use log::debug;

/// 长度为 `buffer_len` 的像素缓冲区可写入的位数。不完整的末尾像素不计入。
pub fn capacity_bits(buffer_len: usize) -> usize {
    (buffer_len / CHANNELS_PER_PIXEL) * DATA_CHANNELS
}

/// 隐藏 `message_len` 字节的消息 (含结束标记) 所需的位数。
pub fn required_bits(message_len: usize) -> usize {
    (message_len + END_MARKER.len()) * BITS_PER_BYTE
}

/// 长度为 `buffer_len` 的像素缓冲区最多能隐藏的消息字节数。
pub fn max_message_len(buffer_len: usize) -> usize {
    (capacity_bits(buffer_len) / BITS_PER_BYTE).saturating_sub(END_MARKER.len())
}

/// 将 `message` 隐藏到像素缓冲区中，原地修改 `pixels`。
///
/// 消息先用 `password` 混淆，再追加结束标记，最后按 MSB 优先写入各数据通道的最低位。
/// 写完最后一位之后的像素保持不变。
///
/// # Errors
///
/// * 消息为空时返回 [`StegoError::EmptyMessage`]。
/// * 位流超出 [`capacity_bits`] 时返回 [`StegoError::CapacityExceeded`]。
///
/// 以上两种情况下缓冲区都不会被修改。
pub fn embed(pixels: &mut [u8], message: &[u8], password: Option<&[u8]>) -> Result<(), StegoError> {
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }

    let bits = bytes_to_bits(&frame(message, password));
    let available = capacity_bits(pixels.len());
    if bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available,
        });
    }

    debug!(
        "embedding {} bits into {} pixels ({} bits available)",
        bits.len(),
        pixels.len() / CHANNELS_PER_PIXEL,
        available
    );

    pixels
        .chunks_exact_mut(CHANNELS_PER_PIXEL)
        .flat_map(|pixel| pixel.iter_mut().take(DATA_CHANNELS))
        .zip(bits)
        .for_each(|(sample, bit)| *sample = (*sample & 0xFE) | bit);

    Ok(())
}

/// 从像素缓冲区中恢复隐藏的消息。
///
/// 每读满一个字节就检查一次结束标记，找到后立即停止，不再读取后续像素。
/// 密码错误不会报错，只会得到无意义的字节。
///
/// # Errors
///
/// * 扫描完整个缓冲区仍未找到结束标记时返回 [`StegoError::MarkerNotFound`]。
pub fn extract(pixels: &[u8], password: Option<&[u8]>) -> Result<Vec<u8>, StegoError> {
    let samples = pixels
        .chunks_exact(CHANNELS_PER_PIXEL)
        .flat_map(|pixel| pixel.iter().take(DATA_CHANNELS));

    let mut pending = Vec::with_capacity(BITS_PER_BYTE);
    let mut decoded = Vec::new();

    for &sample in samples {
        pending.push(sample & 1);
        if pending.len() < BITS_PER_BYTE {
            continue;
        }

        decoded.extend(bits_to_bytes(&pending)?);
        pending.clear();

        // 每个字节都会检查，第一次出现的标记必然以当前字节结尾。
        if decoded.ends_with(END_MARKER) {
            if let Some(payload) = find_and_strip(&decoded) {
                debug!("end marker found after {} bytes", decoded.len());
                return Ok(unframe(payload, password));
            }
        }
    }

    debug!(
        "scanned {} bytes without finding the end marker",
        decoded.len()
    );
    Err(StegoError::MarkerNotFound)
}
