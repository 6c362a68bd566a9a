//! # steganocrypt 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位编解码、异或混淆、结束标记封装，
//! 以及在 RGBA 像素缓冲区中写入/读取负载的隐写引擎。
//! 核心部分不做任何 I/O，图像的解码与保存由 `handler` 模块负责。

// 声明库包含的所有模块。

pub mod bits;
pub mod cipher;
pub mod cli;
pub mod constants;
pub mod error;
pub mod framing;
pub mod handler;
pub mod steganography;

pub use error::StegoError;
pub use steganography::{embed, extract};
