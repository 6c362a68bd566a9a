/// 追加在 (可能已混淆的) 消息之后的结束标记。
/// 提取时一旦解码出该字节序列即停止扫描。
pub const END_MARKER: &[u8] = b"###END###";

/// RGBA 像素缓冲区中每个像素占用的字节数。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 每个像素中可写入数据的通道数 (R, G, B)。Alpha 通道永远不被修改。
pub const DATA_CHANNELS: usize = 3;

pub const BITS_PER_BYTE: usize = 8;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";

/// 隐写结果始终以 PNG 保存。
pub const OUTPUT_IMAGE_EXTENSION: &str = "png";

pub const RECOVERED_TEXT_EXTENSION: &str = "txt";
