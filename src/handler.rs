//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调图像解码/编码、文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{
    HIDDEN_IMAGE_PREFIX, OUTPUT_IMAGE_EXTENSION, RECOVERED_TEXT_EXTENSION, RECOVERED_TEXT_PREFIX,
};
use crate::error::StegoError;
use crate::steganography::{capacity_bits, embed, extract, max_message_len};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和消息、调用隐写核心函数将消息写入像素，
/// 最后将结果以 PNG 格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、消息与密码的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输入图像不是受支持的无损格式，或无法解码。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取文本文件，或消息为空。
/// * 图像没有足够的空间来隐藏消息。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, HIDDEN_IMAGE_PREFIX, OUTPUT_IMAGE_EXTENSION));
    ensure_can_write(&dest, args.force)?;

    let message = match (&args.text, &args.message) {
        (Some(path), _) => fs::read(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, Some(message)) => message.clone().into_bytes(),
        (None, None) => anyhow::bail!("Either a text file or a message must be provided."),
    };

    let mut picture = load_picture(&args.image)?;
    let password = args.password.as_deref().map(str::as_bytes);

    match embed(&mut picture, &message, password) {
        Ok(()) => {}
        Err(StegoError::CapacityExceeded {
            required,
            available,
        }) => anyhow::bail!(
            "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        Err(StegoError::EmptyMessage) => {
            anyhow::bail!("The message is empty. \nThere is nothing to hide.")
        }
        Err(err) => return Err(err).context("Failed to hide the message in the image."),
    }
    info!(
        "hid {} bytes in {}{}",
        message.len(),
        args.image.display(),
        if password.is_some() { " (obfuscated)" } else { "" }
    );

    picture
        .save_with_format(&dest, ImageFormat::Png)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                dest.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用恢复核心函数提取消息并撤销混淆，
/// 最后将恢复的内容写入目标文本文件。
///
/// 密码错误不会被检测出来，得到的内容将是无意义的字节。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中没有找到结束标记。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = args
        .text
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, RECOVERED_TEXT_PREFIX, RECOVERED_TEXT_EXTENSION));
    ensure_can_write(&text_path, args.force)?;

    let picture = load_picture(&args.image)?;
    let password = args.password.as_deref().map(str::as_bytes);

    let text = extract(&picture, password).with_context(|| {
        format!(
            "No hidden message found in '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("recovered {} bytes from {}", text.len(), args.image.display());

    fs::write(&text_path, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 输出图像的像素数、可用位数以及最多能隐藏的消息字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = load_picture(&args.image)?;
    let (width, height) = picture.dimensions();

    println!(
        "{}: {}x{} pixels, {} usable bits, up to {} bytes of message",
        args.image.to_string_lossy().bold(),
        width,
        height,
        capacity_bits(picture.len()).to_string().green(),
        max_message_len(picture.len()).to_string().green().bold()
    );
    Ok(())
}

/// 读取图像并转换为 8 位 RGBA 像素缓冲区。
///
/// 只接受无损格式；有损压缩会破坏最低有效位。
fn load_picture(path: &Path) -> Result<RgbaImage> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unsupported image format: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        matches!(
            format,
            ImageFormat::Png
                | ImageFormat::Bmp
                | ImageFormat::Tiff
                | ImageFormat::WebP
                | ImageFormat::Qoi
        ),
        "Unsupported image format: {} ({:?}). \nOnly lossless formats such as PNG or BMP can carry hidden data.",
        path.to_string_lossy().red().bold(),
        format
    );

    let picture = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgba8();

    debug!(
        "decoded {} as {:?}, {}x{}",
        path.display(),
        format,
        picture.width(),
        picture.height()
    );
    Ok(picture)
}

/// 在 `source` 所在目录下生成 `<prefix><文件名>.<extension>` 形式的默认输出路径。
fn sibling_path(source: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    source.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 目标文件已存在且未允许覆盖时返回错误。
fn ensure_can_write(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_sit_next_to_the_input() {
        let image = Path::new("/tmp/pictures/holiday.bmp");
        assert_eq!(
            sibling_path(image, HIDDEN_IMAGE_PREFIX, OUTPUT_IMAGE_EXTENSION),
            PathBuf::from("/tmp/pictures/doctored_holiday.png")
        );
        assert_eq!(
            sibling_path(
                Path::new("doctored_holiday.png"),
                RECOVERED_TEXT_PREFIX,
                RECOVERED_TEXT_EXTENSION
            ),
            PathBuf::from("recovered_doctored_holiday.txt")
        );
    }

    #[test]
    fn lossy_formats_are_rejected() {
        let err = load_picture(Path::new("photo.jpg")).unwrap_err();
        assert!(err.to_string().contains("Unsupported image format"));

        let err = load_picture(Path::new("no_extension")).unwrap_err();
        assert!(err.to_string().contains("Unsupported image format"));
    }
}
