//! RGB565 原始图片与描述文件模块
//!
//! # 设计思路
//!
//! `.raw` 文件保持设备端要求的格式：每像素 2 字节、行优先、无文件头。
//! 宽高通过同名 `.json` 描述文件随行传递，读写时互相校验。
//!
//! # 实现思路
//!
//! - 描述文件使用 `serde_json` 序列化，字段即设备端地图元数据中的尺寸部分。
//! - 写入时先序列化描述再落盘，读取时先读描述再按尺寸校验像素长度。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::raster::{self, RasterBuffer, codec::BYTES_PER_PIXEL};

/// 像素编码格式。目前设备只支持 RGB565。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorFormat {
    #[serde(rename = "RGB565")]
    Rgb565,
}

/// `.raw` 文件的描述信息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImageDescriptor {
    /// 像素文件名（不含目录）。
    pub file: String,
    pub format: ColorFormat,
    pub width: u32,
    pub height: u32,
}

impl RawImageDescriptor {
    /// 像素文件应有的字节数。
    pub fn expected_len(&self) -> u64 {
        self.width as u64 * self.height as u64 * BYTES_PER_PIXEL as u64
    }
}

/// 描述文件路径：与像素文件同名，扩展名为 `.json`。
pub fn descriptor_path(raw_path: &Path) -> PathBuf {
    raw_path.with_extension("json")
}

/// 编码并写出 `.raw` 与描述文件。
///
/// 描述文件先序列化，任一文件写入失败时不会留下缺少描述的 `.raw`。
///
/// # 返回
/// - `Ok(RawImageDescriptor)` — 已写入的描述信息
/// - `Err(AppError::Io)` — 写文件失败
pub fn write_raw_image(
    raw_path: &Path,
    raster: &RasterBuffer,
) -> Result<RawImageDescriptor, AppError> {
    let file = raw_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Descriptor(format!("无效路径: {}", raw_path.display())))?;

    let descriptor = RawImageDescriptor {
        file,
        format: ColorFormat::Rgb565,
        width: raster.width(),
        height: raster.height(),
    };

    let content = serde_json::to_string_pretty(&descriptor)
        .map_err(|e| AppError::Descriptor(format!("序列化描述文件失败: {}", e)))?;
    let stream = raster::encode(raster);

    fs::write(raw_path, &stream)?;
    if let Err(err) = fs::write(descriptor_path(raw_path), content) {
        let _ = fs::remove_file(raw_path);
        return Err(err.into());
    }

    log::info!(
        "💾 已写入 RGB565 图片 - 路径: {} 尺寸: {}x{} 字节: {}",
        raw_path.display(),
        descriptor.width,
        descriptor.height,
        stream.len()
    );

    Ok(descriptor)
}

/// 读取描述文件。
pub fn read_descriptor(raw_path: &Path) -> Result<RawImageDescriptor, AppError> {
    let path = descriptor_path(raw_path);
    let content = fs::read_to_string(&path)
        .map_err(|e| AppError::Descriptor(format!("读取 '{}' 失败: {}", path.display(), e)))?;

    serde_json::from_str::<RawImageDescriptor>(&content)
        .map_err(|e| AppError::Descriptor(format!("解析描述文件失败: {}", e)))
}

/// 按描述文件读取并解码 `.raw` 文件。
pub fn read_raw_image(raw_path: &Path) -> Result<(RawImageDescriptor, RasterBuffer), AppError> {
    let descriptor = read_descriptor(raw_path)?;
    let stream = fs::read(raw_path)?;
    let raster = raster::decode(&stream, descriptor.width, descriptor.height)?;
    Ok((descriptor, raster))
}
