//! # 加载与转换流水线
//!
//! ## 实现思路
//!
//! 1. 文件：存在性 + metadata 体积限制 + 读取
//! 2. 猜测格式并读取 header 尺寸
//! 3. 按像素上限快速拒绝
//! 4. 完整解码并转为 RGB8
//! 5. 构造 `RasterBuffer`

use image::{DynamicImage, GenericImageView, ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use super::{LoadError, LoaderConfig};
use crate::raster::{Pixel, RasterBuffer};

/// 从本地路径加载图片并转为 `RasterBuffer`。
///
/// # 示例
/// ```rust,ignore
/// use gps_map_raster::loader::{LoaderConfig, load_raster};
///
/// let map = load_raster("graphics/town.png", &LoaderConfig::default())?;
/// println!("{}x{}", map.width(), map.height());
/// # Ok::<(), gps_map_raster::loader::LoadError>(())
/// ```
pub fn load_raster(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<RasterBuffer, LoadError> {
    let path = path.as_ref();
    log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

    if !path.exists() {
        return Err(LoadError::FileSystem(format!("文件不存在：{}", path.display())));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| LoadError::FileSystem(format!("无法读取文件信息：{}", e)))?;

    if metadata.len() > config.max_file_size {
        return Err(LoadError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| LoadError::FileSystem(format!("无法读取图片文件：{}", e)))?;

    load_raster_from_memory(&bytes, config)
}

/// 从内存中的图片字节解码为 `RasterBuffer`。
pub fn load_raster_from_memory(
    bytes: &[u8],
    config: &LoaderConfig,
) -> Result<RasterBuffer, LoadError> {
    let start = Instant::now();

    if bytes.len() as u64 > config.max_file_size {
        return Err(LoadError::ResourceLimit(format!(
            "图片数据过大：{} 字节（限制：{} 字节）",
            bytes.len(),
            config.max_file_size
        )));
    }

    let (header_width, header_height) = inspect_dimensions(bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| LoadError::Decode(format!("图片解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    validate_pixel_limits(config, width, height)?;

    let raster = raster_from_image(&decoded)?;

    log::info!(
        "✅ 图片解码成功 - 尺寸: {}x{} 耗时: {}ms",
        width,
        height,
        start.elapsed().as_millis()
    );

    Ok(raster)
}

/// 将 `image` 的任意像素格式转为 RGB8 栅格，alpha 直接丢弃。
pub fn raster_from_image(image: &DynamicImage) -> Result<RasterBuffer, LoadError> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| Pixel::from(p.0)).collect();

    RasterBuffer::new(width, height, pixels)
        .map_err(|e| LoadError::Decode(format!("构建像素缓冲失败：{}", e)))
}

/// 将栅格转回 `image::RgbImage`，用于保存预览图。
pub fn raster_to_image(raster: &RasterBuffer) -> Result<RgbImage, LoadError> {
    let mut bytes = Vec::with_capacity(raster.pixels().len() * 3);
    for pixel in raster.pixels() {
        bytes.extend_from_slice(&<[u8; 3]>::from(*pixel));
    }

    RgbImage::from_raw(raster.width(), raster.height(), bytes)
        .ok_or_else(|| LoadError::Decode("预览图缓冲长度异常".to_string()))
}

/// 将栅格保存为图片文件，格式由扩展名决定。
pub fn save_raster_image(path: impl AsRef<Path>, raster: &RasterBuffer) -> Result<(), LoadError> {
    let path = path.as_ref();
    let image = raster_to_image(raster)?;
    image
        .save(path)
        .map_err(|e| LoadError::FileSystem(format!("保存 '{}' 失败：{}", path.display(), e)))?;

    log::info!(
        "🖼️ 已保存预览图 - 路径: {} 尺寸: {}x{}",
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(())
}

/// 仅通过图片头信息读取宽高。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

    if reader.format().is_none() {
        return Err(LoadError::InvalidFormat("不支持的图片格式".to_string()));
    }

    reader
        .into_dimensions()
        .map_err(|e| LoadError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
}

/// 校验像素数量是否超过配置上限。
fn validate_pixel_limits(config: &LoaderConfig, width: u32, height: u32) -> Result<(), LoadError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| LoadError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(LoadError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
