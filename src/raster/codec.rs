//! # RGB565 编解码模块
//!
//! ## 设计思路
//!
//! 设备帧缓冲每像素 2 字节，16 位字按高位在前排列为 `RRRRR GGGGGG BBBBB`，
//! 并以（高字节，低字节）顺序写出。字节流本身不携带宽高，宽高需要调用方另行传递。
//!
//! ## 实现思路
//!
//! - 量化采用截断而非四舍五入，与设备上已有的 `.raw` 地图文件逐字节一致。
//! - 解码只还原位布局，不还原量化：红/蓝丢失低 3 位，绿丢失低 2 位。
//! - 编码对合法的 `RasterBuffer` 不会失败；解码在长度不符时返回 `MalformedStream`。

use super::RasterError;
use super::buffer::{Pixel, RasterBuffer, pixel_count};

/// 每像素字节数。
pub const BYTES_PER_PIXEL: usize = 2;

/// 将单个像素打包为（高字节，低字节）。
///
/// # 示例
/// ```rust
/// use gps_map_raster::raster::{Pixel, encode_pixel};
///
/// assert_eq!(encode_pixel(Pixel::new(0xF8, 0xFC, 0xF8)), [0xFF, 0xFF]);
/// ```
pub fn encode_pixel(pixel: Pixel) -> [u8; 2] {
    let red = pixel.red & 0xF8;
    let green = pixel.green & 0xFC;
    let blue = pixel.blue & 0xF8;

    let high = red | (green >> 5);
    let low = ((green << 3) & 0xE0) | (blue >> 3);
    [high, low]
}

/// 将（高字节，低字节）还原为像素。
pub fn decode_pixel([high, low]: [u8; 2]) -> Pixel {
    Pixel {
        red: high & 0xF8,
        green: ((high & 0x07) << 5) | ((low & 0xE0) >> 3),
        blue: (low & 0x1F) << 3,
    }
}

/// 像素对应的 16 位 RGB565 字。
pub fn to_rgb565_word(pixel: Pixel) -> u16 {
    u16::from_be_bytes(encode_pixel(pixel))
}

/// 将整幅缓冲编码为行优先的 RGB565 字节流，长度恒为 `2 * width * height`。
pub fn encode(buffer: &RasterBuffer) -> Vec<u8> {
    let mut stream = Vec::with_capacity(buffer.pixels().len() * BYTES_PER_PIXEL);
    for pixel in buffer.pixels() {
        stream.extend_from_slice(&encode_pixel(*pixel));
    }

    log::debug!(
        "🎨 RGB565 编码完成 - 尺寸: {}x{} 字节: {}",
        buffer.width(),
        buffer.height(),
        stream.len()
    );
    stream
}

/// 按调用方给出的宽高解码 RGB565 字节流。
///
/// # 错误
/// - 宽或高为 0：`InvalidDimensions`
/// - `stream.len() != 2 * width * height`：`MalformedStream`
pub fn decode(stream: &[u8], width: u32, height: u32) -> Result<RasterBuffer, RasterError> {
    let count = pixel_count(width, height)?;
    let expected = count
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or(RasterError::InvalidDimensions { width, height })?;

    if stream.len() != expected {
        return Err(RasterError::MalformedStream {
            expected,
            actual: stream.len(),
        });
    }

    let pixels = stream
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|pair| decode_pixel([pair[0], pair[1]]))
        .collect();

    RasterBuffer::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_pixel_sets_every_bit() {
        assert_eq!(encode_pixel(Pixel::new(248, 252, 248)), [0xFF, 0xFF]);
        assert_eq!(decode_pixel([0xFF, 0xFF]), Pixel::new(248, 252, 248));
    }

    #[test]
    fn channels_land_in_their_bit_fields() {
        assert_eq!(to_rgb565_word(Pixel::new(0xFF, 0, 0)), 0xF800);
        assert_eq!(to_rgb565_word(Pixel::new(0, 0xFF, 0)), 0x07E0);
        assert_eq!(to_rgb565_word(Pixel::new(0, 0, 0xFF)), 0x001F);
        assert_eq!(encode_pixel(Pixel::new(0, 0x80, 0)), [0x04, 0x00]);
        assert_eq!(encode_pixel(Pixel::new(0, 0x04, 0)), [0x00, 0x20]);
    }

    #[test]
    fn low_bits_are_truncated_not_rounded() {
        assert_eq!(encode_pixel(Pixel::new(7, 3, 7)), [0x00, 0x00]);
        assert_eq!(
            decode_pixel(encode_pixel(Pixel::new(0x0F, 0x0F, 0x0F))),
            Pixel::new(0x08, 0x0C, 0x08)
        );
    }

    #[test]
    fn encode_emits_row_major_pairs() {
        let pixels = vec![Pixel::new(0xFF, 0, 0), Pixel::new(0, 0, 0xFF)];
        let buffer = RasterBuffer::new(2, 1, pixels).expect("buffer init failed");

        assert_eq!(encode(&buffer), vec![0xF8, 0x00, 0x00, 0x1F]);
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        assert_eq!(
            decode(&[0u8; 7], 2, 2),
            Err(RasterError::MalformedStream {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            decode(&[], 1, 1),
            Err(RasterError::MalformedStream {
                expected: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn decode_rejects_zero_dimensions() {
        assert_eq!(
            decode(&[], 0, 5),
            Err(RasterError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
    }
}
