//! # 像素缓冲模块
//!
//! ## 设计思路
//!
//! `RasterBuffer` 是编解码与旋转共用的值类型：构造时即完整填充，之后只读。
//! 所有变换都产出新的缓冲，而不是原地修改。
//!
//! ## 实现思路
//!
//! - 像素按行优先存放，`pixels.len() == width * height` 在构造时校验。
//! - 宽高为 0 的缓冲不可构造，下游的编码因此可以保持无错误返回。
//! - 越界访问返回 `None`，不 panic。

use super::RasterError;

/// 24 位真彩色像素（无 alpha）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    /// 越界采样时使用的背景色。
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// 截断到 RGB565 可表示的精度（红/蓝保留高 5 位，绿保留高 6 位）。
    ///
    /// 与 `decode_pixel(encode_pixel(p))` 的结果一致。
    pub const fn quantized(self) -> Self {
        Self {
            red: self.red & 0xF8,
            green: self.green & 0xFC,
            blue: self.blue & 0xF8,
        }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        [pixel.red, pixel.green, pixel.blue]
    }
}

/// 计算像素总数，同时拒绝 0 尺寸与溢出。
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or(RasterError::InvalidDimensions { width, height })
}

/// 行优先存放的只读像素网格。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl RasterBuffer {
    /// 由完整的像素序列构造缓冲。
    ///
    /// # 示例
    /// ```rust
    /// use gps_map_raster::raster::{Pixel, RasterBuffer};
    ///
    /// let buffer = RasterBuffer::new(2, 1, vec![Pixel::BLACK, Pixel::new(255, 0, 0)])?;
    /// assert_eq!(buffer.get(1, 0), Some(Pixel::new(255, 0, 0)));
    /// # Ok::<(), gps_map_raster::raster::RasterError>(())
    /// ```
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, RasterError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 用同一颜色填满整个缓冲。
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self, RasterError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; count],
        })
    }

    /// 按坐标逐个生成像素（行优先）。
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, RasterError>
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let count = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// 行优先的全部像素。
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// 读取 `(x, y)` 处像素，越界返回 `None`。
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// 以有符号坐标采样，任一分量越界即返回 `None`。
    ///
    /// 旋转采样得到的坐标可能为负或超出源图，这里统一做边界判断。
    pub(crate) fn sample(&self, u: i64, v: i64) -> Option<Pixel> {
        if u < 0 || v < 0 || u >= self.width as i64 || v >= self.height as i64 {
            return None;
        }
        self.pixels
            .get(v as usize * self.width as usize + u as usize)
            .copied()
    }

    /// 按行迭代。
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }
}
