//! # 旋转 ROI 提取模块
//!
//! ## 设计思路
//!
//! 从大幅地图中截取一个固定尺寸的窗口，窗口内容等同于源图绕 `center` 旋转
//! `angle_radians` 后看到的画面。采用逆映射：对每个输出像素反算源坐标，
//! 再做最近邻采样，不会出现正向投影留下的空洞。
//!
//! ## 实现思路
//!
//! 1. 输出坐标平移到以窗口中心为原点：`xt = x - w/2`，`yt = y - h/2`（整数除法）
//! 2. 旋转基 `sin(-θ)` / `cos(-θ)` 每次调用只计算一次（见 `RotationBasis`）
//! 3. `u = floor(xt·cos - yt·sin) + cx`，`v = floor(xt·sin + yt·cos) + cy`
//! 4. 落在源图内取源像素，否则填充背景黑色
//!
//! 正角度使采样窗口相对源图逆时针旋转；取 `-θ` 作为三角基的符号约定必须保持不变，
//! 否则与设备端渲染结果不能逐像素对齐。

use std::time::Instant;

use super::RasterError;
use super::buffer::{Pixel, RasterBuffer, pixel_count};

/// 预先计算好的旋转基。
///
/// 同一航向下渲染多帧时可复用，避免逐像素重复计算三角函数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationBasis {
    sin: f64,
    cos: f64,
}

impl RotationBasis {
    pub fn new(angle_radians: f64) -> Self {
        let (sin, cos) = (-angle_radians).sin_cos();
        Self { sin, cos }
    }

    /// 窗口中心偏移 `(xt, yt)` 对应的连续源坐标偏移（未取整、未加中心）。
    pub fn source_coordinate(&self, xt: i64, yt: i64) -> (f64, f64) {
        let (xt, yt) = (xt as f64, yt as f64);
        (xt * self.cos - yt * self.sin, xt * self.sin + yt * self.cos)
    }

    /// 最近邻采样使用的整数源坐标。
    pub fn source_index(&self, xt: i64, yt: i64, center: (i32, i32)) -> (i64, i64) {
        let (u, v) = self.source_coordinate(xt, yt);
        (
            u.floor() as i64 + center.0 as i64,
            v.floor() as i64 + center.1 as i64,
        )
    }
}

/// 一次旋转提取请求。源缓冲只读借用。
#[derive(Debug, Clone, Copy)]
pub struct RoiRequest<'a> {
    pub source: &'a RasterBuffer,
    /// 源图像素坐标系下的旋转中心，允许落在源图之外。
    pub center: (i32, i32),
    pub output_width: u32,
    pub output_height: u32,
    pub angle_radians: f64,
}

impl<'a> RoiRequest<'a> {
    pub fn new(
        source: &'a RasterBuffer,
        center: (i32, i32),
        output_width: u32,
        output_height: u32,
        angle_radians: f64,
    ) -> Self {
        Self {
            source,
            center,
            output_width,
            output_height,
            angle_radians,
        }
    }

    pub fn basis(&self) -> RotationBasis {
        RotationBasis::new(self.angle_radians)
    }

    /// 执行提取，等价于 `extract_rotated_roi(self)`。
    pub fn extract(&self) -> Result<RasterBuffer, RasterError> {
        self.extract_with_basis(&self.basis())
    }

    /// 使用调用方提供的旋转基执行提取。
    ///
    /// `basis` 应由 `RotationBasis::new(self.angle_radians)` 得到，
    /// 传入其它角度的基时以该基为准。
    pub fn extract_with_basis(&self, basis: &RotationBasis) -> Result<RasterBuffer, RasterError> {
        let count = pixel_count(self.output_width, self.output_height)?;
        let start = Instant::now();

        let half_width = (self.output_width / 2) as i64;
        let half_height = (self.output_height / 2) as i64;

        let mut pixels = Vec::with_capacity(count);
        for y in 0..self.output_height as i64 {
            let yt = y - half_height;
            for x in 0..self.output_width as i64 {
                let xt = x - half_width;
                let (u, v) = basis.source_index(xt, yt, self.center);
                pixels.push(self.source.sample(u, v).unwrap_or(Pixel::BLACK));
            }
        }

        log::debug!(
            "🧭 ROI 提取完成 - 源: {}x{} 中心: ({}, {}) 角度: {:.4} rad 输出: {}x{} 耗时: {}µs",
            self.source.width(),
            self.source.height(),
            self.center.0,
            self.center.1,
            self.angle_radians,
            self.output_width,
            self.output_height,
            start.elapsed().as_micros()
        );

        RasterBuffer::new(self.output_width, self.output_height, pixels)
    }
}

/// 提取旋转窗口。
///
/// # 错误
/// 输出宽或高为 0 时返回 `InvalidDimensions`；中心越界、任意角度都不是错误。
///
/// # 示例
/// ```rust
/// use gps_map_raster::raster::{Pixel, RasterBuffer, RoiRequest, extract_rotated_roi};
///
/// let map = RasterBuffer::filled(320, 240, Pixel::new(0, 128, 0))?;
/// let roi = extract_rotated_roi(&RoiRequest::new(&map, (160, 120), 160, 128, 0.5))?;
/// assert_eq!(roi.dimensions(), (160, 128));
/// # Ok::<(), gps_map_raster::raster::RasterError>(())
/// ```
pub fn extract_rotated_roi(request: &RoiRequest<'_>) -> Result<RasterBuffer, RasterError> {
    request.extract()
}
