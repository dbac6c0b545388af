//! # 图片加载模块（loader）
//!
//! ## 设计思路
//!
//! 任意格式图片（PNG / JPEG / BMP ……）的解码完全委托给 `image` crate，
//! 本模块只负责“读取 → 限制校验 → 解码 → 转为 `RasterBuffer`”这条适配链路。
//!
//! - `config`：文件体积与像素上限
//! - `error`：加载阶段错误
//! - `pipeline`：加载流水线与 `image` 类型互转
//!
//! ## 实现思路
//!
//! 先读头部尺寸再完整解码，超限输入在分配像素内存前就被拒绝。
//! alpha 通道在转换时直接丢弃，设备 LCD 没有透明度概念。

mod config;
mod error;
mod pipeline;

pub use config::LoaderConfig;
pub use error::LoadError;
pub use pipeline::{
    load_raster, load_raster_from_memory, raster_from_image, raster_to_image, save_raster_image,
};
