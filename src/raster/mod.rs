//! # 栅格核心模块（raster）
//!
//! ## 设计思路
//!
//! 该模块只包含两个纯函数式的数值原语，以及它们共用的像素缓冲类型：
//!
//! - `buffer`：`RasterBuffer` / `Pixel`，构造即完整、构造后只读
//! - `codec`：RGB888 ↔ RGB565 有损编解码（LCD 帧缓冲格式）
//! - `rotate`：任意角度、固定尺寸的旋转 ROI 提取（逆映射 + 最近邻采样）
//! - `error`：前置条件失败的统一错误类型
//!
//! ## 实现思路
//!
//! 所有操作都不修改输入，结果总是新的 `RasterBuffer` 或字节流。
//! 没有全局状态，也不做 I/O，因此可以在多个线程间只读共享同一个源缓冲。
//!
//! ```text
//! 外部图片 ──loader──▶ RasterBuffer ──rotate──▶ RasterBuffer ──codec::encode──▶ .raw 字节
//!                                                         ◀──codec::decode──
//! ```

mod buffer;
pub mod codec;
mod error;
pub mod rotate;

pub use buffer::{Pixel, RasterBuffer};
pub use codec::{decode, decode_pixel, encode, encode_pixel, to_rgb565_word};
pub use error::RasterError;
pub use rotate::{RoiRequest, RotationBasis, extract_rotated_roi};
