//! # GPS 地图栅格工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │            命令行 (convert / show / rotate)               │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<T, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ──────── AppError (统一错误类型)                │
//! │  │                                                       │
//! │  ├─ loader ─────── image crate 解码 → RasterBuffer        │
//! │  │                                                       │
//! │  ├─ raster ─────── 纯函数核心                             │
//! │  │   ├─ codec       RGB888 ↔ RGB565                      │
//! │  │   └─ rotate      旋转 ROI 提取                         │
//! │  │                                                       │
//! │  └─ descriptor ─── .raw 像素文件 + .json 尺寸描述          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`config`] | 设备 LCD 尺寸等默认配置 |
//! | [`raster`] | `RasterBuffer`、RGB565 编解码、旋转 ROI 提取 |
//! | [`loader`] | 任意格式图片加载与像素上限校验 |
//! | [`descriptor`] | 设备端 `.raw` 文件与描述文件读写 |

pub mod config;
pub mod descriptor;
pub mod error;
pub mod loader;
pub mod raster;

pub use error::AppError;
