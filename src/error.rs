//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义 crate 级统一的 `AppError` 枚举，汇总栅格核心、图片加载、文件读写与
//! 描述文件解析四类错误，命令行入口统一返回 `Result<T, AppError>`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `RasterError` / `LoadError` / `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::loader::LoadError;
use crate::raster::RasterError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 编解码或旋转的前置条件不成立
    #[error("{0}")]
    Raster(#[from] RasterError),

    /// 图片加载失败
    #[error("{0}")]
    Load(#[from] LoadError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 描述文件缺失、格式错误或与像素文件不一致
    #[error("描述文件错误: {0}")]
    Descriptor(String),

    /// 命令行参数无法解析
    #[error("参数错误: {0}")]
    InvalidArgument(String),
}
