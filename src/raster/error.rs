//! # 栅格错误模型
//!
//! 编解码与旋转只会因为“调用方给出的前置条件不成立”而失败，
//! 这些错误都可以立即检测，重试没有意义，因此不携带任何可恢复状态。

/// 栅格核心统一错误类型。
///
/// 该类型会在 crate 层被上转为 `AppError`。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// 打包字节流长度与声明的宽高不符。
    #[error("RGB565 字节流长度异常：期望 {expected} 字节，实际 {actual} 字节")]
    MalformedStream { expected: usize, actual: usize },

    /// 宽或高为 0，或像素总数溢出。
    #[error("无效尺寸：{width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// 构造缓冲时像素数量与宽高不符。
    #[error("像素数量异常：期望 {expected} 个，实际 {actual} 个")]
    PixelCountMismatch { expected: usize, actual: usize },
}
