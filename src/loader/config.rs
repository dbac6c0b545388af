//! # 加载配置
//!
//! 将加载阶段的可调上限集中到 `LoaderConfig`，`Default` 提供可直接使用的数值。

/// 图片加载配置。
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}
