//! # 加载错误模型
//!
//! 使用单一枚举承载图片加载链路中的错误来源，调用侧可以按分支匹配。

/// 图片加载统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
