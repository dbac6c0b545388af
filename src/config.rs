//! # 设备配置
//!
//! 设备 LCD 的显示尺寸决定旋转窗口的默认输出大小，命令行参数可以覆盖。

/// 旋转窗口输出配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiConfig {
    pub output_width: u32,
    pub output_height: u32,
}

impl Default for RoiConfig {
    /// 160x128 横屏 LCD。
    fn default() -> Self {
        Self {
            output_width: 160,
            output_height: 128,
        }
    }
}

impl RoiConfig {
    /// 用显式给出的宽高覆盖默认值。
    pub fn with_overrides(self, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            output_width: width.unwrap_or(self.output_width),
            output_height: height.unwrap_or(self.output_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_replace_given_fields() {
        let config = RoiConfig::default().with_overrides(Some(320), None);
        assert_eq!(config.output_width, 320);
        assert_eq!(config.output_height, 128);
    }
}
