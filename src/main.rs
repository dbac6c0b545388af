//! # GPS 地图栅格工具 — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与子命令分发。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gps_map_raster::AppError;
use gps_map_raster::config::RoiConfig;
use gps_map_raster::descriptor::{read_raw_image, write_raw_image};
use gps_map_raster::loader::{LoaderConfig, load_raster, save_raster_image};
use gps_map_raster::raster::{RasterBuffer, RoiRequest};

#[derive(Parser)]
#[command(name = "gps-map-raster")]
#[command(version)]
#[command(about = "Prepare RGB565 map images for the GPS display")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert any image into a headerless RGB565 .raw file plus a .json descriptor
    Convert {
        /// Source image (PNG, JPEG, BMP, ...)
        #[arg(short, long)]
        input: PathBuf,

        /// Output .raw file
        #[arg(short, long)]
        output: PathBuf,

        /// Also save the quantized image for visual inspection
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Decode a .raw file (dimensions from its descriptor) and save it as an image
    Show {
        /// Input .raw file
        #[arg(short, long)]
        input: PathBuf,

        /// Output image (format from extension)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Extract a rotated window from a map image
    Rotate {
        /// Source image or .raw file
        #[arg(short, long)]
        input: PathBuf,

        /// Rotation center in source pixels, "X,Y"
        #[arg(short, long, value_parser = parse_center, allow_hyphen_values = true)]
        center: (i32, i32),

        /// Rotation angle in degrees
        #[arg(long, conflicts_with = "angle_rad", allow_hyphen_values = true)]
        angle_deg: Option<f64>,

        /// Rotation angle in radians
        #[arg(long, allow_hyphen_values = true)]
        angle_rad: Option<f64>,

        /// Output width (default: LCD width)
        #[arg(long)]
        width: Option<u32>,

        /// Output height (default: LCD height)
        #[arg(long)]
        height: Option<u32>,

        /// Output file; ".raw" writes RGB565 plus descriptor, anything else an image
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn parse_center(value: &str) -> Result<(i32, i32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;

    Ok((parse_axis("X", x)?, parse_axis("Y", y)?))
}

fn parse_axis(axis: &str, raw: &str) -> Result<i32, String> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid {} '{}': {}", axis, raw, e))
}

fn is_raw_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("raw"))
        .unwrap_or(false)
}

/// `.raw` 输入走描述文件解码，其余交给图片加载器。
fn load_input(path: &Path) -> Result<RasterBuffer, AppError> {
    if is_raw_path(path) {
        let (_, raster) = read_raw_image(path)?;
        return Ok(raster);
    }
    Ok(load_raster(path, &LoaderConfig::default())?)
}

fn store_output(path: &Path, raster: &RasterBuffer) -> Result<(), AppError> {
    if is_raw_path(path) {
        write_raw_image(path, raster)?;
        return Ok(());
    }
    Ok(save_raster_image(path, raster)?)
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            preview,
        } => {
            let raster = load_raster(&input, &LoaderConfig::default())?;
            let descriptor = write_raw_image(&output, &raster)?;
            log::info!(
                "✅ 转换完成 - {} -> {} ({}x{})",
                input.display(),
                output.display(),
                descriptor.width,
                descriptor.height
            );

            if let Some(preview) = preview {
                let (_, quantized) = read_raw_image(&output)?;
                save_raster_image(&preview, &quantized)?;
            }
        }
        Commands::Show { input, output } => {
            let (descriptor, raster) = read_raw_image(&input)?;
            log::info!(
                "📖 已读取 {} - 格式: {:?} 尺寸: {}x{}",
                descriptor.file,
                descriptor.format,
                descriptor.width,
                descriptor.height
            );
            save_raster_image(&output, &raster)?;
        }
        Commands::Rotate {
            input,
            center,
            angle_deg,
            angle_rad,
            width,
            height,
            output,
        } => {
            let angle = match (angle_deg, angle_rad) {
                (Some(deg), _) => deg.to_radians(),
                (None, Some(rad)) => rad,
                (None, None) => 0.0,
            };
            if !angle.is_finite() {
                let message = format!("角度必须是有限数值: {}", angle);
                return Err(AppError::InvalidArgument(message));
            }

            let roi = RoiConfig::default().with_overrides(width, height);
            let source = load_input(&input)?;
            let request = RoiRequest::new(
                &source,
                center,
                roi.output_width,
                roi.output_height,
                angle,
            );
            let rotated = request.extract()?;

            log::info!(
                "🧭 旋转窗口 - 中心: ({}, {}) 角度: {:.2}° 输出: {}x{}",
                center.0,
                center.1,
                angle.to_degrees(),
                roi.output_width,
                roi.output_height
            );
            store_output(&output, &rotated)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}
