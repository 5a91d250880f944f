//! 单张图片处理 - 业务能力层
//!
//! 读取 → 方向校正 → 缩放 → 加标签 → 编码为 PNG。
//! 中间图像只在本函数内存在，返回时只剩编码后的字节。

use crate::config::ScaleOverride;
use crate::error::{ReportError, Result};
use crate::services::labeler::Labeler;
use crate::services::orientation::{apply_orientation, read_orientation, OrientationRead};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// 可嵌入文档的已加标签图片
#[derive(Debug, Clone)]
pub struct LabeledImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub label: String,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    /// 处理过的图片数量
    pub images: usize,
    /// 方向元数据损坏、按不旋转处理的图片数量
    pub orientation_fallbacks: usize,
    /// 没有方向元数据的图片数量
    pub orientation_missing: usize,
    /// 使用了保留类别缩放的图片数量
    pub scale_overrides: usize,
}

/// 图片处理器
pub struct ImageTransformer<L> {
    labeler: L,
    scale_override: ScaleOverride,
    stats: TransformStats,
}

impl<L: Labeler> ImageTransformer<L> {
    pub fn new(labeler: L, scale_override: ScaleOverride) -> Self {
        Self {
            labeler,
            scale_override,
            stats: TransformStats::default(),
        }
    }

    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    /// 处理一张图片
    ///
    /// # 参数
    /// - `path`: 图片路径，父目录名用于判断保留类别
    /// - `scale_percent`: 调用方期望的缩放百分比
    /// - `label`: 标签文字
    pub fn transform(
        &mut self,
        path: &Path,
        scale_percent: f64,
        label: &str,
    ) -> Result<LabeledImage> {
        let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;

        let orientation = read_orientation(&bytes);
        match orientation {
            OrientationRead::Unreadable => {
                warn!("⚠️ 方向元数据无法读取，按原方向处理: {}", path.display());
                self.stats.orientation_fallbacks += 1;
            }
            OrientationRead::Missing => self.stats.orientation_missing += 1,
            OrientationRead::Tag(_) => {}
        }

        let decoded =
            image::load_from_memory(&bytes).map_err(|e| ReportError::image_decode(path, e))?;
        drop(bytes);

        let oriented = apply_orientation(decoded, orientation.value());

        let folder_name = parent_folder_name(path);
        let percent = self.effective_scale(folder_name, scale_percent);
        let scaled = scale_image(&oriented, percent);
        drop(oriented);

        let mut canvas = scaled.to_rgb8();
        self.labeler.draw(&mut canvas, label);

        let (width, height) = canvas.dimensions();
        let mut png = Vec::new();
        DynamicImage::ImageRgb8(canvas)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ReportError::image_encode(path, e))?;

        self.stats.images += 1;
        debug!(
            "图片处理完成: {} → {}x{} ({}%)",
            path.display(),
            width,
            height,
            percent
        );

        Ok(LabeledImage {
            png,
            width,
            height,
            label: label.to_string(),
        })
    }

    /// 保留类别文件夹强制使用覆盖比例
    fn effective_scale(&mut self, folder_name: &str, requested: f64) -> f64 {
        if self.scale_override.applies_to(folder_name) {
            self.stats.scale_overrides += 1;
            self.scale_override.percent
        } else {
            requested
        }
    }
}

fn parent_folder_name(path: &Path) -> &str {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .unwrap_or_default()
}

/// 按百分比计算目标尺寸：每个方向独立取 floor，最小为 1
pub fn scaled_dimensions(width: u32, height: u32, percent: f64) -> (u32, u32) {
    let scale = |v: u32| ((v as f64 * percent / 100.0).floor() as u32).max(1);
    (scale(width), scale(height))
}

/// 使用 Lanczos3 缩放
pub fn scale_image(image: &DynamicImage, percent: f64) -> DynamicImage {
    let (w, h) = scaled_dimensions(image.width(), image.height(), percent);
    image.resize_exact(w, h, FilterType::Lanczos3)
}
