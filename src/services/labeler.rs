//! 图片标签绘制
//!
//! 标签为白色文字、无背景，锚定在左下角，距左边和下边各留
//! `floor(width * margin_ratio)` 像素。

use crate::error::{ReportError, Result};
use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fs;
use std::path::Path;
use tracing::debug;

const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// 在图片上绘制标签的能力
pub trait Labeler {
    fn draw(&self, image: &mut RgbImage, text: &str);
}

impl<L: Labeler + ?Sized> Labeler for &L {
    fn draw(&self, image: &mut RgbImage, text: &str) {
        (**self).draw(image, text)
    }
}

/// 使用 TrueType 字体绘制标签
pub struct FontLabeler {
    font: FontArc,
    scale: PxScale,
    margin_ratio: f32,
}

impl FontLabeler {
    /// 从字体文件创建；文件缺失或无法解析都是致命错误
    pub fn from_file(path: &Path, font_px: f32, margin_ratio: f32) -> Result<Self> {
        if !path.is_file() {
            return Err(ReportError::FontNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| ReportError::FontInvalid {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        debug!("字体已加载: {}", path.display());

        Ok(Self {
            font,
            scale: PxScale::from(font_px),
            margin_ratio,
        })
    }
}

impl Labeler for FontLabeler {
    fn draw(&self, image: &mut RgbImage, text: &str) {
        let (_, text_height) = text_size(self.scale, &self.font, text);
        let (x, y) = label_origin(image.width(), image.height(), text_height, self.margin_ratio);
        draw_text_mut(image, LABEL_COLOR, x, y, self.scale, &self.font, text);
    }
}

/// 计算标签左上角坐标
pub fn label_origin(width: u32, height: u32, text_height: u32, margin_ratio: f32) -> (i32, i32) {
    let margin = (width as f32 * margin_ratio).floor() as i32;
    let x = margin;
    let y = height as i32 - text_height as i32 - margin;
    (x, y)
}
