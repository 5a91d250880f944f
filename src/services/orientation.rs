//! EXIF 方向校正
//!
//! 只处理三种旋转：3 → 180°，6 → 顺时针 90°，8 → 顺时针 270°。
//! 其余取值（包括镜像类）一律不变换。

use image::DynamicImage;
use std::io::Cursor;

/// 读取方向标签的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationRead {
    /// 读到了方向标签
    Tag(u32),
    /// 没有 EXIF 或没有方向标签
    Missing,
    /// EXIF 存在但无法解析（按不变换处理）
    Unreadable,
}

impl OrientationRead {
    pub fn value(self) -> Option<u32> {
        match self {
            OrientationRead::Tag(v) => Some(v),
            OrientationRead::Missing | OrientationRead::Unreadable => None,
        }
    }
}

/// 从原始文件字节读取方向标签，失败不向上传播
pub fn read_orientation(bytes: &[u8]) -> OrientationRead {
    let mut cursor = Cursor::new(bytes);
    let exif = match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return OrientationRead::Missing,
        Err(_) => return OrientationRead::Unreadable,
    };

    match exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) {
        Some(field) => match field.value.get_uint(0) {
            Some(v) => OrientationRead::Tag(v),
            None => OrientationRead::Unreadable,
        },
        None => OrientationRead::Missing,
    }
}

/// 按方向值旋转图片，画布随之扩展
pub fn apply_orientation(image: DynamicImage, orientation: Option<u32>) -> DynamicImage {
    match orientation {
        Some(3) => image.rotate180(),
        // 逆时针 270° 即顺时针 90°
        Some(6) => image.rotate90(),
        // 逆时针 90° 即顺时针 270°
        Some(8) => image.rotate270(),
        _ => image,
    }
}
