use crate::models::category::FolderClass;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 每个文件夹固定的图片数量
pub const IMAGES_PER_FOLDER: usize = 4;

static SLOT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([1-4])\.jpe?g$").expect("valid slot regex"));

/// 通过筛选的照片文件夹
///
/// `images[i]` 对应文件 `{i + 1}.jpg`，顺序与发现顺序无关。
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFolder {
    pub name: String,
    pub path: PathBuf,
    pub class: FolderClass,
    pub images: [PathBuf; IMAGES_PER_FOLDER],
}

impl PhotoFolder {
    /// 标题中使用的名称：下划线替换为空格
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// 被拒绝的文件夹
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedFolder {
    pub name: String,
    pub path: PathBuf,
    pub reason: RejectReason,
}

/// 拒绝原因
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// 图片不在文件夹根部
    Nested { found: Vec<PathBuf> },
    /// 文件名不是 1.jpg..4.jpg
    Misnamed { found: Vec<String> },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Nested { found } => {
                let shown: Vec<String> = found.iter().map(|p| p.display().to_string()).collect();
                write!(f, "图片位于子目录中: [{}]", shown.join(", "))
            }
            RejectReason::Misnamed { found } => {
                write!(f, "文件名应为 1.jpg..4.jpg，实际为: [{}]", found.join(", "))
            }
        }
    }
}

/// 将发现的图片路径映射到固定的 1..4 槽位
///
/// 四个文件必须直接位于 `folder` 下，且每个编号恰好出现一次。
pub fn map_image_slots(
    folder: &Path,
    discovered: &[PathBuf],
) -> Result<[PathBuf; IMAGES_PER_FOLDER], RejectReason> {
    let mut sorted = discovered.to_vec();
    sorted.sort();

    if sorted.iter().any(|p| p.parent() != Some(folder)) {
        return Err(RejectReason::Nested { found: sorted });
    }

    let names: Vec<String> = sorted
        .iter()
        .map(|p| {
            p.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    let mut slots: [Option<PathBuf>; IMAGES_PER_FOLDER] = Default::default();
    for (path, name) in sorted.iter().zip(&names) {
        let Some(index) = slot_index(name) else {
            return Err(RejectReason::Misnamed {
                found: names.clone(),
            });
        };
        if slots[index].replace(path.clone()).is_some() {
            return Err(RejectReason::Misnamed {
                found: names.clone(),
            });
        }
    }

    match slots {
        [Some(a), Some(b), Some(c), Some(d)] => Ok([a, b, c, d]),
        _ => Err(RejectReason::Misnamed { found: names }),
    }
}

fn slot_index(file_name: &str) -> Option<usize> {
    let caps = SLOT_NAME.captures(file_name)?;
    let digit: usize = caps.get(1)?.as_str().parse().ok()?;
    Some(digit - 1)
}
