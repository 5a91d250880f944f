//! 文件夹筛选 - 业务能力层
//!
//! 1. 列出根目录的直接子文件夹（按名称排序，保证结果可复现）
//! 2. 按类别前缀 + 编号稳定排序
//! 3. 在每个子文件夹的整棵子树中寻找"恰好 4 个 jpg/jpeg 文件"的目录
//! 4. 子文件夹累计恰好 4 张图片才算候选，再映射到 1..4 槽位

use crate::error::{ReportError, Result};
use crate::models::{
    map_image_slots, FolderClass, PhotoFolder, RejectedFolder, IMAGES_PER_FOLDER,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 筛选结果
#[derive(Debug, Default)]
pub struct Selection {
    /// 按排序规则排列的合格文件夹
    pub folders: Vec<PhotoFolder>,
    /// 图片数量正确但文件命名不符合约定的文件夹
    pub rejected: Vec<RejectedFolder>,
    /// 名称格式错误、被归入"其他"桶的文件夹数量
    pub malformed_names: usize,
}

/// 文件夹筛选器
pub struct FolderSelector {
    categories: Vec<String>,
    strict_names: bool,
}

struct Candidate {
    name: String,
    path: PathBuf,
    class: FolderClass,
}

impl FolderSelector {
    pub fn new(categories: Vec<String>, strict_names: bool) -> Self {
        Self {
            categories,
            strict_names,
        }
    }

    /// 扫描根目录，返回排好序的合格文件夹
    pub fn select(&self, root: &Path) -> Result<Selection> {
        if !root.is_dir() {
            return Err(ReportError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut selection = Selection::default();
        let mut candidates = Vec::new();

        for (name, path) in list_subfolders(root)? {
            let class = FolderClass::classify(&name, &self.categories);
            if let FolderClass::Malformed { reason, .. } = &class {
                if self.strict_names {
                    return Err(ReportError::MalformedFolderName {
                        name,
                        reason: reason.clone(),
                    });
                }
                warn!("⚠️ 文件夹名称格式错误，归入其他类: {} ({})", name, reason);
                selection.malformed_names += 1;
            }
            candidates.push(Candidate { name, path, class });
        }

        // 稳定排序：同键的文件夹保持名称顺序
        let other_bucket = self.categories.len();
        candidates.sort_by_key(|c| c.class.sort_key(other_bucket));

        for candidate in candidates {
            let discovered = discover_images(&candidate.path)?;
            if discovered.len() != IMAGES_PER_FOLDER {
                debug!(
                    "跳过 {}: 找到 {} 张图片",
                    candidate.name,
                    discovered.len()
                );
                continue;
            }

            match map_image_slots(&candidate.path, &discovered) {
                Ok(images) => selection.folders.push(PhotoFolder {
                    name: candidate.name,
                    path: candidate.path,
                    class: candidate.class,
                    images,
                }),
                Err(reason) => {
                    warn!("⚠️ 拒绝文件夹 {}: {}", candidate.name, reason);
                    selection.rejected.push(RejectedFolder {
                        name: candidate.name,
                        path: candidate.path,
                        reason,
                    });
                }
            }
        }

        Ok(selection)
    }
}

/// 根目录下的直接子文件夹，按名称排序
fn list_subfolders(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            folders.push((name, path.to_path_buf()));
        }
    }

    Ok(folders)
}

/// 在文件夹子树中收集所有"恰好 4 个图片文件"目录里的图片
pub fn discover_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(folder, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let files = direct_files(entry.path())?;
        if files.len() == IMAGES_PER_FOLDER && files.iter().all(|f| is_jpeg(f)) {
            images.extend(files);
        }
    }

    Ok(images)
}

/// 目录中直接包含的非目录条目
fn direct_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))? {
        let path = entry.map_err(|e| ReportError::io(dir, e))?.path();
        if !path.is_dir() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_jpeg(path: &Path) -> bool {
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_lowercase();
    name.ends_with(".jpg") || name.ends_with(".jpeg")
}

fn walk_error(base: &Path, err: walkdir::Error) -> ReportError {
    let path = err.path().unwrap_or(base).to_path_buf();
    ReportError::io(path, err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn categories() -> Vec<String> {
        vec![
            "category-A".to_string(),
            "category-B".to_string(),
            "category-C".to_string(),
        ]
    }

    fn touch_all(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"x").unwrap();
        }
    }

    fn complete(root: &Path, folder: &str) {
        touch_all(&root.join(folder), &["1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.folders.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_sort_order_by_bucket_then_number() {
        let root = TempDir::new().unwrap();
        for folder in ["category-A_2", "category-B_1", "category-A_1", "other_x"] {
            complete(root.path(), folder);
        }

        let selection = FolderSelector::new(categories(), false)
            .select(root.path())
            .unwrap();

        assert_eq!(
            names(&selection),
            vec!["category-A_1", "category-A_2", "category-B_1", "other_x"]
        );
    }

    #[test]
    fn test_numeric_not_lexical_order() {
        let root = TempDir::new().unwrap();
        for folder in ["category-C_10", "category-C_9", "category-A_100", "category-A_20"] {
            complete(root.path(), folder);
        }

        let selection = FolderSelector::new(categories(), false)
            .select(root.path())
            .unwrap();

        assert_eq!(
            names(&selection),
            vec!["category-A_20", "category-A_100", "category-C_9", "category-C_10"]
        );
    }

    #[test]
    fn test_count_and_extension_rules() {
        let root = TempDir::new().unwrap();
        complete(root.path(), "category-A_1");
        touch_all(
            &root.path().join("category-A_2"),
            &["1.jpg", "2.jpg", "3.jpg"],
        );
        touch_all(
            &root.path().join("category-A_3"),
            &["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"],
        );
        touch_all(
            &root.path().join("category-A_4"),
            &["1.jpg", "2.jpg", "3.jpg", "notes.txt"],
        );
        touch_all(
            &root.path().join("category-A_5"),
            &["1.JPG", "2.Jpeg", "3.jpg", "4.jpeg"],
        );
        fs::write(root.path().join("stray.jpg"), b"x").unwrap();

        let selection = FolderSelector::new(categories(), false)
            .select(root.path())
            .unwrap();

        assert_eq!(names(&selection), vec!["category-A_1", "category-A_5"]);
        assert!(selection.rejected.is_empty());
    }

    #[test]
    fn test_misnamed_folder_rejected_not_fatal() {
        let root = TempDir::new().unwrap();
        complete(root.path(), "category-A_1");
        touch_all(
            &root.path().join("category-A_2"),
            &["a.jpg", "b.jpg", "c.jpg", "d.jpg"],
        );

        let selection = FolderSelector::new(categories(), false)
            .select(root.path())
            .unwrap();

        assert_eq!(names(&selection), vec!["category-A_1"]);
        assert_eq!(selection.rejected.len(), 1);
        assert_eq!(selection.rejected[0].name, "category-A_2");
    }

    #[test]
    fn test_nested_images_are_discovered_then_rejected() {
        let root = TempDir::new().unwrap();
        complete(&root.path().join("category-B_1"), "inner");

        let discovered = discover_images(&root.path().join("category-B_1")).unwrap();
        assert_eq!(discovered.len(), 4);

        let selection = FolderSelector::new(categories(), false)
            .select(root.path())
            .unwrap();
        assert!(selection.folders.is_empty());
        assert_eq!(selection.rejected.len(), 1);
    }

    #[test]
    fn test_malformed_name_lenient_goes_to_other_bucket() {
        let root = TempDir::new().unwrap();
        complete(root.path(), "category-A_x");
        complete(root.path(), "category-B_3");

        let selection = FolderSelector::new(categories(), false)
            .select(root.path())
            .unwrap();

        assert_eq!(names(&selection), vec!["category-B_3", "category-A_x"]);
        assert_eq!(selection.malformed_names, 1);
    }

    #[test]
    fn test_malformed_name_strict_is_fatal() {
        let root = TempDir::new().unwrap();
        complete(root.path(), "category-A");

        let result = FolderSelector::new(categories(), true).select(root.path());
        assert!(matches!(
            result,
            Err(ReportError::MalformedFolderName { .. })
        ));
    }

    #[test]
    fn test_missing_root() {
        let root = TempDir::new().unwrap();
        let result = FolderSelector::new(categories(), false).select(&root.path().join("nope"));
        assert!(matches!(result, Err(ReportError::RootNotFound { .. })));
    }
}
