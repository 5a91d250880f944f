use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 保留类别的缩放覆盖规则
///
/// 文件夹名称为 `{category}_{n}` 且 `first <= n <= last` 时，
/// 忽略调用方给出的缩放比例，强制使用 `percent`。
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScaleOverride {
    /// 保留类别前缀
    pub category: String,
    /// 编号起始（含）
    pub first: u32,
    /// 编号结束（含）
    pub last: u32,
    /// 强制使用的缩放百分比
    pub percent: f64,
}

impl Default for ScaleOverride {
    fn default() -> Self {
        Self {
            category: "category-A".to_string(),
            first: 1,
            last: 61,
            percent: 24.0,
        }
    }
}

impl ScaleOverride {
    /// 判断文件夹名称是否落在保留范围内（精确匹配 `{category}_{n}`）
    pub fn applies_to(&self, folder_name: &str) -> bool {
        let Some(rest) = folder_name
            .strip_prefix(self.category.as_str())
            .and_then(|s| s.strip_prefix('_'))
        else {
            return false;
        };

        match rest.parse::<u32>() {
            // "category-A_05" 与 "category-A_5" 不是同一个名称
            Ok(n) => n.to_string() == rest && (self.first..=self.last).contains(&n),
            Err(_) => false,
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 照片根目录，扫描其直接子文件夹
    pub root_dir: PathBuf,
    /// 输出文档路径
    pub output_path: PathBuf,
    /// 粗体 TrueType 字体；相对路径以可执行文件所在目录为基准
    pub font_path: PathBuf,
    /// 图片标签字号（像素）
    pub label_font_px: f32,
    /// 标签距边缘的间距占图片宽度的比例
    pub label_margin_ratio: f32,
    /// 每次运行统一使用的缩放百分比
    pub scale_percent: f64,
    /// 已知类别前缀，按排序优先级排列
    pub categories: Vec<String>,
    /// 保留类别缩放覆盖
    pub scale_override: ScaleOverride,
    /// 文件夹名称格式错误时是否终止运行
    pub strict_folder_names: bool,
    /// 被拒绝文件夹的记录文件（可选）
    pub rejected_log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("photos"),
            output_path: PathBuf::from("photos/photo-report.docx"),
            font_path: PathBuf::from("arialbd.ttf"),
            label_font_px: 12.0,
            label_margin_ratio: 0.01,
            scale_percent: 8.3,
            categories: vec![
                "category-A".to_string(),
                "category-B".to_string(),
                "category-C".to_string(),
            ],
            scale_override: ScaleOverride::default(),
            strict_folder_names: false,
            rejected_log: None,
        }
    }
}

impl Config {
    /// 从 TOML 文件读取配置，未给出的字段使用默认值（不做校验）
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|source| ReportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 加载配置：有文件则读文件，否则使用默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<()> {
        if !(self.scale_percent > 0.0) {
            return Err(ReportError::invalid_config(
                "scale_percent",
                format!("必须大于 0，当前为 {}", self.scale_percent),
            ));
        }
        if !(self.scale_override.percent > 0.0) {
            return Err(ReportError::invalid_config(
                "scale_override.percent",
                format!("必须大于 0，当前为 {}", self.scale_override.percent),
            ));
        }
        if self.scale_override.first > self.scale_override.last {
            return Err(ReportError::invalid_config(
                "scale_override",
                format!(
                    "first ({}) 不能大于 last ({})",
                    self.scale_override.first, self.scale_override.last
                ),
            ));
        }
        if !(0.0..0.5).contains(&self.label_margin_ratio) {
            return Err(ReportError::invalid_config(
                "label_margin_ratio",
                format!("必须在 [0, 0.5) 内，当前为 {}", self.label_margin_ratio),
            ));
        }
        if !(self.label_font_px > 0.0) {
            return Err(ReportError::invalid_config(
                "label_font_px",
                format!("必须大于 0，当前为 {}", self.label_font_px),
            ));
        }
        Ok(())
    }

    /// 解析字体文件的实际路径
    pub fn resolve_font_path(&self) -> PathBuf {
        if self.font_path.is_absolute() {
            return self.font_path.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map(|dir| dir.join(&self.font_path))
            .unwrap_or_else(|| self.font_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            root_dir = "D:/FOTOS"
            scale_percent = 10.0

            [scale_override]
            category = "PE-16"
            "#,
        )
        .unwrap();

        assert_eq!(config.root_dir, PathBuf::from("D:/FOTOS"));
        assert_eq!(config.scale_percent, 10.0);
        assert_eq!(config.scale_override.category, "PE-16");
        assert_eq!(config.scale_override.last, 61);
        assert_eq!(config.categories.len(), 3);
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let config = Config {
            scale_percent: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReportError::InvalidConfig {
                field: "scale_percent",
                ..
            })
        ));
    }

    #[test]
    fn test_inverted_override_range_rejected() {
        let config = Config {
            scale_override: ScaleOverride {
                first: 10,
                last: 2,
                ..ScaleOverride::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scale_override_matches_exact_range() {
        let rule = ScaleOverride::default();

        assert!(rule.applies_to("category-A_1"));
        assert!(rule.applies_to("category-A_5"));
        assert!(rule.applies_to("category-A_61"));
        assert!(!rule.applies_to("category-A_62"));
        assert!(!rule.applies_to("category-A_70"));
        assert!(!rule.applies_to("category-A_0"));
        assert!(!rule.applies_to("category-A_05"));
        assert!(!rule.applies_to("category-B_5"));
        assert!(!rule.applies_to("category-A"));
    }

    #[test]
    fn test_absolute_font_path_unchanged() {
        let abs = std::env::temp_dir().join("bold.ttf");
        let config = Config {
            font_path: abs.clone(),
            ..Config::default()
        };
        assert_eq!(config.resolve_font_path(), abs);
    }
}
