use std::path::{Path, PathBuf};
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// 报告生成错误类型
#[derive(Debug, Error)]
pub enum ReportError {
    /// 根目录不存在
    #[error("根目录不存在: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// 文件读写失败
    #[error("文件操作失败 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 字体文件不存在
    #[error("字体文件不存在: {}", path.display())]
    FontNotFound { path: PathBuf },

    /// 字体文件无法解析
    #[error("字体文件无效 ({}): {source}", path.display())]
    FontInvalid {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    /// 图片解码失败
    #[error("图片解码失败 ({}): {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    /// 图片编码失败
    #[error("图片编码失败 ({}): {source}", path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    /// 文件夹名称格式错误（严格模式）
    #[error("文件夹名称格式错误: {name} ({reason})")]
    MalformedFolderName { name: String, reason: String },

    /// 文档写入失败
    #[error("文档写入失败 ({}): {source}", path.display())]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    /// 配置值无效
    #[error("配置无效: {field} - {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// 配置文件解析失败
    #[error("配置文件解析失败 ({}): {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl ReportError {
    /// 创建文件操作错误
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建图片解码错误
    pub fn image_decode(
        path: impl AsRef<Path>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ReportError::ImageDecode {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    /// 创建图片编码错误
    pub fn image_encode(
        path: impl AsRef<Path>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ReportError::ImageEncode {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    /// 创建文档写入错误
    pub fn document_write(
        path: impl AsRef<Path>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ReportError::DocumentWrite {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    /// 创建配置无效错误
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ReportError::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 报告生成结果类型
pub type Result<T> = std::result::Result<T, ReportError>;
