//! 被拒绝文件夹记录服务 - 业务能力层
//!
//! 只负责把被拒绝的文件夹追加写入记录文件，不关心流程

use crate::error::{ReportError, Result};
use crate::models::RejectedFolder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 被拒绝文件夹记录服务
pub struct RejectWriter {
    path: PathBuf,
}

impl RejectWriter {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加写入本次运行的所有被拒绝文件夹
    pub fn write_all(&self, rejected: &[RejectedFolder]) -> Result<()> {
        if rejected.is_empty() {
            return Ok(());
        }

        debug!("写入 {} 条拒绝记录: {}", rejected.len(), self.path.display());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ReportError::io(&self.path, e))?;

        let mut content = format!(
            "# {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        for folder in rejected {
            content.push_str(&format!(
                "{} | {} | {}\n",
                folder.name,
                folder.path.display(),
                folder.reason
            ));
        }

        file.write_all(content.as_bytes())
            .map_err(|e| ReportError::io(&self.path, e))
    }
}
