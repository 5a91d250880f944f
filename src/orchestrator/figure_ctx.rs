//! 图片章节上下文
//!
//! 封装"我正在处理第几张图、对应哪个文件夹"这一信息

use std::fmt::Display;

/// 章节上下文
#[derive(Debug, Clone)]
pub struct FigureCtx {
    /// 图号（从 1 开始）
    pub figure: usize,

    /// 文件夹总数（仅用于日志显示）
    pub total: usize,

    /// 文件夹名称
    pub folder_name: String,
}

impl FigureCtx {
    pub fn new(figure: usize, total: usize, folder_name: impl Into<String>) -> Self {
        Self {
            figure,
            total,
            folder_name: folder_name.into(),
        }
    }

    /// 第一章之前不插入分页符
    pub fn needs_page_break(&self) -> bool {
        self.figure > 1
    }
}

impl Display for FigureCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[图 {}/{} 文件夹 {}]",
            self.figure, self.total, self.folder_name
        )
    }
}
