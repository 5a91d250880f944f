//! 文档组装器 - 编排层
//!
//! ## 职责
//!
//! 每个合格文件夹生成一个章节：
//!
//! 1. **分页**：除第一章外，章节前插入分页符
//! 2. **标题**：`Figure N: Views of containment element <名称>`
//! 3. **图片表格**：图片 1–2 一个表格，图片 3–4 一个表格，每格一张带标签的图
//!
//! 文档只由组装器持有，直到 `finish` 交出。

use crate::error::Result;
use crate::models::PhotoFolder;
use crate::orchestrator::figure_ctx::FigureCtx;
use crate::services::{ImageTransformer, Labeler, ReportDocument, TransformStats};
use tracing::debug;

/// 四张图片的固定标签，顺序对应 1.jpg..4.jpg
pub const VIEW_LABELS: [&str; 4] = [
    "a) Start terminal view",
    "b) End terminal view",
    "c) Panoramic view",
    "d) Relevant view",
];

/// 每个表格的列数
const IMAGES_PER_ROW: usize = 2;

/// 章节标题
pub fn figure_caption(figure: usize, folder: &PhotoFolder) -> String {
    format!(
        "Figure {}: Views of containment element {}",
        figure,
        folder.display_name()
    )
}

/// 文档组装器
pub struct ReportAssembler<L> {
    transformer: ImageTransformer<L>,
    scale_percent: f64,
    document: ReportDocument,
    sections: usize,
}

impl<L: Labeler> ReportAssembler<L> {
    pub fn new(transformer: ImageTransformer<L>, scale_percent: f64) -> Self {
        Self {
            transformer,
            scale_percent,
            document: ReportDocument::new(),
            sections: 0,
        }
    }

    /// 已写入的章节数
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// 为一个文件夹追加章节
    ///
    /// 任一图片处理失败都会直接返回错误，不写入半个章节之后的内容。
    pub fn add_folder(&mut self, folder: &PhotoFolder, total: usize) -> Result<()> {
        let ctx = FigureCtx::new(self.sections + 1, total, &folder.name);
        debug!("{} 开始组装", ctx);

        if ctx.needs_page_break() {
            self.document.add_page_break();
        }
        self.document.add_caption(&figure_caption(ctx.figure, folder));

        for (row, pair) in folder.images.chunks(IMAGES_PER_ROW).enumerate() {
            let mut images = Vec::with_capacity(IMAGES_PER_ROW);
            for (col, path) in pair.iter().enumerate() {
                let label = VIEW_LABELS[row * IMAGES_PER_ROW + col];
                images.push(self.transformer.transform(path, self.scale_percent, label)?);
            }
            self.document.add_image_row(images);
        }

        self.sections += 1;
        debug!("{} 组装完成", ctx);
        Ok(())
    }

    /// 交出文档和处理统计
    pub fn finish(self) -> (ReportDocument, TransformStats) {
        (self.document, self.transformer.stats())
    }
}
