//! 报告文档
//!
//! 正文按顺序累积段落、表格和分页符，最后一次性写出 .docx。
//! 同时记录一份不含像素数据的结构大纲，便于日志和校验。

use crate::error::{ReportError, Result};
use crate::services::image_transform::LabeledImage;
use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Pic, Run, RunFonts, Table, TableCell,
    TableLayoutType, TableRow,
};
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, warn};

const CAPTION_FONT: &str = "Arial";
/// 12pt，单位为半磅
const CAPTION_SIZE_HALF_POINTS: usize = 24;

/// 文档结构大纲中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    PageBreak,
    Caption(String),
    ImageRow(Vec<CellSummary>),
}

/// 表格单元格摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSummary {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

enum BodyItem {
    Paragraph(Paragraph),
    Table(Table),
}

/// 报告文档，只由组装器持有和修改
#[derive(Default)]
pub struct ReportDocument {
    body: Vec<BodyItem>,
    outline: Vec<Block>,
}

impl ReportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入分页符
    pub fn add_page_break(&mut self) {
        let paragraph = Paragraph::new().add_run(Run::new().add_break(BreakType::Page));
        self.body.push(BodyItem::Paragraph(paragraph));
        self.outline.push(Block::PageBreak);
    }

    /// 插入居中的粗体标题段落
    pub fn add_caption(&mut self, text: &str) {
        let run = Run::new()
            .add_text(text)
            .bold()
            .size(CAPTION_SIZE_HALF_POINTS)
            .fonts(RunFonts::new().ascii(CAPTION_FONT).hi_ansi(CAPTION_FONT));
        let paragraph = Paragraph::new().add_run(run).align(AlignmentType::Center);

        self.body.push(BodyItem::Paragraph(paragraph));
        self.outline.push(Block::Caption(text.to_string()));
    }

    /// 插入 1 行 N 列的图片表格，图片字节移交给表格
    pub fn add_image_row(&mut self, images: Vec<LabeledImage>) {
        let mut summaries = Vec::with_capacity(images.len());
        let mut cells = Vec::with_capacity(images.len());

        for image in images {
            summaries.push(CellSummary {
                label: image.label,
                width: image.width,
                height: image.height,
            });
            let pic = Pic::new_with_dimensions(image.png, image.width, image.height);
            let paragraph = Paragraph::new().add_run(Run::new().add_image(pic));
            cells.push(TableCell::new().add_paragraph(paragraph));
        }

        let table = Table::new(vec![TableRow::new(cells)]).layout(TableLayoutType::Autofit);
        self.body.push(BodyItem::Table(table));
        self.outline.push(Block::ImageRow(summaries));
    }

    pub fn outline(&self) -> &[Block] {
        &self.outline
    }

    /// 所有标题文字，按出现顺序
    pub fn captions(&self) -> Vec<&str> {
        self.outline
            .iter()
            .filter_map(|b| match b {
                Block::Caption(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// 写出 .docx；失败时删除不完整的文件
    pub fn save(self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }

        let docx = self.body.into_iter().fold(Docx::new(), |docx, item| match item {
            BodyItem::Paragraph(p) => docx.add_paragraph(p),
            BodyItem::Table(t) => docx.add_table(t),
        });

        let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
        if let Err(e) = docx.build().pack(file) {
            if let Err(remove_err) = fs::remove_file(path) {
                warn!("无法删除不完整的文档 {}: {}", path.display(), remove_err);
            }
            return Err(ReportError::document_write(path, e));
        }

        debug!("文档已写入: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::{Cursor, Read};

    fn labeled(label: &str) -> LabeledImage {
        let mut png = Vec::new();
        RgbImage::from_pixel(6, 4, Rgb([10, 20, 30]))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        LabeledImage {
            png,
            width: 6,
            height: 4,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_outline_tracks_blocks_in_order() {
        let mut doc = ReportDocument::new();
        doc.add_caption("Figure 1: A");
        doc.add_image_row(vec![labeled("a"), labeled("b")]);
        doc.add_page_break();
        doc.add_caption("Figure 2: B");

        assert_eq!(doc.outline().len(), 4);
        assert_eq!(doc.outline()[2], Block::PageBreak);
        assert_eq!(doc.captions(), vec!["Figure 1: A", "Figure 2: B"]);
        assert!(matches!(&doc.outline()[1], Block::ImageRow(cells) if cells.len() == 2));
    }

    #[test]
    fn test_save_writes_zip_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.docx");

        let mut doc = ReportDocument::new();
        doc.add_caption("Figure 1: Views of containment element category-A 1");
        doc.add_image_row(vec![labeled("a"), labeled("b")]);
        doc.save(&path).unwrap();

        let mut magic = [0u8; 2];
        File::open(&path).unwrap().read_exact(&mut magic).unwrap();
        assert_eq!(&magic, b"PK");
    }
}
