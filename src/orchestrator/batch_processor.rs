//! 批量报告处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的报告生成。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载字体，字体缺失时在处理任何文件夹之前终止
//! 2. **文件夹筛选**：委托 `FolderSelector` 得到排好序的文件夹列表
//! 3. **顺序组装**：逐个文件夹、逐张图片处理，每个文件夹后输出进度
//! 4. **写出文档**：全部成功后才写出输出文件
//! 5. **全局统计**：汇总章节、拒绝、方向回退等数量

use crate::config::Config;
use crate::error::Result;
use crate::orchestrator::report_assembler::ReportAssembler;
use crate::services::{
    FolderSelector, FontLabeler, ImageTransformer, Labeler, RejectWriter, ReportDocument,
    Selection, TransformStats,
};
use crate::utils::logging;
use tracing::{info, warn};

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 写入的章节数
    pub sections: usize,
    /// 被拒绝的文件夹数
    pub rejected: usize,
    /// 名称格式错误、归入其他类的文件夹数
    pub malformed_names: usize,
    /// 图片处理统计
    pub transform: TransformStats,
}

/// 组装完成但尚未写出的报告
pub struct BuiltReport {
    pub document: ReportDocument,
    pub summary: RunSummary,
}

/// 应用主结构
pub struct App<L = FontLabeler> {
    config: Config,
    labeler: L,
}

impl App<FontLabeler> {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let font_path = config.resolve_font_path();
        let labeler =
            FontLabeler::from_file(&font_path, config.label_font_px, config.label_margin_ratio)?;
        info!("✓ 字体已加载: {}", font_path.display());

        Ok(Self::with_labeler(config, labeler))
    }
}

impl<L: Labeler> App<L> {
    /// 使用指定的标签绘制器创建应用
    pub fn with_labeler(config: Config, labeler: L) -> Self {
        Self { config, labeler }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行应用主逻辑：组装并写出文档
    pub fn run(&self) -> Result<RunSummary> {
        let BuiltReport { document, summary } = self.build_report()?;

        document.save(&self.config.output_path)?;
        logging::print_final_stats(&summary, &self.config.output_path);

        Ok(summary)
    }

    /// 筛选文件夹并组装文档，不写文件
    pub fn build_report(&self) -> Result<BuiltReport> {
        let selection = self.select_folders()?;
        let Selection {
            folders,
            rejected,
            malformed_names,
        } = selection;

        logging::log_folders_selected(folders.len(), rejected.len());
        if let Some(path) = &self.config.rejected_log {
            RejectWriter::with_path(path).write_all(&rejected)?;
        }

        if folders.is_empty() {
            warn!("⚠️ 没有找到包含 4 张照片的文件夹，将生成空文档");
        }

        let transformer =
            ImageTransformer::new(&self.labeler, self.config.scale_override.clone());
        let mut assembler = ReportAssembler::new(transformer, self.config.scale_percent);

        let total = folders.len();
        for (index, folder) in folders.iter().enumerate() {
            assembler.add_folder(folder, total)?;
            logging::log_progress(index + 1, total);
        }

        let sections = assembler.sections();
        let (document, transform) = assembler.finish();

        Ok(BuiltReport {
            document,
            summary: RunSummary {
                sections,
                rejected: rejected.len(),
                malformed_names,
                transform,
            },
        })
    }

    /// 筛选文件夹
    fn select_folders(&self) -> Result<Selection> {
        info!("\n📁 正在扫描照片文件夹...");
        FolderSelector::new(
            self.config.categories.clone(),
            self.config.strict_folder_names,
        )
        .select(&self.config.root_dir)
    }
}
