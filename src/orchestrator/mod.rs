//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整次运行的流程调度。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量报告处理器
//! - 管理应用生命周期（初始化、运行）
//! - 持有字体资源
//! - 输出进度和全局统计信息
//!
//! ### `report_assembler` - 文档组装器
//! - 独占持有 `ReportDocument`
//! - 每个文件夹生成一个章节（分页、标题、两个图片表格）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PhotoFolder>)
//!     ↓
//! report_assembler (处理单个 PhotoFolder)
//!     ↓
//! services (能力层：folder_selector / image_transform / document)
//! ```

pub mod batch_processor;
pub mod figure_ctx;
pub mod report_assembler;

// 重新导出主要类型
pub use batch_processor::{App, BuiltReport, RunSummary};
pub use figure_ctx::FigureCtx;
pub use report_assembler::{figure_caption, ReportAssembler, VIEW_LABELS};
